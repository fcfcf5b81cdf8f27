//! Masking and revealing of the secret phrase.
//!
//! Only the 26 Latin letters are ever hidden. Spaces, digits, punctuation
//! and any other character are shown as-is from the start.

/// Lowercase form of a character, when it folds to exactly one character.
pub(super) fn fold(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

/// Returns true if `c` is hidden behind `_` until guessed.
pub fn is_maskable(c: char) -> bool {
    fold(c).is_some_and(|l| l.is_ascii_lowercase())
}

/// Fully masked display string for `answer`.
pub fn derive_mask(answer: &str) -> String {
    answer
        .chars()
        .map(|c| if is_maskable(c) { '_' } else { c })
        .collect()
}

/// Display string for `answer` with every guessed letter revealed.
///
/// Revealed characters keep the case they have in `answer`.
pub fn derive_reveal(answer: &str, letter_guesses: &[char]) -> String {
    answer
        .chars()
        .map(|c| match fold(c) {
            Some(l) if is_maskable(c) && !letter_guesses.contains(&l) => '_',
            _ => c,
        })
        .collect()
}
