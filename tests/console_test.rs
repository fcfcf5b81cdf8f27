//! Tests for the interactive console game.

use std::io::Cursor;

use strictly_hangman::{GameRegistry, GameStatus, console};

fn run(script: &str) -> (anyhow::Result<GameStatus>, String) {
    let registry = GameRegistry::new();
    let mut output = Vec::new();
    let result = console::play(&registry, Cursor::new(script.to_string()), &mut output);
    (result, String::from_utf8(output).expect("Output not UTF-8"))
}

#[test]
fn test_console_win_by_letters() {
    let (result, output) = run("Go Lang\ng\no\nl\na\nn\n");

    assert_eq!(result.unwrap(), GameStatus::Win);
    assert!(output.starts_with("Input your phrase: "));
    assert!(output.contains("G_ ___g"));
    assert!(output.contains("You win! The correct phrase was:\nGo Lang\n"));
}

#[test]
fn test_console_win_by_phrase() {
    let (result, output) = run("cat\nCAT\n");

    assert_eq!(result.unwrap(), GameStatus::Win);
    assert!(output.contains("___\nLives: 5\n"));
    assert!(output.contains("You win!"));
}

#[test]
fn test_console_loss() {
    let (result, output) = run("cat\nq\nw\ne\nr\ny\n");

    assert_eq!(result.unwrap(), GameStatus::Loss);
    assert!(output.contains("Lives: 1"));
    assert!(output.contains("Guessed letters: qwer"));
    assert!(output.contains("You lost. The correct phrase was:\ncat\n"));
}

#[test]
fn test_console_reports_duplicates_and_keeps_going() {
    let (result, output) = run("cat\nx\nx\ndog\ndog\ncat\n");

    assert_eq!(result.unwrap(), GameStatus::Win);
    assert!(output.contains("Already guessed x"));
    assert!(output.contains("Already guessed dog"));
    assert!(output.contains("Guessed phrases: [dog]"));
    assert!(output.contains("Lives: 3"));
}

#[test]
fn test_console_reprompts_on_empty_input() {
    let (result, output) = run("\ncat\n\ncat\n");

    assert_eq!(result.unwrap(), GameStatus::Win);
    assert!(output.contains("No answer given."));
    assert!(output.contains("No guess given."));
}

#[test]
fn test_console_handles_crlf() {
    let (result, _) = run("cat\r\ncat\r\n");
    assert_eq!(result.unwrap(), GameStatus::Win);
}

#[test]
fn test_console_end_of_input_is_error() {
    let (result, _) = run("cat\nc\n");
    assert!(result.is_err());

    let (result, _) = run("");
    assert!(result.is_err());
}
