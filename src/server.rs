//! HTTP game server.
//!
//! A thin JSON layer over [`GameRegistry`]. The answer is only ever
//! serialized once a game has been won or lost.

use crate::config::ServerConfig;
use crate::games::hangman::{Game, GameId, GameStatus, HangmanError};
use crate::registry::GameRegistry;
use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, info, instrument, warn};

/// Query parameters for creating a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGameQuery {
    /// The secret phrase.
    #[serde(default)]
    pub answer: String,
}

/// Request for making a guess.
#[derive(Debug, Clone, Default, Serialize, Deserialize, new)]
pub struct PlayRequest {
    /// Game ID.
    #[serde(default)]
    pub id: String,
    /// A single letter or a whole phrase.
    #[serde(default)]
    pub guess: String,
}

/// A game that is still being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InProgressGame {
    /// Game ID.
    pub id: GameId,
    /// Remaining lives.
    pub lives: i32,
    /// Guessed letters, in guess order.
    pub letter_guesses: String,
    /// Guessed phrases, in guess order.
    pub phrase_guesses: Vec<String>,
    /// Partially revealed answer.
    pub current: String,
}

/// A game that has been won or lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedGame {
    /// Game ID.
    pub id: GameId,
    /// Remaining lives.
    pub lives: i32,
    /// The secret phrase.
    pub answer: String,
    /// Guessed letters, in guess order.
    pub letter_guesses: String,
    /// Guessed phrases, in guess order.
    pub phrase_guesses: Vec<String>,
    /// Final status.
    pub status: GameStatus,
}

/// Client-facing view of a game, chosen by its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameView {
    /// Won or lost; includes the answer.
    Finished(FinishedGame),
    /// Still being played; the answer is withheld.
    InProgress(InProgressGame),
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        match game.status() {
            GameStatus::Unfinished => GameView::InProgress(InProgressGame {
                id: game.id().clone(),
                lives: *game.lives(),
                letter_guesses: game.letter_guesses_string(),
                phrase_guesses: game.phrase_guesses().clone(),
                current: game.current().clone(),
            }),
            status => GameView::Finished(FinishedGame {
                id: game.id().clone(),
                lives: *game.lives(),
                answer: game.answer().clone(),
                letter_guesses: game.letter_guesses_string(),
                phrase_guesses: game.phrase_guesses().clone(),
                status,
            }),
        }
    }
}

/// Response listing game IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameList {
    /// IDs in creation order.
    pub ids: Vec<GameId>,
}

/// Error returned by the HTTP handlers.
#[derive(Debug, derive_more::Display)]
pub enum ApiError {
    /// The engine rejected the request.
    #[display("{}", _0)]
    Game(HangmanError),
    /// A required request field was empty or missing.
    #[display("No {} given.", _0)]
    MissingField(&'static str),
}

impl std::error::Error for ApiError {}

impl From<HangmanError> for ApiError {
    fn from(error: HangmanError) -> Self {
        ApiError::Game(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Game(HangmanError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Game(
                HangmanError::InvalidAnswer
                | HangmanError::DuplicateGuess(_)
                | HangmanError::GameOver(_),
            )
            | ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(serde_json::json!({ "message": self.to_string() }));
        (status, body).into_response()
    }
}

/// Builds the application router.
#[instrument(skip(registry))]
pub fn router(registry: GameRegistry, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/create", get(create_game))
        .route("/games", get(list_games))
        .route("/game/{id}", get(get_game).delete(remove_game))
        .route("/play", post(play))
        .layer(cors_layer(allowed_origins))
        .with_state(registry)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                }),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
            HeaderName::from_static("x-requested-with"),
        ])
}

#[instrument(skip(registry, query))]
async fn create_game(
    State(registry): State<GameRegistry>,
    Query(query): Query<CreateGameQuery>,
) -> Result<Json<GameView>, ApiError> {
    let game = registry.create(&query.answer).inspect_err(|e| {
        warn!(error = %e, "Failed to create game");
    })?;

    info!(game_id = %game.id(), "Game created over HTTP");
    Ok(Json(GameView::from(&game)))
}

#[instrument(skip(registry))]
async fn get_game(
    State(registry): State<GameRegistry>,
    Path(id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    let game = registry.find_by_id(&id)?;
    debug!(status = %game.status(), "Game fetched");
    Ok(Json(GameView::from(&game)))
}

#[instrument(skip(registry))]
async fn list_games(State(registry): State<GameRegistry>) -> Json<GameList> {
    Json(GameList {
        ids: registry.list(),
    })
}

#[instrument(skip(registry, req), fields(game_id = %req.id))]
async fn play(
    State(registry): State<GameRegistry>,
    Json(req): Json<PlayRequest>,
) -> Result<Json<GameView>, ApiError> {
    if req.id.is_empty() {
        return Err(ApiError::MissingField("ID"));
    }
    if req.guess.is_empty() {
        return Err(ApiError::MissingField("guess"));
    }

    let game = registry.submit_guess(&req.id, &req.guess).inspect_err(|e| {
        warn!(error = %e, "Guess rejected");
    })?;

    info!(lives = game.lives(), status = %game.status(), "Guess accepted");
    Ok(Json(GameView::from(&game)))
}

#[instrument(skip(registry))]
async fn remove_game(
    State(registry): State<GameRegistry>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    registry.remove(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Binds the configured address and serves games until the process exits.
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig, registry: GameRegistry) -> Result<()> {
    let app = router(registry, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;

    info!(addr = %listener.local_addr()?, "Server ready");
    axum::serve(listener, app).await?;

    Ok(())
}
