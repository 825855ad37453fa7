//! HTTP transport for the chess service.
//!
//! Thin glue only: endpoints parse JSON, call into the game/search core and
//! format the result. One live game per process, matching the service this
//! reproduces; the library itself supports any number of concurrent games.

use crate::config::Config;
use crate::error::{GameError, GameResult};
use crate::game::Game;
use crate::rules;
use crate::types::Depth;
use crate::uci::UciEngine;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::{Arc, Mutex};

/// Shared state behind the router
#[derive(Clone)]
pub struct AppState {
    game: Arc<Mutex<Game>>,
    engine: Option<Arc<Mutex<UciEngine>>>,
    depth: Depth,
}

impl AppState {
    /// Build service state from configuration, spawning the external UCI
    /// engine if one is configured
    pub fn from_config(config: &Config) -> GameResult<Self> {
        let engine = match &config.engine_path {
            Some(path) => {
                tracing::info!(path, "spawning external UCI engine");
                Some(Arc::new(Mutex::new(UciEngine::spawn(path)?)))
            }
            None => None,
        };

        Ok(Self {
            game: Arc::new(Mutex::new(Game::new())),
            engine,
            depth: config.depth,
        })
    }
}

#[derive(Deserialize)]
struct MakeMoveRequest {
    #[serde(rename = "move")]
    mv: String,
}

#[derive(Serialize)]
struct StateResponse {
    success: bool,
    state: String,
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    mv: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

/// JSON error responses with the status the condition deserves
struct ApiError(GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GameError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        let body = Json(ErrorResponse {
            success: false,
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/make-move", post(make_move))
        .route("/ai-move", get(ai_move))
        .route("/new-game", post(new_game))
        .route("/state", get(current_state))
        .with_state(state)
}

/// Apply a player's move token to the live game
async fn make_move(
    State(state): State<AppState>,
    Json(request): Json<MakeMoveRequest>,
) -> Result<Json<StateResponse>, ApiError> {
    let mut game = state.game.lock().unwrap();
    let new_state = game.apply_move_token(&request.mv)?;
    tracing::info!(mv = %request.mv, "player move applied");
    Ok(Json(StateResponse {
        success: true,
        state: new_state,
        mv: Some(request.mv.trim().to_string()),
    }))
}

/// Compute and commit the engine's reply.
///
/// Both move sources are synchronous (a tree walk, or pipe I/O to the
/// engine process), so the work runs on the blocking pool rather than
/// stalling an async worker.
async fn ai_move(State(state): State<AppState>) -> Result<Json<StateResponse>, ApiError> {
    let (token, new_state) = tokio::task::spawn_blocking(move || compute_ai_move(&state))
        .await
        .map_err(|err| GameError::Engine(io::Error::new(io::ErrorKind::Other, err)))??;

    Ok(Json(StateResponse {
        success: true,
        state: new_state,
        mv: Some(token),
    }))
}

/// Pick a reply from the configured move source and commit it.
/// Returns the move token and the resulting state token.
fn compute_ai_move(state: &AppState) -> GameResult<(String, String)> {
    let mut game = state.game.lock().unwrap();

    match &state.engine {
        Some(engine) => {
            // External engine picks; the move is validated like any other
            // external input before it touches the board
            let mut engine = engine.lock().unwrap();
            let token = engine.best_move(&game.fen(), state.depth.raw())?;
            let new_state = game.apply_move_token(&token)?;
            Ok((token, new_state))
        }
        None => {
            let reply = game.engine_reply(state.depth)?;
            tracing::info!(mv = %rules::format_move(reply.mv), score = %reply.score, "minimax move");
            Ok((rules::format_move(reply.mv), reply.state))
        }
    }
}

/// Reset the live game to the starting position
async fn new_game(State(state): State<AppState>) -> Json<StateResponse> {
    let mut game = state.game.lock().unwrap();
    *game = Game::new();
    tracing::info!("new game started");
    Json(StateResponse {
        success: true,
        state: game.fen(),
        mv: None,
    })
}

/// Return the current state token without mutating anything
async fn current_state(State(state): State<AppState>) -> Json<StateResponse> {
    let game = state.game.lock().unwrap();
    Json(StateResponse {
        success: true,
        state: game.fen(),
        mv: None,
    })
}
