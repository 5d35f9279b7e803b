// Request/response endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use super::AppState;
use crate::ai::DifficultyTable;
use crate::error::AiError;
use crate::game::{AiResponse, GameState};

/// Body returned for any failed request or stream message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AiError {
    fn into_response(self) -> Response {
        let status = match self {
            AiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AiError::Configuration(_) | AiError::Computation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "AI Air Hockey Backend API", "status": "running" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Decode, validate and answer one snapshot
pub async fn ai_move(
    State(state): State<AppState>,
    payload: Result<Json<GameState>, JsonRejection>,
) -> Result<Json<AiResponse>, AiError> {
    let Json(game_state) = payload.map_err(|rejection| {
        warn!("Rejected move request: {}", rejection.body_text());
        AiError::Validation(rejection.body_text())
    })?;
    game_state.validate()?;

    let mut rng = state.new_rng();
    let response = state.engine.select_and_compute(&game_state, &mut rng)?;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
pub struct ProfilesResponse {
    pub paddle_speed: f64,
    pub difficulties: DifficultyTable,
}

/// Difficulty table in effect, including the mover's pass-through values
pub async fn profiles(State(state): State<AppState>) -> Json<ProfilesResponse> {
    Json(ProfilesResponse {
        paddle_speed: state.paddle_speed,
        difficulties: state.engine.difficulties().clone(),
    })
}
