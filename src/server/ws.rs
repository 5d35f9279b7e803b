// Streaming endpoint: one snapshot in, one reply out, per text frame

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use super::routes::ErrorBody;
use super::AppState;
use crate::ai::DecisionEngine;
use crate::error::AiError;
use crate::game::{AiResponse, GameState};

/// What the server sends back for each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WsReply {
    Move(AiResponse),
    Error(ErrorBody),
}

impl From<AiError> for WsReply {
    fn from(err: AiError) -> Self {
        WsReply::Error(ErrorBody {
            error: err.to_string(),
        })
    }
}

/// Decode one text frame and compute its reply.
///
/// Every failure becomes an error reply; nothing here ends the connection.
pub fn handle_text_frame(engine: &DecisionEngine, text: &str, rng: &mut dyn RngCore) -> WsReply {
    let result = serde_json::from_str::<GameState>(text)
        .map_err(|e| AiError::Validation(e.to_string()))
        .and_then(|state| {
            state.validate()?;
            engine.select_and_compute(&state, rng)
        });

    match result {
        Ok(response) => WsReply::Move(response),
        Err(e) => {
            warn!("Error processing WebSocket message: {}", e);
            e.into()
        }
    }
}

pub async fn websocket_ai(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    info!("WebSocket connection established");

    let (mut ws_sender, mut ws_receiver) = socket.split();

    // One generator per connection; frames are answered in receipt order
    let mut rng = state.new_rng();
    let mut frames: u64 = 0;

    while let Some(msg) = ws_receiver.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                error!("WebSocket error: {}", e);
                break;
            }
        };

        let reply = match msg {
            Message::Text(text) => handle_text_frame(&state.engine, &text, &mut rng),
            Message::Binary(_) => {
                AiError::Validation("expected a JSON text frame, got binary".into()).into()
            }
            Message::Close(_) => break,
            // Pings are answered by axum
            Message::Ping(_) | Message::Pong(_) => continue,
        };
        frames += 1;

        let json = match serde_json::to_string(&reply) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to encode reply: {}", e);
                continue;
            }
        };
        if ws_sender.send(Message::Text(json)).await.is_err() {
            break;
        }
    }

    debug!("Answered {} frames", frames);
    info!("WebSocket connection closed");
}
