// HTTP and WebSocket transport around the decision engine

mod routes;
mod ws;

pub use routes::ErrorBody;
pub use ws::{handle_text_frame, WsReply};

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::info;

use crate::ai::DecisionEngine;
use crate::config::Config;
use crate::error::{AiError, Result};

/// Shared by every request and connection
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<DecisionEngine>,
    pub paddle_speed: f64,
    seed: Option<u64>,
}

impl AppState {
    pub fn new(engine: DecisionEngine, paddle_speed: f64, seed: Option<u64>) -> Self {
        Self {
            engine: Arc::new(engine),
            paddle_speed,
            seed,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let engine = DecisionEngine::new(config.ai.difficulty.clone())?;
        Ok(Self::new(engine, config.ai.paddle_speed, config.ai.seed))
    }

    /// Fresh generator for one request or one connection
    pub fn new_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            // Wildcards cannot be combined with credentials
            if origin == "*" {
                return Err(AiError::Configuration(
                    "allowed origins must be listed explicitly, \"*\" is not accepted".into(),
                ));
            }
            origin.parse::<HeaderValue>().map_err(|_| {
                AiError::Configuration(format!("invalid allowed origin \"{}\"", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Build the router with every endpoint and the CORS policy
pub fn router(state: AppState, allowed_origins: &[String]) -> Result<Router> {
    let ai = Router::new()
        .route("/move", post(routes::ai_move))
        .route("/profiles", get(routes::profiles))
        .route("/ws", get(ws::websocket_ai));

    Ok(Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .nest("/ai", ai)
        .layer(cors_layer(allowed_origins)?)
        .with_state(state))
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state, &config.server.allowed_origins)?;

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("AI service listening on {}", listener.local_addr()?);
    if let Some(seed) = config.ai.seed {
        info!("Deterministic decisions enabled (seed {})", seed);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("AI service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
