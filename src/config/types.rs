// Service configuration types
// All settings have defaults so a partial (or empty) file is valid

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::ai::DifficultyTable;
use crate::error::{AiError, Result};
use crate::game::DEFAULT_PADDLE_SPEED;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ai: AIConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    // Interface to bind
    pub host: String,

    // TCP port for HTTP and WebSocket traffic
    pub port: u16,

    // Origins allowed to call the HTTP endpoint from a browser
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    // One of "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn log_level(&self) -> Result<Level> {
        self.level.parse::<Level>().map_err(|_| {
            AiError::Configuration(format!("unknown logging.level \"{}\"", self.level))
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AIConfig {
    // Fixed seed for reproducible decisions; random per connection when absent.
    // Each HTTP request and each connection restarts from it, so leave unset in live play
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    // Full AI paddle speed in table units per second, reported to clients
    #[serde(default = "default_paddle_speed")]
    pub paddle_speed: f64,

    // Per-difficulty tuning
    #[serde(default)]
    pub difficulty: DifficultyTable,
}

fn default_paddle_speed() -> f64 {
    DEFAULT_PADDLE_SPEED
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            seed: None,
            paddle_speed: DEFAULT_PADDLE_SPEED,
            difficulty: DifficultyTable::default(),
        }
    }
}
