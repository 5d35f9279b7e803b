// Configuration module for the AI service
// Handles loading service settings and difficulty tuning from a TOML file

pub mod loader;
pub mod types;

pub use loader::{create_default_config, get_config_path, load_config};
pub use types::{AIConfig, Config, LoggingConfig, ServerConfig};
