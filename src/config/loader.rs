// Configuration file loading and creation

use super::types::Config;
use crate::error::{AiError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the default path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("airhockey-ai");
    path.push("config.toml");
    path
}

/// Load configuration from `path`, or create a default file there if it doesn't exist
///
/// Unlike a missing file, an unreadable or invalid file is an error: the
/// service refuses to start rather than run with settings nobody asked for.
pub fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|e| {
            AiError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&contents).map_err(|e| {
            AiError::Configuration(format!("failed to parse {}: {}", path.display(), e))
        })?
    } else {
        create_default_config(path)?;
        Config::default()
    };

    config.validate()?;
    Ok(config)
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config)
        .map_err(|e| AiError::Configuration(format!("failed to serialize defaults: {}", e)))?;

    // Add helpful header comments
    let commented_toml = format!(
        "# Air hockey AI service configuration\n\
         # Restart the service after editing\n\
         #\n\
         # logging.level: \"trace\", \"debug\", \"info\", \"warn\", \"error\"\n\
         # ai.seed: set to a number for reproducible decisions (replays and tests only:\n\
         #          every HTTP request and every connection restarts from this seed,\n\
         #          so /ai/move draws the same noise on every call)\n\
         # ai.difficulty.*: noise and pass-through mover settings per level\n\n\
         {}",
        toml_string
    );

    let write = || -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, commented_toml)
    };
    write().map_err(|e| {
        AiError::Configuration(format!("failed to write {}: {}", path.display(), e))
    })?;

    Ok(())
}

impl Config {
    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        self.logging.log_level()?;
        self.ai.difficulty.validate()?;

        if !self.ai.paddle_speed.is_finite() || self.ai.paddle_speed <= 0.0 {
            return Err(AiError::Configuration(format!(
                "ai.paddle_speed must be positive, got {}",
                self.ai.paddle_speed
            )));
        }

        Ok(())
    }
}
