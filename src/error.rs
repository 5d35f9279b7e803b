// Error types shared by the decision engine and the transport layer

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AiError {
    /// Malformed, missing or out-of-range input. Raised at the boundary only.
    #[error("invalid game state: {0}")]
    Validation(String),

    /// Difficulty table or server settings that cannot be used as-is.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A prediction produced a non-finite coordinate.
    #[error("computation error: {0}")]
    Computation(String),
}

pub type Result<T> = std::result::Result<T, AiError>;
