pub mod motion;
pub mod state;

pub use motion::{advance_paddle, step_toward, DEFAULT_PADDLE_SPEED};
pub use state::{AiMode, AiResponse, Difficulty, GameState, PaddleState, PuckState, Vector2};
