use serde::{Deserialize, Serialize};

use crate::error::{AiError, Result};

/// Generic 2D point in table coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Vector2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Circular paddle: center position and collision radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl PaddleState {
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PuckState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl PuckState {
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Magnitude of the velocity vector, in units per second
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

/// Which strategy slot answers a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiMode {
    #[default]
    RuleBased,
    ModelBased,
}

/// Snapshot supplied by the client for a single decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub puck: PuckState,
    pub human_paddle: PaddleState,
    pub ai_paddle: PaddleState,
    pub table_width: f64,
    pub table_height: f64,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub ai_mode: AiMode,
}

impl GameState {
    /// Y coordinate of the midline; the AI owns `y < center_line_y()`
    pub fn center_line_y(&self) -> f64 {
        self.table_height / 2.0
    }

    /// Check the data-model invariants before the snapshot reaches a policy.
    ///
    /// Coordinates are allowed to sit outside the table; only sizes and
    /// finiteness are enforced here.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("puck.x", self.puck.x),
            ("puck.y", self.puck.y),
            ("puck.vx", self.puck.vx),
            ("puck.vy", self.puck.vy),
            ("puck.radius", self.puck.radius),
            ("human_paddle.x", self.human_paddle.x),
            ("human_paddle.y", self.human_paddle.y),
            ("human_paddle.radius", self.human_paddle.radius),
            ("ai_paddle.x", self.ai_paddle.x),
            ("ai_paddle.y", self.ai_paddle.y),
            ("ai_paddle.radius", self.ai_paddle.radius),
            ("table_width", self.table_width),
            ("table_height", self.table_height),
        ];
        if let Some((field, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AiError::Validation(format!("{} must be a finite number", field)));
        }

        if self.table_width <= 0.0 || self.table_height <= 0.0 {
            return Err(AiError::Validation(format!(
                "table dimensions must be positive, got {}x{}",
                self.table_width, self.table_height
            )));
        }

        let radii = [
            ("puck.radius", self.puck.radius),
            ("human_paddle.radius", self.human_paddle.radius),
            ("ai_paddle.radius", self.ai_paddle.radius),
        ];
        if let Some((field, value)) = radii.iter().find(|(_, r)| *r < 0.0) {
            return Err(AiError::Validation(format!(
                "{} must not be negative, got {}",
                field, value
            )));
        }

        Ok(())
    }
}

/// Decision output: desired center of the AI paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub target_x: f64,
    pub target_y: f64,
}

impl From<Vector2> for AiResponse {
    fn from(target: Vector2) -> Self {
        Self {
            target_x: target.x,
            target_y: target.y,
        }
    }
}
