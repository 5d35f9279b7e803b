// Policy trait for AI strategies

use rand::RngCore;

use crate::error::Result;
use crate::game::{GameState, Vector2};

/// Target position for the AI paddle's center
pub type TargetPosition = Vector2;

/// Trait for AI decision strategies
///
/// A policy maps one snapshot to one target. It keeps no state between calls,
/// so a single instance can serve every connection concurrently. Randomness
/// comes only from the generator handed in by the caller, which makes a
/// seeded generator enough to reproduce a decision.
pub trait Policy: Send + Sync {
    /// Decide where the AI paddle should go for this snapshot
    ///
    /// # Arguments
    /// * `state` - Validated snapshot of puck, paddles and table
    /// * `rng` - Entropy source for difficulty shaping
    fn decide(&self, state: &GameState, rng: &mut dyn RngCore) -> Result<TargetPosition>;

    /// Policy name for logging
    fn name(&self) -> &str;
}
