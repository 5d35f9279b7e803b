// Rule-based policy: phase classification, intercept prediction, difficulty shaping

use rand::{Rng, RngCore};
use rand_distr::{Bernoulli, Distribution};
use tracing::trace;

use super::difficulty::{DifficultyProfile, DifficultyTable};
use super::policy::{Policy, TargetPosition};
use super::prediction::{clamp_between, plan_intercept, x_after};
use crate::error::{AiError, Result};
use crate::game::{GameState, Vector2};

/// Below this speed the puck counts as idle (units per second)
pub const IDLE_SPEED: f64 = 20.0;
/// Hit line for intercepts, as a fraction of the center line Y
pub const HIT_LINE_FRACTION: f64 = 0.3;
/// Holding position while the puck travels away, as a fraction of the center line Y
pub const RECENTER_FRACTION: f64 = 0.4;
/// Within this distance the AI aims straight at the puck
pub const CLOSE_RANGE: f64 = 150.0;
/// Look-ahead for the close-range aim, in seconds
pub const CLOSE_LOOK_AHEAD: f64 = 0.1;

const STRIKE_OFFSET: f64 = 25.0;
const STRIKE_OFFSET_JITTER: f64 = 10.0;
const APPROACH_OFFSET: f64 = 30.0;
const VARIATION_WEIGHT: f64 = 0.3;

/// Situation the AI is reacting to, first match wins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Idle puck in the AI court: walk up and strike it
    StrikeIdle,
    /// Puck coming toward the AI, or in its court with vertical motion
    Intercept,
    /// Puck in the AI court moving only sideways
    AlignStationary,
    /// Puck heading for the human's court
    Recenter,
    /// Puck in the human's court without vertical motion
    Hold,
}

/// Phase plus the target before difficulty shaping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub phase: Phase,
    pub target: TargetPosition,
}

/// Classify the snapshot into a phase
pub fn classify(state: &GameState) -> Phase {
    let puck = &state.puck;
    let in_ai_court = puck.y < state.center_line_y();
    let idle = puck.speed() < IDLE_SPEED;

    if in_ai_court && idle {
        Phase::StrikeIdle
    } else if puck.vy < 0.0 || in_ai_court {
        if puck.vy != 0.0 {
            Phase::Intercept
        } else {
            Phase::AlignStationary
        }
    } else if puck.vy > 0.0 {
        Phase::Recenter
    } else {
        Phase::Hold
    }
}

/// Uniform draw from `[-range, range]`; no draw when the range is zero
fn jitter(rng: &mut dyn RngCore, range: f64) -> f64 {
    if range > 0.0 {
        rng.gen_range(-range..=range)
    } else {
        0.0
    }
}

/// Hand-written strategy that plays the AI half of the table
#[derive(Debug, Clone, Default)]
pub struct RuleBasedPolicy {
    difficulties: DifficultyTable,
}

impl RuleBasedPolicy {
    /// Create a policy with a custom difficulty table
    pub fn new(difficulties: DifficultyTable) -> Result<Self> {
        difficulties.validate()?;
        Ok(Self { difficulties })
    }

    pub fn difficulties(&self) -> &DifficultyTable {
        &self.difficulties
    }

    /// Work out the phase and the unshaped target.
    ///
    /// Only the idle strike draws randomness here; every other phase is a
    /// pure function of the snapshot.
    pub fn plan(&self, state: &GameState, rng: &mut dyn RngCore) -> Result<Plan> {
        let profile = self.difficulties.profile(state.difficulty);
        let puck = &state.puck;
        let width = state.table_width;
        let center_line_y = state.center_line_y();
        let r = state.ai_paddle.radius;

        // AI paddle stays on the table and in its own half
        let clamp_x = |x: f64| clamp_between(x, r, width - r);
        let clamp_y = |y: f64| clamp_between(y, r, center_line_y - r);

        let phase = classify(state);
        let target = match phase {
            Phase::StrikeIdle => {
                let human_error = jitter(rng, profile.strike_error);
                let hit_offset = STRIKE_OFFSET + jitter(rng, STRIKE_OFFSET_JITTER);
                Vector2::new(clamp_x(puck.x + human_error), clamp_y(puck.y - hit_offset))
            }
            Phase::Intercept => {
                let hit_line_y = center_line_y * HIT_LINE_FRACTION;
                let intercept = plan_intercept(puck, hit_line_y).ok_or_else(|| {
                    AiError::Computation("intercept requested for a puck with no vertical velocity".into())
                })?;

                let distance = state.ai_paddle.position().distance_to(puck.position());
                let predicted_x = if distance < CLOSE_RANGE {
                    x_after(puck, CLOSE_LOOK_AHEAD)
                } else {
                    x_after(puck, intercept.time)
                };
                // A vanishing vy sends the intercept time to infinity. An infinite
                // X clamps to a table edge; NaN only comes from vx == 0, where
                // the puck keeps its X.
                let predicted_x = if predicted_x.is_nan() { puck.x } else { predicted_x };

                Vector2::new(clamp_x(predicted_x), clamp_y(intercept.y))
            }
            Phase::AlignStationary => {
                Vector2::new(clamp_x(puck.x), clamp_y(puck.y - APPROACH_OFFSET))
            }
            Phase::Recenter => Vector2::new(width / 2.0, center_line_y * RECENTER_FRACTION),
            Phase::Hold => Vector2::new(width / 2.0, center_line_y / 2.0),
        };

        Ok(Plan { phase, target })
    }

    /// Perturb the target X to make the AI beatable. Y is left as planned.
    pub fn shape(
        &self,
        state: &GameState,
        target: TargetPosition,
        rng: &mut dyn RngCore,
    ) -> Result<TargetPosition> {
        let profile: &DifficultyProfile = self.difficulties.profile(state.difficulty);
        let r = state.ai_paddle.radius;

        let mut x = target.x
            + jitter(rng, profile.noise_range)
            + jitter(rng, profile.human_variation) * VARIATION_WEIGHT;

        if profile.miss_chance > 0.0 {
            let miss = Bernoulli::new(profile.miss_chance)
                .map_err(|e| AiError::Configuration(format!("miss_chance: {}", e)))?;
            if miss.sample(&mut *rng) {
                x += jitter(rng, profile.miss_range);
            }
        }

        Ok(Vector2::new(clamp_between(x, r, state.table_width - r), target.y))
    }
}

impl Policy for RuleBasedPolicy {
    fn decide(&self, state: &GameState, rng: &mut dyn RngCore) -> Result<TargetPosition> {
        let plan = self.plan(state, rng)?;
        let target = self.shape(state, plan.target, rng)?;

        trace!(
            phase = ?plan.phase,
            difficulty = state.difficulty.as_str(),
            x = target.x,
            y = target.y,
            "rule-based decision"
        );

        Ok(target)
    }

    fn name(&self) -> &str {
        "rule_based"
    }
}
