// Model-based policy slot

use rand::RngCore;
use tracing::trace;

use super::policy::{Policy, TargetPosition};
use super::rule_based::RuleBasedPolicy;
use crate::error::Result;
use crate::game::GameState;

/// Placeholder for a learned policy.
///
/// No model is loaded yet, so every decision is delegated to the wrapped
/// rule-based policy. A real implementation replaces this type behind the
/// same `Policy` trait; the engine and transport need no change.
#[derive(Debug, Clone, Default)]
pub struct ModelBasedPolicy {
    fallback: RuleBasedPolicy,
}

impl ModelBasedPolicy {
    pub fn new(fallback: RuleBasedPolicy) -> Self {
        Self { fallback }
    }
}

impl Policy for ModelBasedPolicy {
    fn decide(&self, state: &GameState, rng: &mut dyn RngCore) -> Result<TargetPosition> {
        trace!("no model loaded, using rule-based fallback");
        self.fallback.decide(state, rng)
    }

    fn name(&self) -> &str {
        "model_based"
    }
}
