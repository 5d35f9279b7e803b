// AI module: decision policies for the computer-controlled paddle

mod difficulty;
mod engine;
mod model_based;
mod policy;
mod prediction;
mod rule_based;

pub use difficulty::{DifficultyProfile, DifficultyTable};
pub use engine::DecisionEngine;
pub use model_based::ModelBasedPolicy;
pub use policy::{Policy, TargetPosition};
pub use prediction::{plan_intercept, Intercept};
pub use rule_based::{classify, Phase, Plan, RuleBasedPolicy};

use crate::error::Result;
use crate::game::AiMode;

impl AiMode {
    /// Get display name for the mode
    pub fn display_name(&self) -> &str {
        match self {
            AiMode::RuleBased => "Rule-based",
            AiMode::ModelBased => "Model-based",
        }
    }

    /// Get description for the mode
    pub fn description(&self) -> &str {
        match self {
            AiMode::RuleBased => "Phase rules with geometric intercept prediction",
            AiMode::ModelBased => "Learned policy slot (currently falls back to rules)",
        }
    }

    /// Get all available modes
    pub fn all() -> Vec<AiMode> {
        vec![AiMode::RuleBased, AiMode::ModelBased]
    }
}

/// Create a policy instance for a mode
pub fn create_policy(mode: AiMode, difficulties: DifficultyTable) -> Result<Box<dyn Policy>> {
    let rules = RuleBasedPolicy::new(difficulties)?;
    Ok(match mode {
        AiMode::RuleBased => Box::new(rules),
        AiMode::ModelBased => Box::new(ModelBasedPolicy::new(rules)),
    })
}
