// Decision engine: routes each snapshot to the policy for its mode

use rand::RngCore;
use tracing::debug;

use super::create_policy;
use super::difficulty::DifficultyTable;
use super::policy::Policy;
use crate::error::Result;
use crate::game::{AiMode, AiResponse, GameState};

/// Holds one policy per mode. Shared read-only by every connection.
pub struct DecisionEngine {
    difficulties: DifficultyTable,
    rule_based: Box<dyn Policy>,
    model_based: Box<dyn Policy>,
}

impl DecisionEngine {
    /// Build the engine with the stock policies for `difficulties`
    pub fn new(difficulties: DifficultyTable) -> Result<Self> {
        Ok(Self {
            rule_based: create_policy(AiMode::RuleBased, difficulties.clone())?,
            model_based: create_policy(AiMode::ModelBased, difficulties.clone())?,
            difficulties,
        })
    }

    /// Replace the policy answering `rule_based` requests
    pub fn with_rule_based(mut self, policy: Box<dyn Policy>) -> Self {
        self.rule_based = policy;
        self
    }

    /// Replace the policy answering `model_based` requests
    pub fn with_model_based(mut self, policy: Box<dyn Policy>) -> Self {
        self.model_based = policy;
        self
    }

    pub fn difficulties(&self) -> &DifficultyTable {
        &self.difficulties
    }

    pub fn policy_for(&self, mode: AiMode) -> &dyn Policy {
        match mode {
            AiMode::RuleBased => self.rule_based.as_ref(),
            AiMode::ModelBased => self.model_based.as_ref(),
        }
    }

    /// Pick the policy for `state.ai_mode` and compute its target.
    ///
    /// The state is expected to be validated already; errors from the policy
    /// are returned unchanged.
    pub fn select_and_compute(
        &self,
        state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Result<AiResponse> {
        let policy = self.policy_for(state.ai_mode);
        let target = policy.decide(state, rng)?;
        debug!(
            policy = policy.name(),
            target_x = target.x,
            target_y = target.y,
            "computed AI move"
        );
        Ok(target.into())
    }
}

impl std::fmt::Debug for DecisionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionEngine")
            .field("rule_based", &self.rule_based.name())
            .field("model_based", &self.model_based.name())
            .finish()
    }
}
