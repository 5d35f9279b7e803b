// Difficulty profiles for the AI opponent

use serde::{Deserialize, Serialize};

use crate::error::{AiError, Result};
use crate::game::Difficulty;

/// Tuning for one difficulty level
///
/// The first five fields shape the decided target. `speed_multiplier`,
/// `reaction_delay` and `aggression` are never read by the policies; they are
/// carried for the paddle mover on the client side.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DifficultyProfile {
    pub noise_range: f64,           // Uniform X noise, ±noise_range
    pub human_variation: f64,       // Second X jitter, scaled by 0.3
    pub miss_chance: f64,           // Probability of an extra "miss" perturbation
    pub miss_range: f64,            // Size of that perturbation, ±miss_range
    pub strike_error: f64,          // X error when striking an idle puck
    pub speed_multiplier: f64,      // Fraction of full paddle speed
    pub reaction_delay: f64,        // Seconds
    pub aggression: f64,            // 0.0 passive .. 1.0 all-out
}

impl DifficultyProfile {
    pub fn easy() -> Self {
        Self {
            noise_range: 50.0,
            human_variation: 40.0,
            miss_chance: 0.3,
            miss_range: 30.0,
            strike_error: 25.0,
            speed_multiplier: 0.4,
            reaction_delay: 0.1,
            aggression: 0.5,
        }
    }

    pub fn medium() -> Self {
        Self {
            noise_range: 20.0,
            human_variation: 20.0,
            miss_chance: 0.0,
            miss_range: 0.0,
            strike_error: 15.0,
            speed_multiplier: 0.7,
            reaction_delay: 0.05,
            aggression: 0.75,
        }
    }

    pub fn hard() -> Self {
        Self {
            noise_range: 5.0,
            human_variation: 8.0,
            miss_chance: 0.0,
            miss_range: 0.0,
            strike_error: 8.0,
            speed_multiplier: 1.0,
            reaction_delay: 0.0,
            aggression: 1.0,
        }
    }

    /// A profile with every random perturbation switched off
    pub fn exact() -> Self {
        Self {
            noise_range: 0.0,
            human_variation: 0.0,
            miss_chance: 0.0,
            miss_range: 0.0,
            strike_error: 0.0,
            ..Self::hard()
        }
    }

    fn validate(&self, level: Difficulty) -> Result<()> {
        let ranges = [
            ("noise_range", self.noise_range),
            ("human_variation", self.human_variation),
            ("miss_range", self.miss_range),
            ("strike_error", self.strike_error),
            ("speed_multiplier", self.speed_multiplier),
            ("reaction_delay", self.reaction_delay),
        ];
        for (field, value) in ranges {
            if !value.is_finite() || value < 0.0 {
                return Err(AiError::Configuration(format!(
                    "{}.{} must be a finite non-negative number, got {}",
                    level.as_str(),
                    field,
                    value
                )));
            }
        }

        for (field, value) in [("miss_chance", self.miss_chance), ("aggression", self.aggression)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AiError::Configuration(format!(
                    "{}.{} must be within [0, 1], got {}",
                    level.as_str(),
                    field,
                    value
                )));
            }
        }

        Ok(())
    }
}

/// One profile per difficulty; every variant always has an entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DifficultyTable {
    #[serde(default = "DifficultyProfile::easy")]
    pub easy: DifficultyProfile,
    #[serde(default = "DifficultyProfile::medium")]
    pub medium: DifficultyProfile,
    #[serde(default = "DifficultyProfile::hard")]
    pub hard: DifficultyProfile,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile::easy(),
            medium: DifficultyProfile::medium(),
            hard: DifficultyProfile::hard(),
        }
    }
}

impl DifficultyTable {
    /// Same profile for all three levels
    pub fn uniform(profile: DifficultyProfile) -> Self {
        Self {
            easy: profile,
            medium: profile,
            hard: profile,
        }
    }

    pub fn profile(&self, difficulty: Difficulty) -> &DifficultyProfile {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for level in Difficulty::all() {
            self.profile(level).validate(level)?;
        }
        Ok(())
    }
}
