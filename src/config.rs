use crate::consts::{DEFAULT_DICE_POOL, MAX_DICE_POOL};
use crate::error::{HandError, HandResult};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use typed_builder::TypedBuilder;

/// How each rolled outcome is split into communal, normal and extra dice.
///
/// Positions are assigned in that order; any dice past the three partitions
/// are generated but never read.
#[derive(Args, TypedBuilder, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollConfig {
    /// Dice shared by every player (fixed, never rerolled)
    #[arg(long = "communal", default_value_t = 2)]
    #[builder(default = 2)]
    pub communal_rolls: usize,

    /// The player's own dice (the only ones that can be rerolled)
    #[arg(long = "normal", default_value_t = 3)]
    #[builder(default = 3)]
    pub normal_rolls: usize,

    /// Bonus dice added to the hand (fixed, never rerolled)
    #[arg(long = "extra", default_value_t = 0)]
    #[builder(default = 0)]
    pub extra_rolls: usize,

    /// How many normal dice may be rerolled
    #[arg(long, default_value_t = 0)]
    #[builder(default = 0)]
    pub rerolls: usize,

    /// Dice generated per outcome
    #[arg(long = "dice", default_value_t = DEFAULT_DICE_POOL)]
    #[builder(default = DEFAULT_DICE_POOL)]
    pub dice_pool: usize,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            communal_rolls: 2,
            normal_rolls: 3,
            extra_rolls: 0,
            rerolls: 0,
            dice_pool: DEFAULT_DICE_POOL,
        }
    }
}

impl RollConfig {
    /// Number of dice that take part in classification.
    pub fn relevant_dice(&self) -> usize {
        self.communal_rolls + self.normal_rolls + self.extra_rolls
    }

    pub fn communal_range(&self) -> Range<usize> {
        0..self.communal_rolls
    }

    pub fn normal_range(&self) -> Range<usize> {
        self.communal_rolls..self.communal_rolls + self.normal_rolls
    }

    pub fn extra_range(&self) -> Range<usize> {
        let start = self.communal_rolls + self.normal_rolls;
        start..start + self.extra_rolls
    }

    /// Rejects configurations the engine cannot run without truncating.
    pub fn validate(&self) -> HandResult<()> {
        if self.dice_pool > MAX_DICE_POOL {
            return Err(HandError::DicePool {
                requested: self.dice_pool,
                max: MAX_DICE_POOL,
            });
        }
        if self.relevant_dice() > self.dice_pool {
            return Err(HandError::PartitionOverflow {
                required: self.relevant_dice(),
                available: self.dice_pool,
            });
        }
        if self.rerolls > self.normal_rolls {
            return Err(HandError::RerollBudget {
                rerolls: self.rerolls,
                normal: self.normal_rolls,
            });
        }
        Ok(())
    }

    /// Copy of this configuration with a different reroll budget.
    pub fn with_rerolls(&self, rerolls: usize) -> Self {
        Self { rerolls, ..*self }
    }
}

impl fmt::Display for RollConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} communal, {} normal, {} extra ({} rerolls, {} dice rolled)",
            self.communal_rolls, self.normal_rolls, self.extra_rolls, self.rerolls, self.dice_pool
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_shipped_table() {
        let config = RollConfig::default();
        assert_eq!(config, RollConfig::builder().build());
        assert_eq!(config.relevant_dice(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ranges_follow_partition_order() {
        let config = RollConfig::builder()
            .communal_rolls(2)
            .normal_rolls(3)
            .extra_rolls(1)
            .build();
        assert_eq!(config.communal_range(), 0..2);
        assert_eq!(config.normal_range(), 2..5);
        assert_eq!(config.extra_range(), 5..6);
    }

    #[test]
    fn test_overflowing_partitions_are_rejected() {
        let config = RollConfig::builder().extra_rolls(3).build();
        assert_eq!(
            config.validate(),
            Err(HandError::PartitionOverflow {
                required: 8,
                available: 7
            })
        );
    }

    #[test]
    fn test_reroll_budget_is_bounded_by_normal_dice() {
        let config = RollConfig::builder().normal_rolls(2).rerolls(3).build();
        assert_eq!(
            config.validate(),
            Err(HandError::RerollBudget {
                rerolls: 3,
                normal: 2
            })
        );
    }
}
