use crate::category::{CategoryMap, CategorySet, HandCategory};
use crate::config::RollConfig;
use crate::dice::DiceKey;
use crate::filter::CategoryFilter;
use crate::hand::PartitionedHand;
use crate::report::{AnalysisReport, CategoryOdds, FilterSummary};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Accumulators for a single analysis run. Created by `analyze` and consumed
/// into the report at the end.
#[derive(Debug, Default)]
pub struct AnalysisState {
    pub computed_isomorphic: HashSet<DiceKey>,
    pub computed_effective: HashMap<DiceKey, CategorySet>,
    /// Group indices of the classes in each category.
    pub members: CategoryMap<Vec<usize>>,
    pub counts: CategoryMap<u64>,
    pub reroll_odds: CategoryMap<f64>,
    pub filtered_total: f64,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories the hand is counted under, cached by effective key.
    /// High Roll is always among them.
    pub fn membership(&mut self, hand: &PartitionedHand) -> CategorySet {
        *self
            .computed_effective
            .entry(hand.effective_key())
            .or_insert_with(|| hand.profile().matched().with(HandCategory::HighRoll))
    }

    pub fn into_report(
        self,
        config: &RollConfig,
        filter: &CategoryFilter,
        total: u64,
        classes: usize,
        elapsed: Duration,
    ) -> AnalysisReport {
        let denominator = total as f64;
        let categories = self
            .counts
            .iter()
            .map(|(category, &count)| {
                let reroll_odds = self.reroll_odds[category];
                CategoryOdds {
                    category,
                    count,
                    reroll_odds,
                    probability: ratio(count as f64 + reroll_odds, denominator),
                }
            })
            .collect();

        let filtered = filter.is_active().then(|| FilterSummary {
            filter: *filter,
            passing: self.filtered_total,
            total,
            probability: ratio(self.filtered_total, denominator),
        });

        AnalysisReport {
            config: *config,
            total,
            classes,
            categories,
            filtered,
            elapsed,
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        return 0.0;
    }
    (numerator / denominator).clamp(0.0, 1.0)
}
