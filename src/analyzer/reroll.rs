use super::state::AnalysisState;
use crate::category::HandCategory;
use crate::config::RollConfig;
use crate::consts::{FACE_COUNT, MAX_REROLL_DISTANCE};
use crate::dice::DiceKey;
use crate::enumerate::HandGroup;
use crate::filter::CategoryFilter;
use std::collections::HashMap;
use tracing::debug;

/// Chance of rerolling `distance` dice into one specific result: `(1/6)^distance`.
///
/// `None` when the distance is zero, over the budget, or beyond
/// `MAX_REROLL_DISTANCE`.
pub fn reroll_odds(distance: usize, budget: usize) -> Option<f64> {
    if distance == 0 || distance > budget || distance > MAX_REROLL_DISTANCE {
        return None;
    }
    Some((1.0 / FACE_COUNT as f64).powi(distance as i32))
}

/// Adds reroll credit for every category above High Roll.
pub fn compute_rerolls(
    groups: &[HandGroup],
    config: &RollConfig,
    filter: &CategoryFilter,
    total: u64,
    state: &mut AnalysisState,
) {
    if config.rerolls == 0 {
        return;
    }
    for category in HandCategory::scored() {
        compute_category(category, groups, config, filter, total, state);
    }
}

fn compute_category(
    category: HandCategory,
    groups: &[HandGroup],
    config: &RollConfig,
    filter: &CategoryFilter,
    total: u64,
    state: &mut AnalysisState,
) {
    let mut targets: HashMap<DiceKey, Vec<usize>> = HashMap::new();
    for &index in &state.members[category] {
        targets
            .entry(groups[index].hand.rerollable_key())
            .or_default()
            .push(index);
    }

    let outside: Vec<&HandGroup> = groups
        .iter()
        .filter(|group| !group.hand.satisfies(category))
        .collect();
    let outside_count = outside.len() as f64;
    // Excluded (or explicitly included) categories never earn filtered credit.
    let credit_filter = filter.is_active() && !filter.mentions(category);

    let mut category_odds = 0.0;
    let mut filtered_odds = 0.0;
    let mut reachable = 0usize;

    for source in &outside {
        let Some(candidates) = targets.get(&source.hand.rerollable_key()) else {
            continue;
        };
        for &index in candidates {
            let target = &groups[index].hand;
            let distance = source.hand.reroll_distance(target);
            let Some(odds) = reroll_odds(distance, config.rerolls) else {
                continue;
            };

            reachable += 1;
            category_odds += odds;
            if credit_filter && filter.passes(&target.categories()) {
                filtered_odds += odds * outside_count / total as f64;
            }
        }
    }

    debug!(
        "{}: {} classes outside, {} reachable targets, +{:.4} odds",
        category,
        outside.len(),
        reachable,
        category_odds
    );

    state.reroll_odds[category] += category_odds;
    state.filtered_total += filtered_odds;
}
