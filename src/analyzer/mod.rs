pub mod classify;
pub mod reroll;
pub mod state;

use self::classify::classify;
use self::reroll::compute_rerolls;
use self::state::AnalysisState;
use crate::config::RollConfig;
use crate::enumerate::{domain, unique_groups};
use crate::error::{HandError, HandResult};
use crate::filter::CategoryFilter;
use crate::hand::Hand;
use crate::report::AnalysisReport;
use std::time::Instant;
use tracing::{debug, info};

/// Computes per-category odds over the supplied outcome domain.
///
/// Each call owns a fresh `AnalysisState`, so repeated calls with the same
/// inputs produce the same report.
pub fn analyze(
    hands: &[Hand],
    config: &RollConfig,
    filter: &CategoryFilter,
) -> HandResult<AnalysisReport> {
    config.validate()?;
    info!(
        "Analyzing possible hands ({} rerolls and {} extra rolls)",
        config.rerolls, config.extra_rolls
    );
    if hands.is_empty() {
        return Err(HandError::EmptyDomain);
    }

    let started = Instant::now();
    let groups = unique_groups(hands, config)?;
    let total: u64 = groups.iter().map(|group| group.multiplicity).sum();

    let mut state = AnalysisState::new();
    classify(&groups, filter, &mut state);
    debug!(
        "Classified {} classes ({} distinct effective rolls)",
        groups.len(),
        state.computed_effective.len()
    );
    compute_rerolls(&groups, config, filter, total, &mut state);

    Ok(state.into_report(config, filter, total, groups.len(), started.elapsed()))
}

/// Generates the full domain for `config.dice_pool` and analyses it.
pub fn analyze_config(config: &RollConfig, filter: &CategoryFilter) -> HandResult<AnalysisReport> {
    let hands = domain(config)?;
    analyze(&hands, config, filter)
}
