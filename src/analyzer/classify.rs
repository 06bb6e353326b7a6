use super::state::AnalysisState;
use crate::enumerate::HandGroup;
use crate::filter::CategoryFilter;

/// Base (no reroll) pass: counts every class under each category it makes and
/// adds the classes that pass the filter to the filtered total.
pub fn classify(groups: &[HandGroup], filter: &CategoryFilter, state: &mut AnalysisState) {
    for (index, group) in groups.iter().enumerate() {
        if !state.computed_isomorphic.insert(group.isomorphic_key()) {
            continue;
        }

        let membership = state.membership(&group.hand);
        for category in membership.iter() {
            state.members[category].push(index);
            state.counts[category] += group.multiplicity;
        }

        if filter.passes(&group.hand.categories()) {
            state.filtered_total += group.multiplicity as f64;
        }
    }
}
