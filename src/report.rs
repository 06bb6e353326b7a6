use crate::category::HandCategory;
use crate::config::RollConfig;
use crate::filter::CategoryFilter;
use serde::Serialize;
use std::time::Duration;

/// Odds for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOdds {
    pub category: HandCategory,
    /// Raw rolls that already make the category.
    pub count: u64,
    /// Summed credit from hands that can be rerolled into the category.
    pub reroll_odds: f64,
    /// `(count + reroll_odds) / total`, clamped to `[0, 1]`.
    pub probability: f64,
}

impl CategoryOdds {
    /// Count plus reroll credit, the numerator of `probability`.
    pub fn weighted_count(&self) -> f64 {
        self.count as f64 + self.reroll_odds
    }

    pub fn percent(&self) -> f64 {
        self.probability * 100.0
    }
}

/// Mass that survives the inclusion/exclusion filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSummary {
    pub filter: CategoryFilter,
    pub passing: f64,
    pub total: u64,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub config: RollConfig,
    /// Probability denominator: every relevant roll, before isomorphism grouping.
    pub total: u64,
    /// Number of isomorphism classes analysed.
    pub classes: usize,
    /// One entry per category, in rank order.
    pub categories: Vec<CategoryOdds>,
    pub filtered: Option<FilterSummary>,
    pub elapsed: Duration,
}

impl AnalysisReport {
    pub fn odds(&self, category: HandCategory) -> &CategoryOdds {
        &self.categories[category.rank() as usize]
    }

    pub fn probability(&self, category: HandCategory) -> f64 {
        self.odds(category).probability
    }

    /// One line per category, then the filter summary and timing if present.
    pub fn render_text(&self, with_timing: bool) -> String {
        let mut out = String::new();
        for odds in &self.categories {
            out.push_str(&format!(
                "{} - {:.4} / {} ({:.4}%)\n",
                odds.category,
                odds.weighted_count(),
                self.total,
                odds.percent()
            ));
        }
        if let Some(summary) = &self.filtered {
            out.push_str(&format!(
                "\n{:.4} of {} hands ({:.4}%) after exclusions / inclusions\n",
                summary.passing,
                summary.total,
                summary.probability * 100.0
            ));
        }
        if with_timing {
            out.push_str(&format!("\nThat took about {:.3?}.\n", self.elapsed));
        }
        out
    }
}
