use crate::category::{CategorySet, HandCategory};
use serde::Serialize;

/// Narrows which hands count toward the filtered total.
///
/// A hand passes when it makes none of the excluded categories and, if any
/// categories are included, at least one of those.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryFilter {
    pub excluded: CategorySet,
    pub included: CategorySet,
}

impl CategoryFilter {
    pub fn new(excluded: CategorySet, included: CategorySet) -> Self {
        Self { excluded, included }
    }

    pub fn excluding(categories: impl IntoIterator<Item = HandCategory>) -> Self {
        Self {
            excluded: categories.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn including(categories: impl IntoIterator<Item = HandCategory>) -> Self {
        Self {
            included: categories.into_iter().collect(),
            ..Self::default()
        }
    }

    /// An inactive filter lets everything through and tracks nothing extra.
    pub fn is_active(&self) -> bool {
        !self.excluded.is_empty() || !self.included.is_empty()
    }

    /// Whether the category is named on either side of the filter.
    pub fn mentions(&self, category: HandCategory) -> bool {
        self.excluded.contains(category) || self.included.contains(category)
    }

    pub fn passes(&self, categories: &CategorySet) -> bool {
        !categories.intersects(&self.excluded)
            && (self.included.is_empty() || categories.intersects(&self.included))
    }
}
