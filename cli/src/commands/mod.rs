//! Command implementations

pub mod categories;
pub mod config;
pub mod list;
pub mod sweep;
pub mod version;

use crate::domain::ResourceCategory;

/// Categories named by `--only`, or every category when none are given.
#[must_use]
pub fn selected_categories(only: &[ResourceCategory]) -> Vec<ResourceCategory> {
    if only.is_empty() {
        return ResourceCategory::ALL.to_vec();
    }
    let mut selected = only.to_vec();
    selected.sort();
    selected.dedup();
    selected
}
