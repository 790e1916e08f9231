//! Dependency-ordered sweep plan.
//!
//! Pure functions only: the plan is built from listings the application
//! layer already collected.

use serde::Serialize;

use crate::domain::resource::{ResourceCategory, ResourceDescriptor};

/// Outcome of listing one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryListing {
    /// Listing succeeded; only resources that passed the prefix gate.
    Found(Vec<ResourceDescriptor>),
    /// Listing failed; the category contributes nothing to this run.
    Failed(String),
}

/// A category whose listing failed during this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingWarning {
    pub category: ResourceCategory,
    pub message: String,
}

/// Resources to delete, in deletion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepPlan {
    /// Categories that were considered, in deletion order.
    pub categories: Vec<ResourceCategory>,
    pub resources: Vec<ResourceDescriptor>,
    pub warnings: Vec<ListingWarning>,
}

impl SweepPlan {
    /// Build a plan from per-category listings.
    ///
    /// Categories are emitted in [`ResourceCategory::ALL`] order regardless of
    /// the order of `listings`. Within a category, resources are sorted by
    /// `(parent_name, name)` so repeated runs print the same sequence.
    #[must_use]
    pub fn build(listings: Vec<(ResourceCategory, CategoryListing)>) -> Self {
        let mut listings = listings;
        listings.sort_by_key(|(category, _)| *category);

        let mut plan = SweepPlan::default();
        for (category, listing) in listings {
            if !plan.categories.contains(&category) {
                plan.categories.push(category);
            }
            match listing {
                CategoryListing::Found(mut found) => {
                    found.retain(|r| r.category == category);
                    found.sort_by(|a, b| {
                        (&a.parent_name, &a.name).cmp(&(&b.parent_name, &b.name))
                    });
                    plan.resources.extend(found);
                }
                CategoryListing::Failed(message) => {
                    plan.warnings.push(ListingWarning { category, message });
                }
            }
        }
        plan
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Planned resources of a single category.
    pub fn in_category(
        &self,
        category: ResourceCategory,
    ) -> impl Iterator<Item = &ResourceDescriptor> {
        self.resources.iter().filter(move |r| r.category == category)
    }
}
