//! Application service — resource listing and planning use-case.
//!
//! Queries each selected category through the [`ResourceLister`] port, applies
//! the prefix gate, and hands the listings to the pure planner. A failing
//! category is downgraded to a warning and contributes no resources.

use tracing::debug;

use crate::application::ports::{ProgressReporter, ResourceLister};
use crate::domain::{
    CategoryListing, PrefixRules, ResourceCategory, ResourceDescriptor, SweepError, SweepPlan,
};

/// List one category and keep only the resources that pass the prefix gate.
///
/// Vector indexes are looked up inside every vector bucket that itself
/// passes the bucket prefix; a failure listing one bucket's indexes fails the
/// whole index category.
pub async fn list_category(
    lister: &impl ResourceLister,
    rules: &PrefixRules,
    category: ResourceCategory,
) -> CategoryListing {
    let listed = match category {
        ResourceCategory::VectorIndex => list_vector_indexes(lister, rules).await,
        _ => lister.list(category, None).await,
    };

    match listed {
        Ok(resources) => {
            let total = resources.len();
            let matched = rules.retain_matching(
                resources
                    .into_iter()
                    .filter(|r| r.category == category)
                    .collect(),
            );
            debug!(
                category = %category,
                prefix = rules.prefix(category),
                total,
                matched = matched.len(),
                "listed category"
            );
            CategoryListing::Found(matched)
        }
        Err(e) => {
            let message = format!("{e:#}");
            debug!(category = %category, error = %message, "listing failed");
            CategoryListing::Failed(message)
        }
    }
}

async fn list_vector_indexes(
    lister: &impl ResourceLister,
    rules: &PrefixRules,
) -> anyhow::Result<Vec<ResourceDescriptor>> {
    let buckets = lister.list(ResourceCategory::VectorBucket, None).await?;
    let mut indexes = Vec::new();
    for bucket in rules.retain_matching(buckets) {
        let found = lister
            .list(ResourceCategory::VectorIndex, Some(&bucket.name))
            .await?;
        indexes.extend(found.into_iter().map(|index| {
            if index.parent_name.is_some() {
                index
            } else {
                index.with_parent(bucket.name.clone())
            }
        }));
    }
    Ok(indexes)
}

/// List every selected category and build the dependency-ordered plan.
///
/// Categories are listed in deletion order. Listing never aborts: failures
/// are reported through `reporter` and recorded as plan warnings.
pub async fn build_plan(
    lister: &impl ResourceLister,
    rules: &PrefixRules,
    categories: &[ResourceCategory],
    reporter: &impl ProgressReporter,
) -> SweepPlan {
    let mut selected = categories.to_vec();
    selected.sort();
    selected.dedup();

    let mut listings = Vec::with_capacity(selected.len());
    for category in selected {
        reporter.step(&format!(
            "Finding {} ({}*)...",
            category.label(),
            rules.prefix(category)
        ));
        let listing = list_category(lister, rules, category).await;
        match &listing {
            CategoryListing::Found(found) if found.is_empty() => {
                reporter.success(&format!("No {} found", category.label()));
            }
            CategoryListing::Found(found) => {
                reporter.success(&format!("Found {} {}", found.len(), category.label()));
            }
            CategoryListing::Failed(message) => {
                let err = SweepError::Listing {
                    category,
                    message: message.clone(),
                };
                reporter.warn(&format!("{err} (skipping this category)"));
            }
        }
        listings.push((category, listing));
    }

    SweepPlan::build(listings)
}
