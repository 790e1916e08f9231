//! Property-based tests for the prefix gate, planning, and dry-run safety.

#![allow(clippy::expect_used)]

use bedrock_sweep::domain::{
    CategoryListing, PrefixRules, ResourceCategory, ResourceDescriptor, SweepPlan,
};
use proptest::prelude::*;

use crate::mocks::{FakeAccount, RecordingReporter, SweepOptions, run_sweep};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

fn arb_category() -> impl Strategy<Value = ResourceCategory> {
    proptest::sample::select(ResourceCategory::ALL.to_vec())
}

/// A top-level resource whose name either carries the category prefix or is
/// arbitrary.
fn arb_resource() -> impl Strategy<Value = ResourceDescriptor> {
    (
        arb_category().prop_filter("indexes need a bucket", |c| {
            *c != ResourceCategory::VectorIndex
        }),
        proptest::bool::ANY,
        "[a-z0-9-]{0,12}",
    )
        .prop_map(|(category, prefixed, suffix)| {
            let name = if prefixed {
                format!("{}{suffix}", category.default_prefix())
            } else {
                format!("x{suffix}")
            };
            ResourceDescriptor::new(category, name)
        })
}

fn dedup(resources: Vec<ResourceDescriptor>) -> Vec<ResourceDescriptor> {
    let mut unique: Vec<ResourceDescriptor> = Vec::new();
    for r in resources {
        if !unique.contains(&r) {
            unique.push(r);
        }
    }
    unique
}

proptest! {
    /// The gate never accepts a name that lacks the category prefix.
    #[test]
    fn prop_gate_requires_prefix(category in arb_category(), name in "[A-Za-z0-9._-]{0,40}") {
        let rules = PrefixRules::default();
        prop_assert_eq!(
            rules.matches(category, &name),
            name.starts_with(category.default_prefix())
        );
    }

    /// Only prefixed resources are ever deleted, and everything else survives.
    #[test]
    fn prop_sweep_deletes_exactly_the_prefixed_resources(
        resources in proptest::collection::vec(arb_resource(), 0..24)
    ) {
        let resources = dedup(resources);
        let rules = PrefixRules::default();
        let account = FakeAccount::with(resources.clone());

        let (_, result) = block_on(run_sweep(
            &account,
            &rules,
            &SweepOptions::default(),
            &RecordingReporter::default(),
        ));

        let expected_survivors: Vec<_> = resources
            .iter()
            .filter(|r| !rules.matches(r.category, &r.name))
            .cloned()
            .collect();
        prop_assert_eq!(account.remaining(), expected_survivors);
        prop_assert_eq!(
            result.total_deleted(),
            resources.len() - account.remaining().len()
        );
        prop_assert!(result.is_clean());
    }

    /// A dry run issues no delete calls, whatever the account holds.
    #[test]
    fn prop_dry_run_never_calls_delete(
        resources in proptest::collection::vec(arb_resource(), 0..24)
    ) {
        let resources = dedup(resources);
        let account = FakeAccount::with(resources.clone());
        let options = SweepOptions { dry_run: true, ..SweepOptions::default() };

        let (plan, result) = block_on(run_sweep(
            &account,
            &PrefixRules::default(),
            &options,
            &RecordingReporter::default(),
        ));

        prop_assert!(account.deletions().is_empty());
        prop_assert_eq!(account.remaining(), resources);
        prop_assert_eq!(result.total_would_delete(), plan.len());
    }

    /// Plans are in deletion order no matter how listings arrive.
    #[test]
    fn prop_plan_is_in_deletion_order(
        resources in proptest::collection::vec(arb_resource(), 0..24)
    ) {
        let listings: Vec<_> = ResourceCategory::ALL
            .iter()
            .rev()
            .map(|category| {
                let found = resources
                    .iter()
                    .filter(|r| r.category == *category)
                    .cloned()
                    .collect();
                (*category, CategoryListing::Found(found))
            })
            .collect();

        let plan = SweepPlan::build(listings);

        prop_assert_eq!(&plan.categories, &ResourceCategory::ALL.to_vec());
        let ordered = plan.resources.windows(2).all(|w| {
            (w[0].category, &w[0].parent_name, &w[0].name)
                <= (w[1].category, &w[1].parent_name, &w[1].name)
        });
        prop_assert!(ordered);
        prop_assert_eq!(plan.len(), resources.len());
    }
}
