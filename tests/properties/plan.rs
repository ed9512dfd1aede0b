//! Property tests for migration planning.

use proptest::prelude::*;

use strata::{LegacyMapping, MigrationPlan};

fn sample_mapping() -> LegacyMapping {
    LegacyMapping::from_entries([
        ("lib/auth.ts", "@/infrastructure/auth"),
        ("lib/utils.ts", "@/application/common"),
        ("types/index.ts", "@/domain"),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The plan has one entry per input path, in input order,
    /// with no deduplication.
    #[test]
    fn property_plan_preserves_order_and_length(
        paths in proptest::collection::vec("[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.ts", 0..16),
    ) {
        let plan = MigrationPlan::resolve(&sample_mapping(), &paths);

        prop_assert_eq!(plan.entries.len(), paths.len());
        for (entry, path) in plan.entries.iter().zip(&paths) {
            prop_assert_eq!(&entry.source, path);
        }
    }

    /// PROPERTY: Planning is idempotent - no hidden state between runs.
    #[test]
    fn property_plan_is_idempotent(
        paths in proptest::collection::vec("[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.ts", 0..16),
    ) {
        let mapping = sample_mapping();
        prop_assert_eq!(
            MigrationPlan::resolve(&mapping, &paths),
            MigrationPlan::resolve(&mapping, &paths)
        );
    }

    /// PROPERTY: mapped + unmapped always partitions the entries.
    #[test]
    fn property_counts_partition_entries(
        paths in proptest::collection::vec("[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.ts", 0..16),
    ) {
        let plan = MigrationPlan::resolve(&sample_mapping(), &paths);
        prop_assert_eq!(plan.mapped_count() + plan.unmapped_count(), plan.entries.len());
    }

    /// PROPERTY: Every resolved target comes from the table, and every
    /// table hit resolves to its table value.
    #[test]
    fn property_targets_agree_with_lookup(
        paths in proptest::collection::vec("[a-z]{1,8}(/[a-z]{1,8}){0,2}\\.ts", 0..16),
    ) {
        let mapping = sample_mapping();
        let plan = MigrationPlan::resolve(&mapping, &paths);
        for entry in &plan.entries {
            prop_assert_eq!(entry.target.as_deref(), mapping.resolve(&entry.source));
        }
    }
}
