//! Property tests for mapping resolution.

use proptest::prelude::*;

use strata::LegacyMapping;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution never panics, for any input string.
    #[test]
    fn property_resolve_is_total(path in ".{0,64}") {
        let mapping = LegacyMapping::from_entries([
            ("lib/auth.ts", "@/infrastructure/auth"),
            ("types/index.ts", "@/domain"),
        ]);
        let _ = mapping.resolve(&path);
    }

    /// PROPERTY: A leading `./` never changes the resolution.
    #[test]
    fn property_dot_slash_prefix_is_transparent(
        key in "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.ts",
        target in "@/[a-z]{1,12}",
    ) {
        let mapping = LegacyMapping::from_entries([(key.as_str(), target.as_str())]);

        prop_assert_eq!(mapping.resolve(&key), Some(target.as_str()));
        prop_assert_eq!(mapping.resolve(&format!("./{}", key)), Some(target.as_str()));
    }

    /// PROPERTY: Keys written with a leading `./` are found without it.
    #[test]
    fn property_keys_normalize_on_ingest(
        key in "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.ts",
    ) {
        let dotted = format!("./{}", key);
        let mapping = LegacyMapping::from_entries([(dotted.as_str(), "@/domain")]);
        prop_assert_eq!(mapping.resolve(&key), Some("@/domain"));
    }
}
