//! Property tests for layer classification.

use proptest::prelude::*;

use strata::domain::services::{ClassifierEntry, LayerClassifier};
use strata::Layer;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every path under a layer root classifies into that layer.
    #[test]
    fn property_layer_roots_classify_deterministically(
        segments in proptest::collection::vec("[a-z][a-z0-9-]{0,8}", 1..4),
        file in "[a-z]{1,8}\\.(ts|tsx)",
    ) {
        let classifier = LayerClassifier::standard();
        let tail = format!("{}/{}", segments.join("/"), file);

        prop_assert_eq!(classifier.classify(&format!("src/domain/{}", tail)), Some(Layer::Domain));
        prop_assert_eq!(classifier.classify(&format!("src/application/{}", tail)), Some(Layer::Application));
        prop_assert_eq!(classifier.classify(&format!("src/infrastructure/{}", tail)), Some(Layer::Infrastructure));
        prop_assert_eq!(classifier.classify(&format!("app/{}", tail)), Some(Layer::Presentation));
    }

    /// PROPERTY: Classification never panics and is stable across calls.
    #[test]
    fn property_classification_is_total_and_stable(path in ".{0,64}") {
        let classifier = LayerClassifier::standard();
        let first = classifier.classify(&path);
        let second = classifier.classify(&path);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Appending extra table entries never changes the
    /// classification of paths the built-in table already matches.
    #[test]
    fn property_extra_entries_are_additive(
        tail in "[a-z]{1,8}\\.ts",
        extra_layer in prop::sample::select(&Layer::ALL[..]),
    ) {
        let base = LayerClassifier::standard();
        let extended = LayerClassifier::with_entries(&[ClassifierEntry {
            pattern: "src/**".to_string(),
            layer: extra_layer,
        }]).unwrap();

        for root in ["src/domain", "src/application", "src/infrastructure", "src/presentation"] {
            let path = format!("{}/{}", root, tail);
            prop_assert_eq!(base.classify(&path), extended.classify(&path));
        }
    }
}
