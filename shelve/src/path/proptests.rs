//! Property-based tests for relative destination paths.

use super::relative::RelativePath;
use proptest::prelude::*;
use std::path::Path;

// Strategy for generating path segments, including some messy but legal ones
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{1,12}"
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(segment_strategy(), 1..6),
        prop_oneof![Just("/"), Just("//"), Just("\\")],
    )
        .prop_map(|(parts, sep)| parts.join(sep))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Re-normalizing an already-normalized path changes nothing
    #[test]
    fn relative_path_normalization_idempotent(raw in raw_path_strategy()) {
        if let Ok(first) = RelativePath::new(&raw) {
            let second = RelativePath::new(first.as_str()).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    // Normalized paths never contain backslashes or empty segments
    #[test]
    fn relative_path_normalized_form(raw in raw_path_strategy()) {
        if let Ok(rel) = RelativePath::new(&raw) {
            prop_assert!(!rel.as_str().contains('\\'));
            prop_assert!(!rel.as_str().contains("//"));
            prop_assert!(!rel.as_str().starts_with('/'));
            prop_assert!(!rel.as_str().ends_with('/'));
            prop_assert!(rel.segments().all(|s| !s.is_empty()));
        }
    }

    // Resolving against a root always yields a strict descendant of the root
    #[test]
    fn relative_path_resolve_stays_under_root(raw in raw_path_strategy()) {
        if let Ok(rel) = RelativePath::new(&raw) {
            let root = Path::new("/srv/output");
            let resolved = rel.resolve(root);
            prop_assert!(resolved.starts_with(root));
            prop_assert_ne!(resolved, root.to_path_buf());
        }
    }

    // Building from a filesystem path agrees with building from its string form
    #[test]
    fn relative_path_from_path_agrees_with_new(parts in prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..5)) {
        let joined = parts.join("/");
        let from_str = RelativePath::new(&joined).unwrap();
        let from_path = RelativePath::from_path(Path::new(&joined)).unwrap();
        prop_assert_eq!(from_str, from_path);
    }
}
