//! Property-based tests for the synthesis core.
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use membergen::naming::{self, AccessorKind, AccessorsInfo};
use membergen::{AnnotationInstance, MemberCandidate, filter_tolerated};
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,12}"
}

// =============================================================================
// Naming Properties
// =============================================================================

proptest! {
    /// Property: accessor-name derivation is deterministic.
    #[test]
    fn accessor_name_is_pure(name in field_name(), is_bool: bool, fluent: bool, no_is: bool) {
        let info = AccessorsInfo { fluent, no_is_prefix: no_is, ..Default::default() };
        let first = naming::accessor_name(&info, &name, is_bool, AccessorKind::Getter);
        let second = naming::accessor_name(&info, &name, is_bool, AccessorKind::Getter);
        prop_assert_eq!(first, second);
    }

    /// Property: without fluent style, getters start with `is` or `get` and
    /// setters with `set`.
    #[test]
    fn accessor_name_has_conventional_prefix(name in field_name(), is_bool: bool) {
        let info = AccessorsInfo::default();
        let getter = naming::accessor_name(&info, &name, is_bool, AccessorKind::Getter).unwrap();
        let setter = naming::accessor_name(&info, &name, is_bool, AccessorKind::Setter).unwrap();
        if is_bool {
            prop_assert!(getter.starts_with("is"));
        } else {
            prop_assert!(getter.starts_with("get"));
        }
        prop_assert!(setter.starts_with("set"));
    }

    /// Property: a configured prefix followed by an uppercase core always strips.
    #[test]
    fn configured_prefix_strips(prefix in "[a-z]{1,3}", core in "[A-Z][a-zA-Z0-9]{0,8}") {
        let info = AccessorsInfo { prefixes: vec![prefix.clone()], ..Default::default() };
        let name = format!("{prefix}{core}");
        prop_assert_eq!(naming::strip_prefix(&info, &name), Some(core.as_str()));
    }

    /// Property: fluent names never gain an accessor prefix.
    #[test]
    fn fluent_name_equals_decapitalized_field(name in field_name(), is_bool: bool) {
        let info = AccessorsInfo { fluent: true, ..Default::default() };
        let derived = naming::accessor_name(&info, &name, is_bool, AccessorKind::Getter).unwrap();
        prop_assert_eq!(derived, naming::decapitalize(&name));
    }
}

// =============================================================================
// Tolerated-Filtering Properties
// =============================================================================

fn candidate_list() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..16)
}

fn build_candidates(entries: &[(String, bool)]) -> Vec<MemberCandidate> {
    entries
        .iter()
        .map(|(name, tolerated)| {
            let candidate = MemberCandidate::new(name.clone());
            if *tolerated {
                candidate.with_annotation(AnnotationInstance::new("tolerate"))
            } else {
                candidate
            }
        })
        .collect()
}

proptest! {
    /// Property: filtering removes exactly the tolerated candidates and
    /// preserves the relative order of the rest.
    #[test]
    fn filter_tolerated_matches_naive_filter(entries in candidate_list()) {
        let kept = filter_tolerated(build_candidates(&entries));
        let kept_names: Vec<&str> = kept.iter().map(|c| c.name.as_str()).collect();
        let expected: Vec<&str> = entries
            .iter()
            .filter(|(_, tolerated)| !tolerated)
            .map(|(name, _)| name.as_str())
            .collect();
        prop_assert_eq!(kept_names, expected);
    }

    /// Property: filtering is idempotent.
    #[test]
    fn filter_tolerated_is_idempotent(entries in candidate_list()) {
        let once = filter_tolerated(build_candidates(&entries));
        let twice = filter_tolerated(once.clone());
        prop_assert_eq!(once, twice);
    }
}
