use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use qname::QualifiedName;
use qname_test_utils::{format as any_format, name as any_name, segment, segments};

fn hash_of(name: &QualifiedName) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn prop_join_parse_round_trip(segs in segments(8), format in any_format()) {
        let name = QualifiedName::of_all(segs);
        let text = name.join(&format);
        prop_assert_eq!(QualifiedName::parse(&text, &format), name);
    }

    #[test]
    fn prop_display_from_str_round_trip(name in any_name(6)) {
        // A lone "{}" segment displays like the empty name.
        prop_assume!(name != QualifiedName::of(qname::EMPTY_NAME_MARKER));
        let parsed: QualifiedName = name.to_string().parse().unwrap();
        prop_assert_eq!(parsed, name);
    }

    #[test]
    fn prop_size_tracks_adds(name in any_name(8), extra in segment()) {
        prop_assert_eq!(name.add(extra).len(), name.len() + 1);
        prop_assert_eq!(name.segments().count(), name.len());
    }

    #[test]
    fn prop_double_reverse_is_identity(name in any_name(8)) {
        prop_assert_eq!(name.reverse().reverse(), name);
    }

    #[test]
    fn prop_starts_with_mirrors_ends_with(name in any_name(6), prefix in any_name(3)) {
        prop_assert_eq!(
            name.starts_with(&prefix),
            name.reverse().ends_with(&prefix.reverse())
        );
    }

    #[test]
    fn prop_own_prefixes_and_suffixes(name in any_name(8), k in 0usize..10) {
        prop_assert!(name.starts_with(&name.left(k)));
        prop_assert!(name.ends_with(&name.right_last(k)));
    }

    #[test]
    fn prop_left_and_right_partition(name in any_name(8), k in 0usize..10) {
        let k = k.min(name.len());
        let rejoined = name.left(k).add_all(name.right_from_start(k).segments());
        prop_assert_eq!(rejoined, name.clone());
        prop_assert_eq!(name.left(k).len() + name.right_from_start(k).len(), name.len());
    }

    #[test]
    fn prop_left_from_end_agrees_with_left(name in any_name(8), k in 0usize..10) {
        let k = k.min(name.len());
        prop_assert_eq!(name.left_from_end(k), name.left(name.len() - k));
        prop_assert_eq!(name.right_last(k), name.right_from_start(name.len() - k));
    }

    #[test]
    fn prop_get_agrees_with_get_from_end(name in any_name(8)) {
        let len = name.len();
        for i in 0..len {
            prop_assert_eq!(name.get(i).unwrap(), name.get_from_end(len - 1 - i).unwrap());
        }
        prop_assert!(name.get(len).is_err());
        prop_assert!(name.get_from_end(len).is_err());
    }

    #[test]
    fn prop_order_is_total_and_consistent(a in any_name(4), b in any_name(4)) {
        let forward = a.cmp(&b);
        prop_assert_eq!(forward, b.cmp(&a).reverse());
        prop_assert_eq!(forward == Ordering::Equal, a == b);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    #[test]
    fn prop_order_matches_segment_vectors(a in segments(4), b in segments(4)) {
        let expected = a.cmp(&b);
        prop_assert_eq!(QualifiedName::of_all(a).cmp(&QualifiedName::of_all(b)), expected);
    }

    #[test]
    fn prop_empty_is_minimum(name in any_name(4)) {
        let empty = QualifiedName::empty();
        if name.is_empty() {
            prop_assert_eq!(empty.cmp(&name), Ordering::Equal);
        } else {
            prop_assert!(empty < name);
        }
    }

    #[test]
    fn prop_index_of_agrees_with_reverse(name in any_name(8), target in segment()) {
        let from_start = name.index_of(|s| s == target);
        let via_reverse = name.reverse().index_from_end(|s| s == target);
        prop_assert_eq!(from_start, via_reverse);
        prop_assert_eq!(name.contains(|s| s == target), from_start.is_some());
    }

    #[test]
    fn prop_serde_round_trip(name in any_name(6)) {
        let json = serde_json::to_string(&name).unwrap();
        let back: QualifiedName = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, name);
    }
}
