//! Property-based tests for the assertion catalogue

use proptest::prelude::*;
use serde_json::{json, Value};
use vouch::prelude::*;

const ALL_KINDS: [Kind; 10] = [
    Kind::Any,
    Kind::Null,
    Kind::Bool,
    Kind::Number,
    Kind::Integer,
    Kind::Float,
    Kind::String,
    Kind::Collection,
    Kind::Sequence,
    Kind::Mapping,
];

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::String),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..3)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_exact_kind_returns_value_unchanged(value in document()) {
        let out = value.inherits_kind(value.kind());
        prop_assert!(matches!(out, Ok(v) if std::ptr::eq(v, &value)));
    }

    #[test]
    fn prop_inherits_kind_follows_sub_kinds(value in document()) {
        for kind in ALL_KINDS {
            let holds = value.inherits_kind(kind).is_ok();
            prop_assert_eq!(holds, kind.includes(value.kind()));
        }
    }

    #[test]
    fn prop_is_integer_accepts_every_i64(n in any::<i64>()) {
        prop_assert_eq!(json!(n).is_integer(), Ok(i128::from(n)));
    }

    #[test]
    fn prop_is_float_accepts_finite(f in -1.0e12f64..1.0e12) {
        prop_assert_eq!(json!(f).is_float(), Ok(f));
    }

    #[test]
    fn prop_has_length_is_exact(s in "\\PC{0,16}", delta in 1usize..4) {
        let len = s.chars().count();
        prop_assert!(s.has_length(len).is_ok());
        prop_assert!(s.has_length(len + delta).is_err());
        prop_assert!(s.is_longer_than(len).is_err());
        prop_assert!(s.is_shorter_than(len).is_err());
        prop_assert!(s.is_shorter_than(len + delta).is_ok());
    }

    #[test]
    fn prop_might_have_agrees_with_has(value in document(), key in "[a-z]{1,4}") {
        if let (Ok(optional), required) = (value.might_have(&key), value.has(&key)) {
            match optional {
                Some(found) => prop_assert_eq!(required, Ok(found)),
                None => prop_assert!(required.is_err()),
            }
        } else {
            prop_assert!(!value.conforms_to(Capability::KeyAddressable));
        }
    }

    #[test]
    fn prop_is_one_of_accepts_its_own_candidates(
        candidates in prop::collection::vec(scalar(), 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let chosen = &candidates[pick.index(candidates.len())];
        prop_assert!(chosen.is_one_of(&candidates).is_ok());
    }

    #[test]
    fn prop_map_value_is_identity_on_absence(n in any::<i32>()) {
        prop_assert_eq!(map_value(None::<i32>, |x| Ok(x + 1)), Ok(None));
        prop_assert_eq!(
            map_value(Some(n), |x| Ok(i64::from(x) + 1)),
            Ok(Some(i64::from(n) + 1))
        );
    }
}
