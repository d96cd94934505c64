//! Testing utilities for validation chains
//!
//! Assertion macros for checking the outcome of a chain in tests, plus
//! property-based strategies for arbitrary JSON values when the `proptest`
//! feature is enabled.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use vouch::prelude::*;
//! use vouch::{assert_holds, assert_violation};
//!
//! let age = assert_holds!(json!(42).is_integer());
//! assert_eq!(age, 42);
//!
//! assert_violation!(json!("old").is_integer(), "integer");
//! ```

/// Assert that an assertion or chain held, and evaluate to its output.
///
/// Panics with the violation's reason otherwise.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vouch::prelude::*;
/// use vouch::assert_holds;
///
/// let name = json!({"name": "Ada"});
/// assert_eq!(assert_holds!(name.has("name")), &json!("Ada"));
/// ```
#[macro_export]
macro_rules! assert_holds {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(violation) => {
                panic!("Expected assertion to hold, got violation: {}", violation);
            }
        }
    };
}

/// Assert that an assertion or chain was violated, and evaluate to the
/// [`Violation`](crate::Violation).
///
/// With a second argument, also assert the reason contains that text.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vouch::prelude::*;
/// use vouch::assert_violation;
///
/// let violation = assert_violation!(json!({}).has("id"));
/// assert!(violation.reason().contains("'id'"));
///
/// assert_violation!(json!({}).has("id"), "missing mandatory value");
/// ```
#[macro_export]
macro_rules! assert_violation {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err(violation) => violation,
            ::std::result::Result::Ok(_) => {
                panic!("Expected a violation, but the assertion held");
            }
        }
    };
    ($result:expr, $needle:expr) => {{
        let violation = $crate::assert_violation!($result);
        assert!(
            violation.reason().contains($needle),
            "Expected violation reason to contain {:?}, got {:?}",
            $needle,
            violation.reason()
        );
        violation
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use serde_json::Value;

/// Strategy producing JSON scalars: null, bools, signed and unsigned
/// integers, finite floats and strings.
#[cfg(feature = "proptest")]
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        "\\PC{0,12}".prop_map(Value::String),
    ]
}

/// Strategy producing arbitrary JSON documents up to a few levels deep.
#[cfg(feature = "proptest")]
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use serde_json::json;

    #[test]
    fn assert_holds_macro_returns_output() {
        let value = json!("abc");
        let text = assert_holds!(value.is_str());
        assert_eq!(text, "abc");
    }

    #[test]
    fn assert_violation_macro_returns_violation() {
        let violation = assert_violation!(json!(1).is_str());
        assert_eq!(violation.reason(), "expected string, got integer 1");
    }

    #[test]
    fn assert_violation_macro_with_needle() {
        assert_violation!(json!(1).is_bool(), "expected bool");
    }

    #[test]
    #[should_panic(expected = "Expected assertion to hold, got violation")]
    fn assert_holds_panics_on_violation() {
        assert_holds!(json!(1).is_str());
    }

    #[test]
    #[should_panic(expected = "Expected a violation, but the assertion held")]
    fn assert_violation_panics_when_holding() {
        assert_violation!(json!("x").is_str());
    }

    #[test]
    #[should_panic(expected = "Expected violation reason to contain")]
    fn assert_violation_panics_on_other_reason() {
        assert_violation!(json!(1).is_str(), "mapping");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::{arb_scalar, arb_value};
        use crate::prelude::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arb_scalar_never_produces_collections(value in arb_scalar()) {
                prop_assert!(!Kind::Collection.includes(value.kind()));
            }

            #[test]
            fn arb_value_reports_a_concrete_kind(value in arb_value()) {
                let kind = value.kind();
                prop_assert!(value.inherits_kind(kind).is_ok());
                prop_assert!(value.inherits_kind(Kind::Any).is_ok());
            }
        }
    }
}
