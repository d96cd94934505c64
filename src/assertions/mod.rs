//! The built-in assertions
//!
//! Every assertion is a method on an extension trait. Each one either returns
//! a successor value for the next step of the chain or a [`Violation`]. Chain
//! them with `?` (or `Result::and_then`) and the first violation ends the
//! chain.
//!
//! | Trait | Receiver | Assertions |
//! |-------|----------|------------|
//! | [`CoreAssertions`] | any [`Dynamic`] | `inherits_kind`, `supports`, `has`, `might_have`, `is_one_of` |
//! | [`PrimitiveAssertions`] | any [`Dynamic`] | `is_bool`, `is_integer`, `is_float`, `is_str`, `is_text` |
//! | [`CollectionAssertions`] | any [`Dynamic`] | `is_iterable`, `is_sequence`, `is_mapping` |
//! | [`TextAssertions`] | `str` | lengths, prefix/suffix/substring, `is_url`, `is_email`, `matches_regex` |
//! | [`OptionalAssertions`] | `Option<T>` | `map_value` |
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use vouch::prelude::*;
//!
//! let doc = json!({"user": {"name": "Ada", "homepage": "https://ada.dev"}});
//!
//! let name = doc.has("user.name")?.is_text()?.is_shorter_than(32)?;
//! let homepage = doc.has("user.homepage")?.is_str()?.is_url()?;
//!
//! assert_eq!(name, "Ada");
//! assert_eq!(homepage.host_str(), Some("ada.dev"));
//! # Ok::<(), vouch::Violation>(())
//! ```
//!
//! [`Dynamic`]: crate::Dynamic
//! [`Violation`]: crate::Violation

mod collection;
mod primitive;
mod text;
mod value;

pub use collection::CollectionAssertions;
pub use primitive::PrimitiveAssertions;
pub use text::TextAssertions;
pub use value::{map_value, CoreAssertions, OptionalAssertions};

use std::fmt::Display;

use crate::{Dynamic, Violation};

/// Violation for a value that is not of the `expected` shape.
pub(crate) fn mismatch<V: Dynamic>(expected: impl Display, actual: &V) -> Violation {
    crate::violation!(
        "expected {}, got {} {}",
        expected,
        actual.kind(),
        actual.describe()
    )
}
