//! Collection assertions

use super::mismatch;
use crate::{Dynamic, Elements, Kind, Result};

/// Assertions narrowing a [`Dynamic`] value to a collection.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vouch::prelude::*;
///
/// let doc = json!({"tags": ["a", "b"], "meta": {"v": 1}});
///
/// assert_eq!(doc.has("tags")?.is_sequence()?.len(), 2);
/// assert!(doc.has("meta")?.is_mapping()?.contains_key("v"));
/// assert_eq!(doc.is_iterable()?.count(), 2);
/// # Ok::<(), vouch::Violation>(())
/// ```
pub trait CollectionAssertions: Dynamic {
    /// Ensure the value can be enumerated and return its elements.
    ///
    /// Sequences yield their items, mappings their values.
    fn is_iterable(&self) -> Result<Elements<'_, Self>> {
        self.enumerate()
            .ok_or_else(|| mismatch("an iterable collection", self))
    }

    /// Ensure the value is an ordered sequence and borrow its items.
    fn is_sequence(&self) -> Result<&[Self]> {
        self.as_sequence().ok_or_else(|| mismatch(Kind::Sequence, self))
    }

    /// Ensure the value is a mapping and borrow its entries.
    fn is_mapping(&self) -> Result<&Self::Mapping> {
        self.as_mapping().ok_or_else(|| mismatch(Kind::Mapping, self))
    }
}

impl<V: Dynamic> CollectionAssertions for V {}
