//! Type-agnostic assertions: kinds, capabilities, key paths, allowed sets
//! and null-propagating transformation.

use crate::{bail, ensure, Capability, Dynamic, KeyPath, Kind, Result};

/// Assertions applicable to any [`Dynamic`] value.
///
/// Implemented for every `Dynamic` type; bring it into scope through
/// [`vouch::prelude`](crate::prelude).
pub trait CoreAssertions: Dynamic {
    /// Ensure the value is of `kind` or one of its sub-kinds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// let n = json!(3);
    /// assert!(n.inherits_kind(Kind::Integer).is_ok());
    /// assert!(n.inherits_kind(Kind::Number).is_ok());
    ///
    /// let err = n.inherits_kind(Kind::String).unwrap_err();
    /// assert_eq!(err.reason(), "expected kind string, got integer");
    /// ```
    fn inherits_kind(&self, kind: Kind) -> Result<&Self> {
        let actual = self.kind();
        ensure!(
            kind.includes(actual),
            "expected kind {}, got {}",
            kind,
            actual
        );
        Ok(self)
    }

    /// Ensure the value provides `capability`.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// assert!(json!([1, 2]).supports(Capability::Indexable).is_ok());
    /// assert!(json!({"a": 1}).supports(Capability::Indexable).is_err());
    /// ```
    fn supports(&self, capability: Capability) -> Result<&Self> {
        ensure!(
            self.conforms_to(capability),
            "expected a value supporting {}, got {}",
            capability,
            self.kind()
        );
        Ok(self)
    }

    /// Extract the mandatory value at `key_path`.
    ///
    /// Fails when the receiver cannot be looked into, when the path is
    /// malformed, or when the path resolves to nothing or to null.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// let doc = json!({"user": {"age": 42, "nick": null}});
    /// assert_eq!(doc.has("user.age")?, &json!(42));
    ///
    /// let err = doc.has("user.email").unwrap_err();
    /// assert_eq!(err.reason(), "missing mandatory value at key path 'user.email'");
    ///
    /// let err = doc.has("user.nick").unwrap_err();
    /// assert_eq!(err.reason(), "mandatory value at key path 'user.nick' is null");
    /// # Ok::<(), vouch::Violation>(())
    /// ```
    fn has(&self, key_path: &str) -> Result<&Self> {
        let path = addressable_path(self, key_path)?;
        match self.lookup(&path) {
            None => bail!("missing mandatory value at key path '{}'", path),
            Some(found) if found.is_null() => {
                bail!("mandatory value at key path '{}' is null", path)
            }
            Some(found) => Ok(found),
        }
    }

    /// Extract the optional value at `key_path`.
    ///
    /// A missing or null value yields `Ok(None)`. The receiver must still be
    /// key-addressable and the path well formed.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// let doc = json!({"name": "x"});
    /// assert_eq!(doc.might_have("name")?, Some(&json!("x")));
    /// assert_eq!(doc.might_have("missing")?, None);
    /// # Ok::<(), vouch::Violation>(())
    /// ```
    fn might_have(&self, key_path: &str) -> Result<Option<&Self>> {
        let path = addressable_path(self, key_path)?;
        Ok(self.lookup(&path).filter(|found| !found.is_null()))
    }

    /// Ensure the value equals one of `candidates`.
    ///
    /// Equality is [`Dynamic::same_value`]: numbers compare by numeric value
    /// across integer and float representations, nothing is coerced across
    /// kinds (`1` never equals `"1"` or `true`).
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// let allowed = [json!("red"), json!("green")];
    /// assert!(json!("red").is_one_of(&allowed).is_ok());
    ///
    /// let err = json!("blue").is_one_of(&allowed).unwrap_err();
    /// assert_eq!(err.reason(), r#"value "blue" is not one of ["red", "green"]"#);
    /// ```
    fn is_one_of(&self, candidates: &[Self]) -> Result<&Self> {
        if candidates.iter().any(|candidate| self.same_value(candidate)) {
            return Ok(self);
        }
        let allowed: Vec<String> = candidates.iter().map(Dynamic::describe).collect();
        bail!(
            "value {} is not one of [{}]",
            self.describe(),
            allowed.join(", ")
        )
    }
}

impl<V: Dynamic> CoreAssertions for V {}

fn addressable_path<V: Dynamic>(value: &V, key_path: &str) -> Result<KeyPath> {
    let path = KeyPath::parse(key_path)?;
    ensure!(
        value.conforms_to(Capability::KeyAddressable),
        "expected a key-addressable value to look up '{}', got {}",
        path,
        value.kind()
    );
    Ok(path)
}

/// Apply `f` to a present value, passing absence through untouched.
///
/// `f` is never called for `None`. A violation raised by `f` ends the chain
/// like any other.
///
/// # Example
///
/// ```rust
/// use vouch::map_value;
///
/// assert_eq!(map_value(Some(5), |x| Ok(x + 1)), Ok(Some(6)));
/// assert_eq!(map_value(None::<i32>, |x| Ok(x + 1)), Ok(None));
/// ```
pub fn map_value<T, U, F>(value: Option<T>, f: F) -> Result<Option<U>>
where
    F: FnOnce(T) -> Result<U>,
{
    value.map(f).transpose()
}

/// Method form of [`map_value`], to keep a chain going after
/// [`might_have`](CoreAssertions::might_have).
pub trait OptionalAssertions<T> {
    /// See [`map_value`].
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// let doc = json!({"nick": "ada"});
    /// let nick = doc.might_have("nick")?.map_value(|v| v.is_text())?;
    /// let bio = doc.might_have("bio")?.map_value(|v| v.is_text())?;
    ///
    /// assert_eq!(nick, Some("ada"));
    /// assert_eq!(bio, None);
    /// # Ok::<(), vouch::Violation>(())
    /// ```
    fn map_value<U, F>(self, f: F) -> Result<Option<U>>
    where
        F: FnOnce(T) -> Result<U>;
}

impl<T> OptionalAssertions<T> for Option<T> {
    fn map_value<U, F>(self, f: F) -> Result<Option<U>>
    where
        F: FnOnce(T) -> Result<U>,
    {
        map_value(self, f)
    }
}
