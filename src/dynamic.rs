//! Introspection of dynamically-typed values
//!
//! Assertions never match on a concrete value type. They ask the value what it
//! is through the [`Dynamic`] trait: its [`Kind`], whether it conforms to a
//! [`Capability`], what sits under a key path, and how to enumerate it.
//!
//! `serde_json::Value` implements [`Dynamic`] out of the box.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use vouch::{Capability, Dynamic, KeyPath, Kind};
//!
//! let doc = json!({"user": {"tags": ["admin", "ops"]}});
//!
//! assert_eq!(doc.kind(), Kind::Mapping);
//! assert!(doc.conforms_to(Capability::KeyAddressable));
//!
//! let path = KeyPath::parse("user.tags.1").unwrap();
//! assert_eq!(doc.lookup(&path), Some(&json!("ops")));
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::KeyPath;

/// Runtime kind of a value.
///
/// `Null` through `Mapping` are concrete kinds a value can report. `Any`,
/// `Number` and `Collection` are abstract kinds used to accept a family of
/// concrete kinds in [`inherits_kind`](crate::CoreAssertions::inherits_kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// Every kind.
    Any,
    /// Explicit null.
    Null,
    /// `true` or `false`.
    Bool,
    /// Integers and floats.
    Number,
    /// Exact integral number of any width.
    Integer,
    /// Floating-point number.
    Float,
    /// Text, possibly empty.
    String,
    /// Sequences and mappings.
    Collection,
    /// Ordered, index-addressable collection.
    Sequence,
    /// Key-addressable collection.
    Mapping,
}

impl Kind {
    /// Whether a value of kind `other` is a `self`.
    ///
    /// ```
    /// use vouch::Kind;
    ///
    /// assert!(Kind::Number.includes(Kind::Float));
    /// assert!(Kind::Any.includes(Kind::Null));
    /// assert!(!Kind::Integer.includes(Kind::Number));
    /// ```
    pub fn includes(self, other: Kind) -> bool {
        match self {
            Kind::Any => true,
            Kind::Number => matches!(other, Kind::Number | Kind::Integer | Kind::Float),
            Kind::Collection => {
                matches!(other, Kind::Collection | Kind::Sequence | Kind::Mapping)
            }
            concrete => concrete == other,
        }
    }

    /// Lowercase name used in violation reasons.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Any => "any",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Collection => "collection",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A behavior a value may support regardless of its exact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capability {
    /// Can be walked element by element.
    Enumerable,
    /// Elements are reachable by position.
    Indexable,
    /// A key path can descend into it.
    KeyAddressable,
    /// Carries a number.
    Numeric,
    /// Carries text.
    Textual,
}

impl Capability {
    /// Whether values of `kind` provide this capability.
    pub fn admits(self, kind: Kind) -> bool {
        match self {
            Capability::Enumerable | Capability::KeyAddressable => {
                Kind::Collection.includes(kind)
            }
            Capability::Indexable => kind == Kind::Sequence,
            Capability::Numeric => Kind::Number.includes(kind),
            Capability::Textual => kind == Kind::String,
        }
    }

    /// Name used in violation reasons.
    pub fn name(self) -> &'static str {
        match self {
            Capability::Enumerable => "enumerable",
            Capability::Indexable => "indexable",
            Capability::KeyAddressable => "key-addressable",
            Capability::Numeric => "numeric",
            Capability::Textual => "textual",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over the elements of an enumerable value.
pub type Elements<'a, V> = Box<dyn Iterator<Item = &'a V> + 'a>;

const DESCRIBE_LIMIT: usize = 48;

/// Host services the assertions are written against.
///
/// Implementations must be side-effect free: every method only observes
/// `self`.
pub trait Dynamic: Sized {
    /// Borrowed view returned by [`as_mapping`](Dynamic::as_mapping).
    type Mapping: ?Sized;

    /// The concrete kind of this value. Never an abstract kind.
    fn kind(&self) -> Kind;

    /// Whether this value provides `capability`.
    fn conforms_to(&self, capability: Capability) -> bool {
        capability.admits(self.kind())
    }

    /// Descend a single key-path segment.
    fn get(&self, segment: &str) -> Option<&Self>;

    /// Descend a whole key path. `None` as soon as a segment is unresolved.
    fn lookup(&self, path: &KeyPath) -> Option<&Self> {
        path.segments()
            .iter()
            .try_fold(self, |current, segment| current.get(segment))
    }

    /// Enumerate the elements of a collection; `None` for scalars.
    fn enumerate(&self) -> Option<Elements<'_, Self>>;

    /// Whether this value is the explicit null.
    fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    /// The boolean, if this is a bool.
    fn as_bool(&self) -> Option<bool>;

    /// The integer, if this is an integral number.
    fn as_integer(&self) -> Option<i128>;

    /// The float, if this is a floating-point number.
    fn as_float(&self) -> Option<f64>;

    /// The text, if this is a string.
    fn as_text(&self) -> Option<&str>;

    /// The elements, if this is a sequence.
    fn as_sequence(&self) -> Option<&[Self]>;

    /// The entries, if this is a mapping.
    fn as_mapping(&self) -> Option<&Self::Mapping>;

    /// Equality used by [`is_one_of`](crate::CoreAssertions::is_one_of).
    fn same_value(&self, other: &Self) -> bool;

    /// Short rendering of the value for violation reasons.
    fn describe(&self) -> String;
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through `f64`.
fn integral_eq(integer: i128, float: f64) -> bool {
    const BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0; // 2^127
    float.is_finite()
        && float.fract() == 0.0
        && (-BOUND..BOUND).contains(&float)
        && float as i128 == integer
}

impl Dynamic for Value {
    type Mapping = Map<String, Value>;

    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) if n.is_f64() => Kind::Float,
            Value::Number(_) => Kind::Integer,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Mapping,
        }
    }

    fn get(&self, segment: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }

    fn enumerate(&self) -> Option<Elements<'_, Self>> {
        match self {
            Value::Array(items) => Some(Box::new(items.iter())),
            Value::Object(map) => Some(Box::new(map.values())),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        self.as_bool()
    }

    fn as_integer(&self) -> Option<i128> {
        match self {
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from)),
            _ => None,
        }
    }

    fn as_float(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_f64() => n.as_f64(),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn as_sequence(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }

    fn as_mapping(&self) -> Option<&Self::Mapping> {
        self.as_object()
    }

    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(_), Value::Number(_)) => {
                match (Dynamic::as_integer(self), Dynamic::as_integer(other)) {
                    (Some(a), Some(b)) => a == b,
                    (Some(i), None) => other.as_f64().is_some_and(|f| integral_eq(i, f)),
                    (None, Some(i)) => self.as_f64().is_some_and(|f| integral_eq(i, f)),
                    (None, None) => self.as_f64() == other.as_f64(),
                }
            }
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_value(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, x)| b.get(key).is_some_and(|y| x.same_value(y)))
            }
            _ => self == other,
        }
    }

    fn describe(&self) -> String {
        let rendered = self.to_string();
        if rendered.chars().count() <= DESCRIBE_LIMIT {
            rendered
        } else {
            let head: String = rendered.chars().take(DESCRIBE_LIMIT).collect();
            format!("{}...", head)
        }
    }
}
