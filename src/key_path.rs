//! Dotted key paths
//!
//! A [`KeyPath`] names a possibly nested field of a key-addressable value:
//! `"user.address.city"` descends three levels, `"items.0.id"` indexes into a
//! sequence on the way.

use std::fmt;

use crate::Result;

/// A parsed, non-empty list of path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dot-separated key path.
    ///
    /// Fails when the path is empty or contains an empty segment
    /// (`"a..b"`, `".a"`, `"a."`).
    ///
    /// # Examples
    ///
    /// ```
    /// use vouch::KeyPath;
    ///
    /// let path = KeyPath::parse("user.address.city").unwrap();
    /// assert_eq!(path.segments(), &["user", "address", "city"]);
    ///
    /// assert!(KeyPath::parse("user..city").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            crate::bail!("key path must not be empty");
        }

        let segments: Vec<String> = path.split('.').map(str::to_owned).collect();
        if segments.iter().any(String::is_empty) {
            crate::bail!("key path '{}' contains an empty segment", path);
        }

        Ok(KeyPath { segments })
    }

    /// The individual segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let path = KeyPath::parse("name").unwrap();
        assert_eq!(path.segments(), &["name"]);
    }

    #[test]
    fn test_nested_segments() {
        let path = KeyPath::parse("items.0.id").unwrap();
        assert_eq!(path.segments(), &["items", "0", "id"]);
    }

    #[test]
    fn test_display_round_trips() {
        let path = KeyPath::parse("a.b.c").unwrap();
        assert_eq!(path.to_string(), "a.b.c");
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = KeyPath::parse("").unwrap_err();
        assert_eq!(err.reason(), "key path must not be empty");
    }

    #[test]
    fn test_empty_segments_rejected() {
        for raw in ["a..b", ".a", "a."] {
            let err = KeyPath::parse(raw).unwrap_err();
            assert!(err.reason().contains("empty segment"), "{}", raw);
        }
    }
}
