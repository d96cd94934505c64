//! String-format assertions
//!
//! These operate on text already confirmed by
//! [`is_str`](crate::PrimitiveAssertions::is_str) or
//! [`is_text`](crate::PrimitiveAssertions::is_text). Lengths count characters,
//! not bytes.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::{ensure, Result};

// Deliberately loose: one `@` with something non-blank on both sides.
// `a@b` passes. It checks shape only, never deliverability.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid"));

/// Assertions on string content.
///
/// The prefix/suffix/substring checks are named `has_*` because `str`
/// already owns `starts_with`, `ends_with` and `contains`.
///
/// # Example
///
/// ```rust
/// use vouch::prelude::*;
///
/// let id = "ord-2024-0001"
///     .has_prefix("ord-")?
///     .has_length(13)?
///     .matches_regex(r"ord-\d{4}-\d{4}")?;
/// assert_eq!(id, "ord-2024-0001");
/// # Ok::<(), vouch::Violation>(())
/// ```
pub trait TextAssertions {
    /// Ensure the text has strictly more than `length` characters.
    fn is_longer_than(&self, length: usize) -> Result<&str>;

    /// Ensure the text has strictly fewer than `length` characters.
    fn is_shorter_than(&self, length: usize) -> Result<&str>;

    /// Ensure the text has exactly `length` characters.
    fn has_length(&self, length: usize) -> Result<&str>;

    /// Ensure the text starts with `prefix`. Case-sensitive.
    fn has_prefix(&self, prefix: &str) -> Result<&str>;

    /// Ensure the text ends with `suffix`. Case-sensitive.
    fn has_suffix(&self, suffix: &str) -> Result<&str>;

    /// Ensure the text contains `substring`. Case-sensitive.
    fn has_substring(&self, substring: &str) -> Result<&str>;

    /// Ensure the text is an absolute URL and return it parsed.
    ///
    /// ```rust
    /// use vouch::prelude::*;
    ///
    /// let url = "https://example.com/a?b=c".is_url()?;
    /// assert_eq!(url.path(), "/a");
    /// assert!("not a url".is_url().is_err());
    /// # Ok::<(), vouch::Violation>(())
    /// ```
    fn is_url(&self) -> Result<Url>;

    /// Ensure the text looks like an email address.
    ///
    /// **Beware**: the check is intentionally permissive. `a@b` passes. If you
    /// have to be certain, verify the domain accepts mail for the address.
    fn is_email(&self) -> Result<&str>;

    /// Ensure the whole text matches `pattern`.
    ///
    /// The pattern is compiled on every call. A malformed pattern is
    /// reported as a violation naming it.
    fn matches_regex(&self, pattern: &str) -> Result<&str>;
}

impl TextAssertions for str {
    fn is_longer_than(&self, length: usize) -> Result<&str> {
        let actual = self.chars().count();
        ensure!(
            actual > length,
            "expected {:?} to be longer than {} characters, got {}",
            self,
            length,
            actual
        );
        Ok(self)
    }

    fn is_shorter_than(&self, length: usize) -> Result<&str> {
        let actual = self.chars().count();
        ensure!(
            actual < length,
            "expected {:?} to be shorter than {} characters, got {}",
            self,
            length,
            actual
        );
        Ok(self)
    }

    fn has_length(&self, length: usize) -> Result<&str> {
        let actual = self.chars().count();
        ensure!(
            actual == length,
            "expected {:?} to have exactly {} characters, got {}",
            self,
            length,
            actual
        );
        Ok(self)
    }

    fn has_prefix(&self, prefix: &str) -> Result<&str> {
        ensure!(
            self.starts_with(prefix),
            "expected {:?} to start with {:?}",
            self,
            prefix
        );
        Ok(self)
    }

    fn has_suffix(&self, suffix: &str) -> Result<&str> {
        ensure!(
            self.ends_with(suffix),
            "expected {:?} to end with {:?}",
            self,
            suffix
        );
        Ok(self)
    }

    fn has_substring(&self, substring: &str) -> Result<&str> {
        ensure!(
            self.contains(substring),
            "expected {:?} to contain {:?}",
            self,
            substring
        );
        Ok(self)
    }

    fn is_url(&self) -> Result<Url> {
        Url::parse(self)
            .map_err(|err| crate::violation!("expected a URL, got {:?}: {}", self, err))
    }

    fn is_email(&self) -> Result<&str> {
        ensure!(
            EMAIL_REGEX.is_match(self),
            "expected an email address, got {:?}",
            self
        );
        Ok(self)
    }

    fn matches_regex(&self, pattern: &str) -> Result<&str> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|err| {
            crate::violation!("{:?} is not a valid regular expression: {}", pattern, err)
        })?;
        ensure!(
            regex.is_match(self),
            "expected {:?} to match the pattern {:?}",
            self,
            pattern
        );
        Ok(self)
    }
}
