//! Scalar assertions

use super::mismatch;
use crate::{Dynamic, Kind, Result};

/// Assertions narrowing a [`Dynamic`] value to a scalar.
///
/// `is_str` is named after its return type rather than `is_string`, which
/// `serde_json::Value` already defines as an inherent `bool` check.
pub trait PrimitiveAssertions: Dynamic {
    /// Ensure the value is a boolean and return it.
    fn is_bool(&self) -> Result<bool> {
        self.as_bool().ok_or_else(|| mismatch(Kind::Bool, self))
    }

    /// Ensure the value is an exact integer of any width and return it.
    ///
    /// Floats are rejected even when they have no fractional part.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// assert_eq!(json!(5).is_integer(), Ok(5));
    /// assert_eq!(json!(-2).is_integer(), Ok(-2));
    ///
    /// let err = json!(5.5).is_integer().unwrap_err();
    /// assert_eq!(err.reason(), "expected integer, got float 5.5");
    /// ```
    fn is_integer(&self) -> Result<i128> {
        self.as_integer().ok_or_else(|| mismatch(Kind::Integer, self))
    }

    /// Ensure the value is a finite floating-point number and return it.
    ///
    /// NaN and the infinities are rejected even though they are floats.
    /// Integers are rejected too.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// assert_eq!(json!(3.25).is_float(), Ok(3.25));
    /// assert!(json!(3).is_float().is_err());
    /// ```
    fn is_float(&self) -> Result<f64> {
        match self.as_float() {
            Some(f) => finite(f),
            None => Err(mismatch("finite float", self)),
        }
    }

    /// Ensure the value is a string, possibly empty, and borrow it.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// assert_eq!(json!("").is_str(), Ok(""));
    /// assert!(json!(null).is_str().is_err());
    /// ```
    fn is_str(&self) -> Result<&str> {
        self.as_text().ok_or_else(|| mismatch(Kind::String, self))
    }

    /// Ensure the value is a string with at least one visible character.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use vouch::prelude::*;
    ///
    /// assert_eq!(json!(" hi ").is_text(), Ok(" hi "));
    ///
    /// let err = json!(" \t\n").is_text().unwrap_err();
    /// assert_eq!(err.reason(), r#"expected text with visible characters, got " \t\n""#);
    /// ```
    fn is_text(&self) -> Result<&str> {
        let text = self.is_str()?;
        crate::ensure!(
            text.chars().any(is_visible),
            "expected text with visible characters, got {}",
            self.describe()
        );
        Ok(text)
    }
}

impl<V: Dynamic> PrimitiveAssertions for V {}

fn finite(f: f64) -> Result<f64> {
    crate::ensure!(f.is_finite(), "expected a finite float, got {}", f);
    Ok(f)
}

fn is_visible(c: char) -> bool {
    !c.is_whitespace() && !c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_bool() {
        assert_eq!(json!(true).is_bool(), Ok(true));
        assert_eq!(json!(false).is_bool(), Ok(false));
        let err = json!(1).is_bool().unwrap_err();
        assert_eq!(err.reason(), "expected bool, got integer 1");
    }

    #[test]
    fn test_is_integer_widths() {
        assert_eq!(json!(i64::MIN).is_integer(), Ok(i64::MIN as i128));
        assert_eq!(json!(u64::MAX).is_integer(), Ok(u64::MAX as i128));
    }

    #[test]
    fn test_is_integer_rejects_integral_float() {
        assert!(json!(5.0).is_integer().is_err());
    }

    #[test]
    fn test_is_integer_rejects_string() {
        let err = json!("old").is_integer().unwrap_err();
        assert_eq!(err.reason(), r#"expected integer, got string "old""#);
    }

    #[test]
    fn test_finite_guard() {
        assert_eq!(finite(3.25), Ok(3.25));
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = finite(bad).unwrap_err();
            assert!(err.reason().starts_with("expected a finite float"));
        }
    }

    #[test]
    fn test_is_float_rejects_non_finite_json() {
        // JSON cannot carry NaN or infinity; serde_json turns them into null.
        assert!(json!(f64::NAN).is_float().is_err());
        assert!(json!(f64::INFINITY).is_float().is_err());
        assert!(json!(f64::NEG_INFINITY).is_float().is_err());
    }

    #[test]
    fn test_is_str_accepts_empty() {
        assert_eq!(json!("").is_str(), Ok(""));
    }

    #[test]
    fn test_is_text_rejects_empty_and_control() {
        assert!(json!("").is_text().is_err());
        assert!(json!("\u{0007}").is_text().is_err());
        assert_eq!(json!("x").is_text(), Ok("x"));
    }

    #[test]
    fn test_is_text_rejects_non_string() {
        let err = json!(["a"]).is_text().unwrap_err();
        assert_eq!(err.reason(), r#"expected string, got sequence ["a"]"#);
    }
}
