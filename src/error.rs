//! Structured errors at the pipeline boundary
//!
//! Inside a chain, failures travel as [`Violation`]s. Callers that hand errors
//! to the rest of their application convert the violation exactly once, at the
//! top of the chain, into a [`ValidationError`]: a fixed domain, a single error
//! code and an info map carrying the reason.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use vouch::prelude::*;
//! use vouch::{validate, ErrorCode, VALIDATION_ERROR_DOMAIN};
//!
//! let doc = json!({"age": "old"});
//! let err = validate(|| doc.has("age")?.is_integer()).unwrap_err();
//!
//! assert_eq!(err.domain(), VALIDATION_ERROR_DOMAIN);
//! assert_eq!(err.code(), ErrorCode::ValidationFailed);
//! assert!(err.reason().contains("integer"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::Violation;

/// Domain shared by every error this crate produces.
pub const VALIDATION_ERROR_DOMAIN: &str = "vouch.validation";

/// Key of the [`ValidationError::info`] entry holding the reason.
pub const REASON_KEY: &str = "reason";

/// The possible validation error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorCode {
    /// The validation failed.
    ValidationFailed,
}

impl ErrorCode {
    /// Numeric value of the code.
    pub fn as_u32(self) -> u32 {
        match self {
            ErrorCode::ValidationFailed => 0,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::ValidationFailed => f.write_str("validation failed"),
        }
    }
}

/// A violation converted for consumption outside the chain.
///
/// With the `serde` feature, deserialization rejects a foreign domain and an
/// info map without a non-blank [`REASON_KEY`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawValidationError"))]
pub struct ValidationError {
    domain: String,
    code: ErrorCode,
    info: BTreeMap<String, String>,
}

impl ValidationError {
    /// Error family this error belongs to; always [`VALIDATION_ERROR_DOMAIN`].
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The reason carried by the original violation.
    pub fn reason(&self) -> &str {
        self.info.get(REASON_KEY).map(String::as_str).unwrap_or_default()
    }

    /// Auxiliary entries, containing at least [`REASON_KEY`].
    pub fn info(&self) -> &BTreeMap<String, String> {
        &self.info
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.reason())
    }
}

impl std::error::Error for ValidationError {}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(reason = %violation.reason(), "validation failed");

        let mut info = BTreeMap::new();
        info.insert(REASON_KEY.to_string(), violation.into_reason());
        ValidationError {
            domain: VALIDATION_ERROR_DOMAIN.to_string(),
            code: ErrorCode::ValidationFailed,
            info,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawValidationError {
    domain: String,
    code: ErrorCode,
    info: BTreeMap<String, String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawValidationError> for ValidationError {
    type Error = String;

    fn try_from(raw: RawValidationError) -> Result<Self, Self::Error> {
        if raw.domain != VALIDATION_ERROR_DOMAIN {
            return Err(format!(
                "unknown error domain '{}', expected '{}'",
                raw.domain, VALIDATION_ERROR_DOMAIN
            ));
        }
        match raw.info.get(REASON_KEY) {
            Some(reason) if !reason.trim().is_empty() => {}
            _ => return Err(format!("info map lacks a non-empty '{}' entry", REASON_KEY)),
        }
        Ok(ValidationError {
            domain: raw.domain,
            code: raw.code,
            info: raw.info,
        })
    }
}

/// Run a validation chain and convert its violation, if any.
///
/// This is the one place a [`Violation`] is caught. Chains that are not run
/// through `validate` hand the raw violation to the caller's own handling.
///
/// ```
/// use serde_json::json;
/// use vouch::prelude::*;
/// use vouch::validate;
///
/// let doc = json!({"age": 42});
/// assert_eq!(validate(|| doc.has("age")?.is_integer()), Ok(42));
/// ```
pub fn validate<T, F>(chain: F) -> Result<T, ValidationError>
where
    F: FnOnce() -> crate::Result<T>,
{
    chain().map_err(ValidationError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_fields() {
        let err = ValidationError::from(Violation::new("expected integer, got null"));
        assert_eq!(err.domain(), "vouch.validation");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.code().as_u32(), 0);
        assert_eq!(err.reason(), "expected integer, got null");
        assert_eq!(
            err.info().get(REASON_KEY).map(String::as_str),
            Some("expected integer, got null")
        );
    }

    #[test]
    fn test_display() {
        let err = ValidationError::from(Violation::new("bad input"));
        assert_eq!(err.to_string(), "validation failed: bad input");
    }

    #[test]
    fn test_validate_passes_success_through() {
        let out: Result<u8, ValidationError> = validate(|| Ok(7));
        assert_eq!(out, Ok(7));
    }

    #[test]
    fn test_validate_converts_violation() {
        let out: Result<u8, ValidationError> = validate(|| crate::bail!("nope"));
        assert_eq!(out.unwrap_err().reason(), "nope");
    }

    #[test]
    fn test_question_mark_converts() {
        fn outer() -> Result<(), ValidationError> {
            Err::<(), _>(Violation::new("inner"))?;
            Ok(())
        }
        assert_eq!(outer().unwrap_err().reason(), "inner");
    }

    #[test]
    fn test_error_trait() {
        let err = ValidationError::from(Violation::new("x"));
        let _: &dyn std::error::Error = &err;
    }
}
