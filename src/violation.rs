//! The failure signal raised by every assertion
//!
//! A [`Violation`] carries exactly one human-readable reason. Assertions return
//! it as the `Err` arm of [`Result`], so a chain written with `?` stops at the
//! first violated constraint and nothing after it runs.
//!
//! # Examples
//!
//! ```
//! use vouch::{bail, Violation};
//!
//! fn positive(n: i64) -> vouch::Result<i64> {
//!     if n <= 0 {
//!         bail!("expected a positive number, got {}", n);
//!     }
//!     Ok(n)
//! }
//!
//! let err = positive(-3).unwrap_err();
//! assert_eq!(err.reason(), "expected a positive number, got -3");
//! ```

use thiserror::Error;

/// Result of a single assertion or of a whole chain.
pub type Result<T, E = Violation> = std::result::Result<T, E>;

/// A violated constraint.
///
/// Immutable once created. The reason is formatted up front by the assertion
/// that failed and is never re-wrapped or chained with another violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{reason}")]
pub struct Violation {
    reason: String,
}

impl Violation {
    /// Create a violation carrying `reason`.
    ///
    /// # Panics
    ///
    /// Panics when `reason` is empty or only whitespace. That is a bug in the
    /// validation code itself, not bad input data.
    ///
    /// # Examples
    ///
    /// ```
    /// use vouch::Violation;
    ///
    /// let v = Violation::new("expected kind string, got integer");
    /// assert_eq!(v.to_string(), "expected kind string, got integer");
    /// ```
    pub fn new(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        assert!(
            !reason.trim().is_empty(),
            "a violation must carry a non-empty reason"
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(reason = %reason, "constraint violated");

        Violation { reason }
    }

    /// The formatted reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Consume the violation and return its reason.
    pub fn into_reason(self) -> String {
        self.reason
    }
}

/// Build a [`Violation`] from a format string.
///
/// ```
/// use vouch::violation;
///
/// let v = violation!("expected {} characters", 3);
/// assert_eq!(v.reason(), "expected 3 characters");
/// ```
#[macro_export]
macro_rules! violation {
    ($($arg:tt)+) => {
        $crate::Violation::new(::std::format!($($arg)+))
    };
}

/// Return early with a [`Violation`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)+) => {
        return ::std::result::Result::Err($crate::violation!($($arg)+))
    };
}

/// Return early with a [`Violation`] unless `cond` holds.
///
/// ```
/// use vouch::ensure;
///
/// fn even(n: i64) -> vouch::Result<i64> {
///     ensure!(n % 2 == 0, "expected an even number, got {}", n);
///     Ok(n)
/// }
///
/// assert!(even(4).is_ok());
/// assert_eq!(even(3).unwrap_err().reason(), "expected an even number, got 3");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_round_trip() {
        let v = Violation::new("expected kind string, got null");
        assert_eq!(v.reason(), "expected kind string, got null");
        assert_eq!(v.clone().into_reason(), "expected kind string, got null");
    }

    #[test]
    fn test_display_is_reason() {
        let v = violation!("expected {} got {}", "a", 1);
        assert_eq!(format!("{}", v), "expected a got 1");
    }

    #[test]
    #[should_panic(expected = "non-empty reason")]
    fn test_empty_reason_panics() {
        let _ = Violation::new("");
    }

    #[test]
    #[should_panic(expected = "non-empty reason")]
    fn test_blank_reason_panics() {
        let _ = Violation::new("   ");
    }

    #[test]
    fn test_bail_short_circuits() {
        fn run(stop: bool, reached: &mut bool) -> Result<()> {
            if stop {
                bail!("stop here");
            }
            *reached = true;
            Ok(())
        }

        let mut reached = false;
        let err = run(true, &mut reached).unwrap_err();
        assert_eq!(err.reason(), "stop here");
        assert!(!reached);
    }

    #[test]
    fn test_ensure() {
        fn check(n: usize) -> Result<usize> {
            ensure!(n > 2, "expected more than 2, got {}", n);
            Ok(n)
        }

        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(1).unwrap_err().reason(),
            "expected more than 2, got 1"
        );
    }

    #[test]
    fn test_error_trait() {
        let v = Violation::new("broken");
        let _: &dyn std::error::Error = &v;
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_violation_is_logged() {
            let _ = Violation::new("expected kind string, got null");
            assert!(logs_contain("constraint violated"));
            assert!(logs_contain("expected kind string, got null"));
        }

        #[traced_test]
        #[test]
        fn test_boundary_conversion_is_logged() {
            let _ = crate::ValidationError::from(Violation::new("bad"));
            assert!(logs_contain("validation failed"));
        }
    }
}
