//! # Vouch
//!
//! > *"Assert, refine, chain"*
//!
//! A Rust library for fluent, fail-fast validation of dynamically-typed values.
//!
//! ## Philosophy
//!
//! Untyped data (a parsed JSON body, a config document) is checked **once**, at
//! the boundary, by a left-to-right chain of assertions:
//! - every assertion either hands a **refined** value to the next step or
//!   raises a [`Violation`]
//! - the **first** violation ends the chain; nothing after it runs
//! - the chain's caller converts that violation into a [`ValidationError`]
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use vouch::prelude::*;
//! use vouch::validate;
//!
//! struct Signup<'a> {
//!     email: &'a str,
//!     age: i128,
//!     plan: &'a str,
//! }
//!
//! let body = json!({"email": "ada@example.com", "age": 36, "plan": "pro"});
//! let plans = [json!("free"), json!("pro")];
//!
//! let signup = validate(|| {
//!     Ok(Signup {
//!         email: body.has("email")?.is_text()?.is_email()?,
//!         age: body.has("age")?.is_integer()?,
//!         plan: body.has("plan")?.is_one_of(&plans)?.is_str()?,
//!     })
//! });
//!
//! match signup {
//!     Ok(s) => println!("{} ({}) on {}", s.email, s.age, s.plan),
//!     Err(err) => println!("rejected: {}", err.reason()),
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod assertions;
pub mod dynamic;
pub mod error;
pub mod key_path;
pub mod testing;
pub mod violation;

// Re-exports
pub use assertions::{
    map_value, CollectionAssertions, CoreAssertions, OptionalAssertions, PrimitiveAssertions,
    TextAssertions,
};
pub use dynamic::{Capability, Dynamic, Elements, Kind};
pub use error::{validate, ErrorCode, ValidationError, REASON_KEY, VALIDATION_ERROR_DOMAIN};
pub use key_path::KeyPath;
pub use violation::{Result, Violation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertions::{
        map_value, CollectionAssertions, CoreAssertions, OptionalAssertions,
        PrimitiveAssertions, TextAssertions,
    };
    pub use crate::dynamic::{Capability, Dynamic, Kind};
    pub use crate::error::{validate, ValidationError};
    pub use crate::violation::Violation;
}
