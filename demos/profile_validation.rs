//! Profile validation example
//!
//! Validates JSON request bodies for a user profile endpoint with fail-fast
//! chains, and shows the structured error a rejected body turns into.
//!
//! Run with `cargo run --example profile_validation --features tracing` to also
//! see each violation logged as it is raised.

use serde_json::{json, Value};
use vouch::prelude::*;
use vouch::ValidationError;

#[derive(Debug)]
struct Profile<'a> {
    handle: &'a str,
    email: &'a str,
    age: i128,
    homepage: Option<url::Url>,
    tags: Vec<&'a str>,
}

fn parse_profile(body: &Value) -> Result<Profile<'_>, ValidationError> {
    let visibility = [json!("public"), json!("private")];

    validate(|| {
        body.has("visibility")?.is_one_of(&visibility)?;

        let tags = body
            .might_have("tags")?
            .map_value(|tags| {
                tags.is_sequence()?
                    .iter()
                    .map(|tag| tag.is_text()?.is_shorter_than(24))
                    .collect::<vouch::Result<Vec<_>>>()
            })?
            .unwrap_or_default();

        Ok(Profile {
            handle: body
                .has("handle")?
                .is_text()?
                .is_longer_than(2)?
                .matches_regex("[a-z][a-z0-9_]*")?,
            email: body.has("contact.email")?.is_str()?.is_email()?,
            age: body.has("age")?.is_integer()?,
            homepage: body
                .might_have("contact.homepage")?
                .map_value(|v| v.is_str()?.has_prefix("https://")?.is_url())?,
            tags,
        })
    })
}

fn report(label: &str, body: &Value) {
    println!("{}", label);
    match parse_profile(body) {
        Ok(profile) => println!("  accepted: {:?}", profile),
        Err(err) => {
            println!("  rejected: {}", err);
            println!(
                "  domain={} code={} info={:?}",
                err.domain(),
                err.code().as_u32(),
                err.info()
            );
        }
    }
    println!();
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Profile Validation ===\n");

    report(
        "Complete profile",
        &json!({
            "handle": "ada_l",
            "visibility": "public",
            "age": 36,
            "contact": {"email": "ada@example.com", "homepage": "https://ada.dev"},
            "tags": ["math", "engines"]
        }),
    );

    report(
        "Optional fields left out",
        &json!({
            "handle": "grace",
            "visibility": "private",
            "age": 45,
            "contact": {"email": "grace@example.com"}
        }),
    );

    report(
        "Age given as text",
        &json!({
            "handle": "bob",
            "visibility": "public",
            "age": "forty",
            "contact": {"email": "bob@example.com"}
        }),
    );

    report(
        "Insecure homepage",
        &json!({
            "handle": "eve",
            "visibility": "public",
            "age": 30,
            "contact": {"email": "eve@example.com", "homepage": "http://eve.test"}
        }),
    );

    report(
        "Unknown visibility (first violation wins)",
        &json!({
            "handle": "X",
            "visibility": "friends",
            "age": "n/a",
            "contact": {}
        }),
    );
}
