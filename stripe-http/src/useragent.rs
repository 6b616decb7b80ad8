//! Outbound request metadata.
//!
//! Every request to the API identifies these bindings twice: a
//! conventional `User-Agent` string (`Stripe/v1 RustBindings/<version>`),
//! and the `X-Stripe-Client-User-Agent` header carrying a small JSON
//! object describing the local runtime environment. The service uses the
//! latter for support diagnostics; the contents only need to be stable and
//! well-formed, never parsed back by the client.

use http::header::USER_AGENT;
use http::{HeaderMap, HeaderValue};

use crate::constants::CLIENT_USER_AGENT_HEADER;

/// Version of these bindings, as compiled in.
pub const BINDINGS_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Organization published in the diagnostic header.
const PUBLISHER: &str = "stripe-rs";

/// Toolchain version captured by the build script, e.g.
/// `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
fn lang_version() -> &'static str {
    option_env!("STRIPE_RUSTC_VERSION").unwrap_or("unknown")
}

/// Host platform description from the compiled-in target constants.
fn uname() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Replaces anything outside printable ASCII so the result is always a
/// valid HTTP header value.
fn ascii_clean(value: &str) -> String {
    value
        .chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { '?' })
        .collect()
}

/// Returns the `User-Agent` string for these bindings.
///
/// Follows the upstream `Stripe/v1 <lang>Bindings/<version>` convention.
#[must_use]
pub fn user_agent() -> String {
    format!("Stripe/v1 RustBindings/{BINDINGS_VERSION}")
}

/// Returns the `X-Stripe-Client-User-Agent` value: a compact JSON object
/// describing the bindings and the runtime environment.
#[must_use]
pub fn client_user_agent() -> String {
    serde_json::json!({
        "bindings_version": BINDINGS_VERSION,
        "lang": "rust",
        "lang_version": lang_version(),
        "publisher": PUBLISHER,
        "uname": uname(),
    })
    .to_string()
}

/// Builds the diagnostic headers attached to every outbound request.
///
/// Values are sanitized to printable ASCII, so construction cannot fail.
#[must_use]
pub fn diagnostic_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&ascii_clean(&user_agent()))
            .expect("sanitized header value is printable ASCII"),
    );
    headers.insert(
        CLIENT_USER_AGENT_HEADER,
        HeaderValue::from_str(&ascii_clean(&client_user_agent()))
            .expect("sanitized header value is printable ASCII"),
    );
    headers
}
