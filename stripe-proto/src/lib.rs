//! Wire format types for the Stripe HTTP API.
//!
//! This crate defines the serialization-level data structures exchanged with
//! the Stripe REST API, covering the token resource and the request/response
//! shapes around it. It has minimal dependencies (only `serde` and
//! `serde_json`) and is intended to be the shared wire vocabulary for the
//! rest of the binding stack.
//!
//! Correctness here means one thing: every field maps losslessly to its
//! documented wire key, including the bracketed nested bank-account keys
//! the API embeds directly in the token object (`bank_account[last4]` and
//! friends).
//!
//! # Modules
//!
//! - [`token`] — The token resource (`Token`)
//! - [`card`] — The card resource (`Card`)
//! - [`params`] — Form-encoded parameters for token creation
//! - [`error`] — The API error envelope (`ErrorPayload`, `ApiError`)
//! - [`timestamp`] — Epoch-second timestamps ([`Timestamp`])
//! - [`helpers`] — Object-tag detection and checked parsing

pub mod card;
pub mod error;
pub mod helpers;
pub mod params;
pub mod timestamp;
pub mod token;

pub use card::Card;
pub use error::{ApiError, ErrorPayload, ErrorType};
pub use params::{BankAccountTokenParams, CardTokenParams, TokenCreateParams};
pub use timestamp::Timestamp;
pub use token::Token;

/// API version these bindings are written against, sent as the
/// `Stripe-Version` header on every request.
pub const API_VERSION: &str = "2015-04-07";

/// Errors that can occur when decoding Stripe API resources.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The `object` field is missing from the JSON data.
    #[error("missing object field")]
    MissingObject,

    /// The `object` field names a different resource than expected.
    #[error("unexpected object: expected {expected:?}, found {found:?}")]
    UnexpectedObject {
        /// The resource tag the caller asked for.
        expected: &'static str,
        /// The resource tag present in the data.
        found: String,
    },

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
