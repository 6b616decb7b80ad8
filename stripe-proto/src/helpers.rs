//! Object-tag detection and checked parsing.
//!
//! Every API resource carries an `object` field naming its type. These
//! helpers look at that tag before committing to a concrete struct, so
//! callers decoding payloads of uncertain provenance (webhook bodies,
//! logged responses) get a precise error instead of a field-level
//! deserialization failure.

use serde_json::Value;

use crate::WireError;
use crate::card::Card;
use crate::token::Token;

/// Extracts the `object` tag from JSON data.
///
/// # Errors
///
/// Returns [`WireError::MissingObject`] if the field is absent or not a
/// string.
pub fn detect_object(data: &Value) -> Result<&str, WireError> {
    data.get("object")
        .and_then(Value::as_str)
        .ok_or(WireError::MissingObject)
}

/// Checks that the `object` tag matches the expected resource.
///
/// # Errors
///
/// Returns [`WireError::UnexpectedObject`] on mismatch.
pub fn expect_object(data: &Value, expected: &'static str) -> Result<(), WireError> {
    let found = detect_object(data)?;
    if found == expected {
        Ok(())
    } else {
        Err(WireError::UnexpectedObject {
            expected,
            found: found.to_owned(),
        })
    }
}

/// Parses a token resource, checking the `object` tag first.
///
/// # Errors
///
/// Returns [`WireError`] if the tag is missing, names another resource, or
/// the fields do not decode.
pub fn parse_token(data: &Value) -> Result<Token, WireError> {
    expect_object(data, Token::OBJECT)?;
    Ok(serde_json::from_value(data.clone())?)
}

/// Parses a token resource from raw JSON bytes.
///
/// # Errors
///
/// Returns [`WireError`] on parse failure.
pub fn parse_token_bytes(data: &[u8]) -> Result<Token, WireError> {
    let parsed: Value = serde_json::from_slice(data)?;
    parse_token(&parsed)
}

/// Parses a card resource, checking the `object` tag first.
///
/// # Errors
///
/// Returns [`WireError`] if the tag is missing, names another resource, or
/// the fields do not decode.
pub fn parse_card(data: &Value) -> Result<Card, WireError> {
    expect_object(data, Card::OBJECT)?;
    Ok(serde_json::from_value(data.clone())?)
}

/// Parses a card resource from raw JSON bytes.
///
/// # Errors
///
/// Returns [`WireError`] on parse failure.
pub fn parse_card_bytes(data: &[u8]) -> Result<Card, WireError> {
    let parsed: Value = serde_json::from_slice(data)?;
    parse_card(&parsed)
}
