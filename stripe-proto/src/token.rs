//! The token resource.
//!
//! Tokens are short-lived references to card or bank-account details,
//! created client-side so that raw payment credentials never touch a
//! merchant's servers. A token either wraps a card (returned as a nested
//! `card` object) or a bank account — which the API flattens directly onto
//! the token as bracketed keys (`bank_account[last4]`, ...). Those keys are
//! part of the wire contract and are kept flat here.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::timestamp::Timestamp;

/// A token resource as returned by `POST /v1/tokens` and
/// `GET /v1/tokens/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Unique token identifier (e.g. `tok_16YQlzGLwndkPqS2`).
    pub id: String,

    /// Object tag, always `"token"`.
    pub object: String,

    /// Bank account identifier.
    #[serde(
        rename = "bank_account[id]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_id: Option<String>,

    /// Bank account object tag (`"bank_account"`).
    #[serde(
        rename = "bank_account[object]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_object: Option<String>,

    /// Two-letter country code of the bank account.
    #[serde(
        rename = "bank_account[country]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_country: Option<String>,

    /// Three-letter ISO currency code of the bank account.
    #[serde(
        rename = "bank_account[currency]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_currency: Option<String>,

    /// Last four digits of the account number.
    #[serde(
        rename = "bank_account[last4]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_last4: Option<String>,

    /// Verification status: `"new"`, `"validated"`, `"verified"`,
    /// `"verification_failed"` or `"errored"`.
    #[serde(
        rename = "bank_account[status]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_status: Option<String>,

    /// Name of the bank holding the account.
    #[serde(
        rename = "bank_account[bank_name]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_name: Option<String>,

    /// Uniquely identifies the account number across tokens.
    #[serde(
        rename = "bank_account[fingerprint]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_fingerprint: Option<String>,

    /// Bank routing number.
    #[serde(
        rename = "bank_account[routing_number]",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bank_account_routing_number: Option<String>,

    /// The card the token wraps, for card tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    /// IP address of the client that created the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ip: Option<String>,

    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    /// Whether the token was created with a live-mode API key.
    pub livemode: bool,

    /// Token kind: `"card"` or `"bank_account"`.
    #[serde(rename = "type")]
    pub token_type: String,

    /// Whether the token has already been used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<bool>,

    /// Historical key; the live API no longer returns it for tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    /// Object tag the API uses for token resources.
    pub const OBJECT: &'static str = "token";

    /// Token kind for card tokens.
    pub const TYPE_CARD: &'static str = "card";

    /// Token kind for bank-account tokens.
    pub const TYPE_BANK_ACCOUNT: &'static str = "bank_account";

    /// Returns true for card tokens.
    #[must_use]
    pub fn is_card(&self) -> bool {
        self.token_type == Self::TYPE_CARD
    }

    /// Returns true for bank-account tokens.
    #[must_use]
    pub fn is_bank_account(&self) -> bool {
        self.token_type == Self::TYPE_BANK_ACCOUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_TOKEN_JSON: &str = r#"{
        "id": "tok_16YQlzGLwndkPqS2vqwVSzBX",
        "object": "token",
        "card": {
            "id": "card_16YQlzGLwndkPqS2fLJ1Vnay",
            "object": "card",
            "last4": "4242",
            "brand": "Visa",
            "exp_month": 8,
            "exp_year": 2017,
            "funding": "credit",
            "fingerprint": "Xt5EWLLDS7FJjR1c",
            "cvc_check": "pass"
        },
        "client_ip": "203.0.113.17",
        "created": 1446846495,
        "livemode": false,
        "type": "card",
        "used": false
    }"#;

    const BANK_TOKEN_JSON: &str = r#"{
        "id": "btok_7GLBBPyqeDAjqg",
        "object": "token",
        "bank_account[id]": "ba_7GLBBMB9d0mNcJ",
        "bank_account[object]": "bank_account",
        "bank_account[country]": "US",
        "bank_account[currency]": "usd",
        "bank_account[last4]": "6789",
        "bank_account[status]": "new",
        "bank_account[bank_name]": "STRIPE TEST BANK",
        "bank_account[fingerprint]": "1JWtPxqbdX5Gamtc",
        "bank_account[routing_number]": "110000000",
        "created": 1446846495,
        "livemode": false,
        "type": "bank_account",
        "used": false
    }"#;

    #[test]
    fn test_card_token_deserialize() {
        let token: Token = serde_json::from_str(CARD_TOKEN_JSON).unwrap();
        assert_eq!(token.id, "tok_16YQlzGLwndkPqS2vqwVSzBX");
        assert_eq!(token.object, Token::OBJECT);
        assert!(token.is_card());
        assert!(!token.is_bank_account());
        assert_eq!(token.client_ip.as_deref(), Some("203.0.113.17"));
        assert_eq!(token.created.unwrap().as_secs(), 1_446_846_495);
        assert!(!token.livemode);
        assert_eq!(token.used, Some(false));
        assert_eq!(token.bank_account_id, None);

        let card = token.card.unwrap();
        assert_eq!(card.last4, "4242");
        assert_eq!(card.exp_year, 2017);
    }

    #[test]
    fn test_bank_account_token_deserialize() {
        let token: Token = serde_json::from_str(BANK_TOKEN_JSON).unwrap();
        assert!(token.is_bank_account());
        assert_eq!(token.card, None);
        assert_eq!(token.bank_account_id.as_deref(), Some("ba_7GLBBMB9d0mNcJ"));
        assert_eq!(token.bank_account_object.as_deref(), Some("bank_account"));
        assert_eq!(token.bank_account_country.as_deref(), Some("US"));
        assert_eq!(token.bank_account_currency.as_deref(), Some("usd"));
        assert_eq!(token.bank_account_last4.as_deref(), Some("6789"));
        assert_eq!(token.bank_account_status.as_deref(), Some("new"));
        assert_eq!(token.bank_account_name.as_deref(), Some("STRIPE TEST BANK"));
        assert_eq!(
            token.bank_account_fingerprint.as_deref(),
            Some("1JWtPxqbdX5Gamtc")
        );
        assert_eq!(
            token.bank_account_routing_number.as_deref(),
            Some("110000000")
        );
    }

    #[test]
    fn test_bank_account_token_serializes_bracketed_keys() {
        let token: Token = serde_json::from_str(BANK_TOKEN_JSON).unwrap();
        let value = serde_json::to_value(&token).unwrap();
        let map = value.as_object().unwrap();

        for key in [
            "bank_account[id]",
            "bank_account[object]",
            "bank_account[country]",
            "bank_account[currency]",
            "bank_account[last4]",
            "bank_account[status]",
            "bank_account[bank_name]",
            "bank_account[fingerprint]",
            "bank_account[routing_number]",
        ] {
            assert!(map.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(map["type"], "bank_account");
        assert_eq!(map["created"], 1_446_846_495_u64);
        assert!(!map.contains_key("card"));
        assert!(!map.contains_key("description"));
    }

    #[test]
    fn test_card_token_roundtrip() {
        let token: Token = serde_json::from_str(CARD_TOKEN_JSON).unwrap();
        let serialized = serde_json::to_string(&token).unwrap();
        let reparsed: Token = serde_json::from_str(&serialized).unwrap();
        assert_eq!(token, reparsed);
    }

    #[test]
    fn test_token_tolerates_unknown_keys() {
        let json = r#"{
            "id": "tok_1",
            "object": "token",
            "livemode": true,
            "type": "card",
            "some_future_field": {"nested": true}
        }"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert!(token.livemode);
        assert_eq!(token.created, None);
        assert_eq!(token.used, None);
    }

    #[test]
    fn test_token_historical_description_key() {
        let json = r#"{
            "id": "tok_2",
            "object": "token",
            "livemode": false,
            "type": "card",
            "description": "legacy"
        }"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.description.as_deref(), Some("legacy"));
    }
}
