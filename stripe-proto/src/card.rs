//! The card resource.
//!
//! Cards show up nested inside tokens (and standalone when attached to a
//! customer). Fields mirror the API's card object one-to-one; verification
//! check fields carry the service's verbatim strings (`"pass"`, `"fail"`,
//! `"unavailable"`, `"unchecked"`) rather than a local enum, since the set
//! is owned by the remote contract.

use serde::{Deserialize, Serialize};

/// A card resource as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card identifier (e.g. `card_16YQlz...`).
    pub id: String,

    /// Object tag, always `"card"`.
    pub object: String,

    /// Last four digits of the card number.
    pub last4: String,

    /// Card brand (e.g. `"Visa"`, `"MasterCard"`).
    pub brand: String,

    /// Two-digit expiration month.
    pub exp_month: u8,

    /// Four-digit expiration year.
    pub exp_year: u16,

    /// Funding source: `"credit"`, `"debit"`, `"prepaid"` or `"unknown"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,

    /// Two-letter country code of the issuing bank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Cardholder name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Identifier of the customer the card is attached to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// Uniquely identifies the card number across tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Last four digits of the device account number (Apple Pay etc.).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_last4: Option<String>,

    /// Tokenization method (e.g. `"apple_pay"`), if the card was digitized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenization_method: Option<String>,

    /// Billing address, first line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,

    /// Billing address, second line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    /// Billing address city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,

    /// Billing address state or province.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_state: Option<String>,

    /// Billing address postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,

    /// Billing address country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,

    /// Result of the address line 1 verification check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1_check: Option<String>,

    /// Result of the postal code verification check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_zip_check: Option<String>,

    /// Result of the CVC verification check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvc_check: Option<String>,
}

impl Card {
    /// Object tag the API uses for card resources.
    pub const OBJECT: &'static str = "card";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_deserialize_full() {
        let json = r#"{
            "id": "card_16YQlzGLwndkPqS2fLJ1Vnay",
            "object": "card",
            "last4": "4242",
            "brand": "Visa",
            "exp_month": 8,
            "exp_year": 2017,
            "funding": "credit",
            "country": "US",
            "name": "Ada Lovelace",
            "fingerprint": "Xt5EWLLDS7FJjR1c",
            "cvc_check": "pass",
            "address_zip": "94110",
            "address_zip_check": "pass"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, "card_16YQlzGLwndkPqS2fLJ1Vnay");
        assert_eq!(card.object, Card::OBJECT);
        assert_eq!(card.last4, "4242");
        assert_eq!(card.brand, "Visa");
        assert_eq!(card.exp_month, 8);
        assert_eq!(card.exp_year, 2017);
        assert_eq!(card.funding.as_deref(), Some("credit"));
        assert_eq!(card.cvc_check.as_deref(), Some("pass"));
        assert_eq!(card.customer, None);
        assert_eq!(card.tokenization_method, None);
    }

    #[test]
    fn test_card_serialize_skips_absent_fields() {
        let json = r#"{
            "id": "card_1",
            "object": "card",
            "last4": "1881",
            "brand": "Visa",
            "exp_month": 1,
            "exp_year": 2020
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&card).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 6);
        assert!(!map.contains_key("name"));
        assert!(!map.contains_key("cvc_check"));
    }

    #[test]
    fn test_card_roundtrip() {
        let json = r#"{"id":"card_2","object":"card","last4":"0005","brand":"American Express","exp_month":12,"exp_year":2019,"country":"US"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        let serialized = serde_json::to_string(&card).unwrap();
        let reparsed: Card = serde_json::from_str(&serialized).unwrap();
        assert_eq!(card, reparsed);
    }
}
