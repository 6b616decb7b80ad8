//! Form-encoded parameters for `POST /v1/tokens`.
//!
//! The API takes request bodies as `application/x-www-form-urlencoded` with
//! bracketed keys for nested parameters (`card[number]`, ...). Each params
//! struct keeps those keys flat so the stock form encoder produces exactly
//! the documented wire format.

use serde::Serialize;

/// Parameters for creating a token, one variant per token kind.
///
/// Serializes untagged: the wire format is just the inner struct's keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenCreateParams {
    /// Tokenize a card.
    Card(CardTokenParams),
    /// Tokenize a bank account.
    BankAccount(BankAccountTokenParams),
}

impl From<CardTokenParams> for TokenCreateParams {
    fn from(params: CardTokenParams) -> Self {
        Self::Card(params)
    }
}

impl From<BankAccountTokenParams> for TokenCreateParams {
    fn from(params: BankAccountTokenParams) -> Self {
        Self::BankAccount(params)
    }
}

/// Card details for token creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardTokenParams {
    /// Card number, without separators.
    #[serde(rename = "card[number]")]
    pub number: String,

    /// Two-digit expiration month.
    #[serde(rename = "card[exp_month]")]
    pub exp_month: u8,

    /// Four-digit expiration year.
    #[serde(rename = "card[exp_year]")]
    pub exp_year: u16,

    /// Card security code. Optional but strongly recommended.
    #[serde(rename = "card[cvc]", skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,

    /// Cardholder name.
    #[serde(rename = "card[name]", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Billing address, first line.
    #[serde(
        rename = "card[address_line1]",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line1: Option<String>,

    /// Billing address, second line.
    #[serde(
        rename = "card[address_line2]",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_line2: Option<String>,

    /// Billing address city.
    #[serde(rename = "card[address_city]", skip_serializing_if = "Option::is_none")]
    pub address_city: Option<String>,

    /// Billing address state or province.
    #[serde(
        rename = "card[address_state]",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_state: Option<String>,

    /// Billing address postal code.
    #[serde(rename = "card[address_zip]", skip_serializing_if = "Option::is_none")]
    pub address_zip: Option<String>,

    /// Billing address country.
    #[serde(
        rename = "card[address_country]",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_country: Option<String>,
}

impl CardTokenParams {
    /// Creates card params from the required fields.
    #[must_use]
    pub fn new(number: impl Into<String>, exp_month: u8, exp_year: u16) -> Self {
        Self {
            number: number.into(),
            exp_month,
            exp_year,
            cvc: None,
            name: None,
            address_line1: None,
            address_line2: None,
            address_city: None,
            address_state: None,
            address_zip: None,
            address_country: None,
        }
    }

    /// Sets the card security code.
    #[must_use]
    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = Some(cvc.into());
        self
    }

    /// Sets the cardholder name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Bank account details for token creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAccountTokenParams {
    /// Two-letter country code of the account.
    #[serde(rename = "bank_account[country]")]
    pub country: String,

    /// Three-letter ISO currency code the account holds.
    #[serde(rename = "bank_account[currency]")]
    pub currency: String,

    /// Account number.
    #[serde(rename = "bank_account[account_number]")]
    pub account_number: String,

    /// Routing number. Required for US accounts, unused elsewhere.
    #[serde(
        rename = "bank_account[routing_number]",
        skip_serializing_if = "Option::is_none"
    )]
    pub routing_number: Option<String>,
}

impl BankAccountTokenParams {
    /// Creates bank-account params from the required fields.
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        currency: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            currency: currency.into(),
            account_number: account_number.into(),
            routing_number: None,
        }
    }

    /// Sets the routing number.
    #[must_use]
    pub fn with_routing_number(mut self, routing_number: impl Into<String>) -> Self {
        self.routing_number = Some(routing_number.into());
        self
    }
}
