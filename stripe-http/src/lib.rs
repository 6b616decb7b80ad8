#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport layer for the Stripe API.
//!
//! This crate provides the [`StripeClient`] for talking to the Stripe REST
//! API over `reqwest`, plus the request metadata every outbound call
//! carries: the `User-Agent` string identifying these bindings and the
//! `X-Stripe-Client-User-Agent` header describing the local runtime
//! environment. Wire types live in [`stripe_proto`].
//!
//! ```no_run
//! use stripe_http::StripeClient;
//! use stripe_proto::CardTokenParams;
//!
//! # async fn demo() -> Result<(), stripe_http::StripeClientError> {
//! let client = StripeClient::try_new("sk_test_...")?;
//! let params = CardTokenParams::new("4242424242424242", 8, 2027).with_cvc("123");
//! let token = client.create_token(&params.into()).await?;
//! println!("tokenized: {}", token.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod client;
pub mod constants;
pub mod useragent;

pub use client::{StripeClient, StripeClientError};
pub use useragent::{client_user_agent, diagnostic_headers, user_agent};
