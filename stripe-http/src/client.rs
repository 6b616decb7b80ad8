//! A client for the Stripe REST API over HTTP.
//!
//! The [`StripeClient`] wraps a shared `reqwest` client and handles the
//! parts of the wire contract that are the same for every call: bearer
//! authentication, the pinned `Stripe-Version`, the diagnostic
//! `User-Agent` / `X-Stripe-Client-User-Agent` headers, form-encoded
//! request bodies, and decoding of the JSON error envelope.
//!
//! ## Error Handling
//!
//! Custom error types capture detailed failure contexts, including
//! - URL and header construction
//! - HTTP transport failures
//! - JSON deserialization errors
//! - Error envelopes decoded from non-2xx responses

use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, StatusCode};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use stripe_proto::{API_VERSION, ApiError, ErrorPayload, Token, TokenCreateParams};

use crate::constants::{DEFAULT_API_BASE, STRIPE_VERSION_HEADER};
use crate::useragent::diagnostic_headers;

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

/// Errors that can occur while talking to the Stripe API.
#[derive(Debug, thiserror::Error)]
pub enum StripeClientError {
    /// URL parse error.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// A configured value is not a valid HTTP header value.
    #[error("invalid header value: {context}: {source}")]
    InvalidHeader {
        /// Human-readable context.
        context: &'static str,
        /// The underlying header error.
        #[source]
        source: http::header::InvalidHeaderValue,
    },
    /// HTTP transport error.
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// Failed to read response body.
    #[error("Failed to read response body as text: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// JSON deserialization error.
    #[error("Failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// Human-readable context.
        context: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The API returned an error envelope.
    #[error("Stripe API error ({status}): {context}: {error}")]
    Api {
        /// Human-readable context.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// The decoded error object.
        error: ApiError,
    },
    /// Unexpected HTTP status with a body that is not an error envelope.
    #[error("Unexpected HTTP status {status}: {context}: {body}")]
    HttpStatus {
        /// Human-readable context.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// The response body.
        body: String,
    },
}

/// A client for the Stripe token endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct StripeClient {
    /// Base URL of the API (e.g. `https://api.stripe.com/v1/`)
    api_base: Url,
    /// Full URL for `POST /tokens` requests
    tokens_url: Url,
    /// Shared Reqwest HTTP client
    client: Client,
    /// Headers sent with each request (auth, version, diagnostics, custom)
    headers: HeaderMap,
    /// Optional request timeout
    timeout: Option<Duration>,
}

impl StripeClient {
    /// Constructs a new [`StripeClient`] against the live API base.
    ///
    /// # Errors
    ///
    /// Returns [`StripeClientError`] if the secret key is not a valid
    /// header value.
    pub fn try_new(secret_key: &str) -> Result<Self, StripeClientError> {
        Self::try_new_with_base(secret_key, DEFAULT_API_BASE)
    }

    /// Constructs a new [`StripeClient`] against a custom API base.
    ///
    /// Trailing slashes on `api_base` are normalized; endpoint URLs are
    /// resolved relative to it.
    ///
    /// # Errors
    ///
    /// Returns [`StripeClientError`] if URL or header construction fails.
    pub fn try_new_with_base(
        secret_key: &str,
        api_base: &str,
    ) -> Result<Self, StripeClientError> {
        // Normalize: strip trailing slashes and add a single trailing slash
        let mut normalized = api_base.trim_end_matches('/').to_string();
        normalized.push('/');
        let api_base =
            Url::parse(&normalized).map_err(|e| StripeClientError::UrlParse {
                context: "Failed to parse API base URL",
                source: e,
            })?;
        let tokens_url =
            api_base
                .join("./tokens")
                .map_err(|e| StripeClientError::UrlParse {
                    context: "Failed to construct ./tokens URL",
                    source: e,
                })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {secret_key}")).map_err(|e| {
            StripeClientError::InvalidHeader {
                context: "Failed to build Authorization header from secret key",
                source: e,
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = diagnostic_headers();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(STRIPE_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        Ok(Self {
            api_base,
            tokens_url,
            client: Client::new(),
            headers,
            timeout: None,
        })
    }

    /// Returns the base URL used by this client.
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Returns the computed `./tokens` URL relative to [`StripeClient::api_base`].
    pub const fn tokens_url(&self) -> &Url {
        &self.tokens_url
    }

    /// Returns the headers sent with each request.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the configured timeout, if any.
    pub const fn timeout(&self) -> &Option<Duration> {
        &self.timeout
    }

    /// Attaches custom headers to all future requests, on top of the
    /// authentication and diagnostic headers already installed.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets a timeout for all future requests.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the pinned API version sent as `Stripe-Version`.
    ///
    /// # Errors
    ///
    /// Returns [`StripeClientError::InvalidHeader`] if `version` is not a
    /// valid header value.
    pub fn with_api_version(mut self, version: &str) -> Result<Self, StripeClientError> {
        let value =
            HeaderValue::from_str(version).map_err(|e| StripeClientError::InvalidHeader {
                context: "Failed to build Stripe-Version header",
                source: e,
            })?;
        self.headers.insert(STRIPE_VERSION_HEADER, value);
        Ok(self)
    }

    /// Creates a token via `POST /tokens`.
    ///
    /// The parameters are form-encoded with the API's bracketed keys; the
    /// response is the full token resource.
    ///
    /// # Errors
    ///
    /// Returns [`StripeClientError`] if the HTTP request fails or the API
    /// rejects the parameters.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "stripe.client.create_token", skip_all, err)
    )]
    pub async fn create_token(
        &self,
        params: &TokenCreateParams,
    ) -> Result<Token, StripeClientError> {
        self.post_form(&self.tokens_url, "POST /tokens", params)
            .await
    }

    /// Retrieves an existing token via `GET /tokens/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`StripeClientError`] if the HTTP request fails or no such
    /// token exists.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "stripe.client.retrieve_token", skip_all, fields(token = %id), err)
    )]
    pub async fn retrieve_token(&self, id: &str) -> Result<Token, StripeClientError> {
        let url = self
            .api_base
            .join(&format!("./tokens/{id}"))
            .map_err(|e| StripeClientError::UrlParse {
                context: "Failed to construct ./tokens/{id} URL",
                source: e,
            })?;
        self.get_json(&url, "GET /tokens/{id}").await
    }

    /// Generic POST helper that handles form encoding, error mapping,
    /// timeout application, and telemetry integration.
    ///
    /// `context` is a human-readable identifier used in tracing and error
    /// messages (e.g. `"POST /tokens"`).
    async fn post_form<T, R>(
        &self,
        url: &Url,
        context: &'static str,
        params: &T,
    ) -> Result<R, StripeClientError>
    where
        T: serde::Serialize + Sync + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let mut req = self.client.post(url.clone()).form(params);
        for (key, value) in &self.headers {
            req = req.header(key, value);
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let http_response = req
            .send()
            .await
            .map_err(|e| StripeClientError::Http { context, source: e })?;

        let result = decode_response(http_response, context).await;

        record_result_on_span(&result);

        result
    }

    /// Generic GET helper that handles error mapping, timeout application,
    /// and telemetry integration.
    ///
    /// `context` is a human-readable identifier used in tracing and error
    /// messages (e.g. `"GET /tokens/{id}"`).
    async fn get_json<R>(
        &self,
        url: &Url,
        context: &'static str,
    ) -> Result<R, StripeClientError>
    where
        R: serde::de::DeserializeOwned,
    {
        let mut req = self.client.get(url.clone());
        for (key, value) in &self.headers {
            req = req.header(key, value);
        }
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let http_response = req
            .send()
            .await
            .map_err(|e| StripeClientError::Http { context, source: e })?;

        let result = decode_response(http_response, context).await;

        record_result_on_span(&result);

        result
    }
}

/// Decodes a response body: a 2xx body is decoded as `R`, any other status
/// is first tried as the API's error envelope before falling back to the
/// raw body.
async fn decode_response<R>(
    http_response: reqwest::Response,
    context: &'static str,
) -> Result<R, StripeClientError>
where
    R: serde::de::DeserializeOwned,
{
    let status = http_response.status();
    let body = http_response
        .text()
        .await
        .map_err(|e| StripeClientError::ResponseBodyRead { context, source: e })?;

    if status.is_success() {
        serde_json::from_str::<R>(&body)
            .map_err(|e| StripeClientError::JsonDeserialization { context, source: e })
    } else {
        match serde_json::from_str::<ErrorPayload>(&body) {
            Ok(payload) => Err(StripeClientError::Api {
                context,
                status,
                error: payload.error,
            }),
            Err(_) => Err(StripeClientError::HttpStatus {
                context,
                status,
                body,
            }),
        }
    }
}

/// Records the outcome of a request on a tracing span, including status and errors.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R>(result: &Result<R, StripeClientError>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Stripe API request failed");
        }
    }
}

/// Records the outcome of a request on a tracing span, including status and errors.
/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R>(_result: &Result<R, StripeClientError>) {}
