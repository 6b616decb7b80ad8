//! HTTP-specific constants for the Stripe API.

/// Diagnostic header describing the client runtime environment.
pub const CLIENT_USER_AGENT_HEADER: &str = "X-Stripe-Client-User-Agent";

/// Header pinning the API version a request is made against.
pub const STRIPE_VERSION_HEADER: &str = "Stripe-Version";

/// Header carrying an idempotency key for safely retrying POST requests.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Default base URL for API requests.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com/v1/";
