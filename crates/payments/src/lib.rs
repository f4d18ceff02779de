//! Payment gateway boundary.
//!
//! [`PaymentGateway`] is the seam the API server talks to; [`StripeClient`]
//! is the production implementation over the gateway's REST API. Tests swap
//! in their own implementation behind the same trait object.
//!
//! - [`stripe`] -- HTTP client and configuration.
//! - [`webhook`] -- signature verification for inbound gateway events.

pub mod stripe;
pub mod webhook;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use stripe::{StripeClient, StripeConfig};

/// Errors from the payment gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway answered with a non-2xx status.
    #[error("Payment gateway error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The gateway's `error.message`, or the raw body when absent.
        message: String,
    },

    /// The gateway answered 2xx but the body did not match the expected shape.
    #[error("Unexpected payment gateway response: {0}")]
    Decode(String),
}

/// A customer record created on the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Customer {
    pub id: String,
}

/// Lifecycle state of a payment intent as reported by the gateway.
///
/// Only [`PaymentIntentStatus::Succeeded`] means the charge completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    /// A status this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl PaymentIntentStatus {
    pub fn is_succeeded(self) -> bool {
        self == PaymentIntentStatus::Succeeded
    }
}

/// A payment intent as returned by the gateway.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentIntent {
    pub id: String,
    pub status: PaymentIntentStatus,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    pub currency: String,
    /// Handed to the browser to confirm the payment; absent on some reads.
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
}

/// Parameters for a new payment intent.
#[derive(Debug, Clone)]
pub struct NewPaymentIntent {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// Lowercase ISO currency code, e.g. `usd`.
    pub currency: String,
    pub customer_id: Option<String>,
    /// Free-form key/value pairs stored on the intent (product id, size...).
    pub metadata: Vec<(String, String)>,
}

/// Operations the storefront needs from the payment gateway.
///
/// Every call is a single request with no retry; callers surface failures
/// directly.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Register a customer and return its gateway identifier.
    async fn create_customer(&self, email: &str, name: &str) -> Result<Customer, PaymentError>;

    /// Create a payment intent the browser can confirm.
    async fn create_payment_intent(
        &self,
        intent: &NewPaymentIntent,
    ) -> Result<PaymentIntent, PaymentError>;

    /// Fetch the current state of a payment intent.
    async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError>;
}
