//! REST client for the Stripe HTTP API.
//!
//! Requests are form-encoded and authenticated with the secret key as a
//! bearer token. Creates carry an `Idempotency-Key` so a request that times
//! out on our side cannot be applied twice by the gateway.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{Customer, NewPaymentIntent, PaymentError, PaymentGateway, PaymentIntent};

/// Production API host.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Default checkout currency.
const DEFAULT_CURRENCY: &str = "usd";

/// HTTP timeout for a single gateway call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for the payment gateway client and webhook endpoint.
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (`sk_live_...` / `sk_test_...`).
    pub secret_key: String,
    /// API host without a trailing slash.
    pub api_base: String,
    /// Signing secret for inbound webhooks. The webhook endpoint is disabled
    /// when unset.
    pub webhook_secret: Option<String>,
    /// Lowercase ISO currency code used for checkout.
    pub currency: String,
}

impl StripeConfig {
    /// Load gateway configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default                  |
    /// |-------------------------|----------|--------------------------|
    /// | `STRIPE_SECRET_KEY`     | **yes**  | --                       |
    /// | `STRIPE_API_BASE`       | no       | `https://api.stripe.com` |
    /// | `STRIPE_WEBHOOK_SECRET` | no       | unset                    |
    /// | `CHECKOUT_CURRENCY`     | no       | `usd`                    |
    ///
    /// # Panics
    ///
    /// Panics if `STRIPE_SECRET_KEY` is not set or is empty.
    pub fn from_env() -> Self {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .expect("STRIPE_SECRET_KEY must be set in the environment");
        assert!(!secret_key.is_empty(), "STRIPE_SECRET_KEY must not be empty");

        let api_base = std::env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.into())
            .trim_end_matches('/')
            .to_string();

        let webhook_secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        let currency = std::env::var("CHECKOUT_CURRENCY")
            .unwrap_or_else(|_| DEFAULT_CURRENCY.into())
            .to_lowercase();

        Self {
            secret_key,
            api_base,
            webhook_secret,
            currency,
        }
    }
}

/// HTTP client for the payment gateway.
pub struct StripeClient {
    client: reqwest::Client,
    api_base: String,
    secret_key: String,
}

/// Error envelope the gateway returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl StripeClient {
    /// Build a client with its own connection pool.
    pub fn new(config: &StripeConfig) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &StripeConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.clone(),
            secret_key: config.secret_key.clone(),
        }
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(String, String)],
    ) -> Result<T, PaymentError> {
        let response = self
            .client
            .post(format!("{}{path}", self.api_base))
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", uuid::Uuid::new_v4().to_string())
            .form(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, PaymentError> {
        let response = self
            .client
            .get(format!("{}{path}", self.api_base))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Decode a 2xx body into `T`, or turn anything else into
    /// [`PaymentError::Api`].
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, PaymentError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| PaymentError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_customer(&self, email: &str, name: &str) -> Result<Customer, PaymentError> {
        let form = vec![
            ("email".to_string(), email.to_string()),
            ("name".to_string(), name.to_string()),
        ];
        let customer: Customer = self.post_form("/v1/customers", &form).await?;
        tracing::debug!(customer_id = %customer.id, "Created gateway customer");
        Ok(customer)
    }

    async fn create_payment_intent(
        &self,
        intent: &NewPaymentIntent,
    ) -> Result<PaymentIntent, PaymentError> {
        let form = payment_intent_form(intent);
        let created: PaymentIntent = self.post_form("/v1/payment_intents", &form).await?;
        tracing::debug!(
            payment_intent_id = %created.id,
            amount = created.amount,
            "Created payment intent"
        );
        Ok(created)
    }

    async fn retrieve_payment_intent(&self, id: &str) -> Result<PaymentIntent, PaymentError> {
        if !is_object_id(id) {
            return Err(PaymentError::Api {
                status: 404,
                message: format!("No such payment_intent: '{id}'"),
            });
        }
        self.get(&format!("/v1/payment_intents/{id}")).await
    }
}

/// Gateway object ids are `<prefix>_<alphanumerics>`. Anything else would
/// change the request path or query once spliced into the URL.
fn is_object_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Flatten a [`NewPaymentIntent`] into the gateway's bracketed form keys.
fn payment_intent_form(intent: &NewPaymentIntent) -> Vec<(String, String)> {
    let mut form = vec![
        ("amount".to_string(), intent.amount.to_string()),
        ("currency".to_string(), intent.currency.clone()),
        (
            "automatic_payment_methods[enabled]".to_string(),
            "true".to_string(),
        ),
    ];
    if let Some(customer) = &intent.customer_id {
        form.push(("customer".to_string(), customer.clone()));
    }
    for (key, value) in &intent.metadata {
        form.push((format!("metadata[{key}]"), value.clone()));
    }
    form
}

/// Extract `error.message` from an error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|e| e.error.message)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn config() -> StripeConfig {
        StripeConfig {
            secret_key: "sk_test_123".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            webhook_secret: None,
            currency: "usd".to_string(),
        }
    }

    #[test]
    fn form_includes_customer_and_metadata() {
        let form = payment_intent_form(&NewPaymentIntent {
            amount: 5000,
            currency: "usd".to_string(),
            customer_id: Some("cus_42".to_string()),
            metadata: vec![
                ("product_id".to_string(), "7".to_string()),
                ("size".to_string(), "L".to_string()),
            ],
        });

        assert!(form.contains(&("amount".to_string(), "5000".to_string())));
        assert!(form.contains(&("customer".to_string(), "cus_42".to_string())));
        assert!(form.contains(&("metadata[product_id]".to_string(), "7".to_string())));
        assert!(form.contains(&("metadata[size]".to_string(), "L".to_string())));
    }

    #[test]
    fn form_omits_missing_customer() {
        let form = payment_intent_form(&NewPaymentIntent {
            amount: 100,
            currency: "eur".to_string(),
            customer_id: None,
            metadata: Vec::new(),
        });
        assert!(form.iter().all(|(k, _)| k != "customer"));
    }

    #[test]
    fn error_message_from_envelope() {
        let body = r#"{"error":{"type":"invalid_request_error","message":"No such payment_intent: 'pi_x'"}}"#;
        assert_eq!(api_error_message(body), "No such payment_intent: 'pi_x'");
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn object_id_shape() {
        assert!(is_object_id("pi_3MtwBwLkdIwHu7ix28a3tqPa"));
        assert!(!is_object_id(""));
        assert!(!is_object_id(".."));
        assert!(!is_object_id("pi_1?expand[]=customer"));
        assert!(!is_object_id("pi_1#frag"));
        assert!(!is_object_id("pi_1%2F"));
    }

    #[tokio::test]
    async fn rejects_malformed_ids_without_a_request() {
        // The base points nowhere, so a request would surface as
        // `PaymentError::Request` rather than a 404.
        let client = StripeClient::new(&config()).unwrap();
        for id in [
            "pi_1/../../customers",
            "..",
            "pi_1?expand[]=customer",
            "pi_1#frag",
            "",
        ] {
            let err = client.retrieve_payment_intent(id).await.unwrap_err();
            assert_matches!(err, PaymentError::Api { status: 404, .. }, "id {id:?}");
        }
    }

    #[tokio::test]
    async fn unreachable_gateway_is_a_request_error() {
        let client = StripeClient::new(&config()).unwrap();
        let err = client.retrieve_payment_intent("pi_1").await.unwrap_err();
        assert_matches!(err, PaymentError::Request(_));
    }
}
