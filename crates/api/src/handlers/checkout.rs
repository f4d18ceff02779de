//! Handlers for the `/checkout` resource.
//!
//! Thin passthroughs to the payment gateway. The browser confirms payments
//! directly with the gateway using the client secret returned here; this
//! service only creates the intent and later verifies its status.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use famous_core::error::CoreError;
use famous_core::types::DbId;
use famous_db::repositories::{ProductRepo, ProductSizeRepo};
use famous_payments::webhook::{
    construct_event, DEFAULT_TOLERANCE_SECS, EVENT_PAYMENT_FAILED, EVENT_PAYMENT_SUCCEEDED,
    SIGNATURE_HEADER,
};
use famous_payments::{NewPaymentIntent, PaymentIntentStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::{data, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /checkout/customers`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub customer_id: String,
}

/// Request body for `POST /checkout/payment-intents`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentIntentRequest {
    pub product_id: DbId,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 20, message = "quantity must be between 1 and 20"))]
    pub quantity: u32,
    /// Size label; must be one of the sizes offered for the product's type.
    pub size: Option<String>,
    /// Gateway customer id from `POST /checkout/customers`.
    pub customer_id: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct PaymentIntentResponse {
    pub payment_intent_id: String,
    pub client_secret: Option<String>,
    pub amount: i64,
    pub currency: String,
    pub status: PaymentIntentStatus,
}

/// Result of `GET /checkout/payment-intents/{id}`.
#[derive(Debug, Serialize)]
pub struct PaymentVerification {
    pub id: String,
    pub status: PaymentIntentStatus,
    /// `true` only when the gateway reports `succeeded`.
    pub succeeded: bool,
}

#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/checkout/customers
///
/// Register the shopper with the payment gateway. Returns 201 with the
/// gateway customer id.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(mut input): Json<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CustomerResponse>>)> {
    input.email = input.email.trim().to_lowercase();
    input.name = input.name.trim().to_string();
    input.validate()?;

    let customer = state
        .payments
        .create_customer(&input.email, &input.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        data(CustomerResponse {
            customer_id: customer.id,
        }),
    ))
}

/// POST /api/v1/checkout/payment-intents
///
/// Price is taken from the product row; the client only chooses what and how
/// many.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(input): Json<CreatePaymentIntentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PaymentIntentResponse>>)> {
    input.validate()?;

    let product = ProductRepo::find_by_id(&state.pool, input.product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: input.product_id,
        }))?;

    let size = match input.size.as_deref().map(str::trim) {
        Some(requested) => {
            let offered = ProductSizeRepo::list_by_product_type(&state.pool, product.product_type_id)
                .await?;
            let matched = offered
                .into_iter()
                .find(|s| s.size.eq_ignore_ascii_case(requested))
                .ok_or_else(|| {
                    AppError::Core(CoreError::Validation(format!(
                        "Size '{requested}' is not offered for this product"
                    )))
                })?;
            Some(matched.size)
        }
        None => None,
    };

    let amount = product
        .price
        .checked_mul(i64::from(input.quantity))
        .ok_or_else(|| AppError::BadRequest("Order total is too large".into()))?;

    let mut metadata = vec![
        ("product_id".to_string(), product.id.to_string()),
        ("product_name".to_string(), product.name.clone()),
        ("quantity".to_string(), input.quantity.to_string()),
    ];
    if let Some(size) = &size {
        metadata.push(("size".to_string(), size.clone()));
    }

    let intent = state
        .payments
        .create_payment_intent(&NewPaymentIntent {
            amount,
            currency: state.config.stripe.currency.clone(),
            customer_id: input.customer_id.filter(|c| !c.trim().is_empty()),
            metadata,
        })
        .await?;

    tracing::info!(
        payment_intent_id = %intent.id,
        product_id = product.id,
        amount,
        "Payment intent created"
    );

    Ok((
        StatusCode::CREATED,
        data(PaymentIntentResponse {
            payment_intent_id: intent.id,
            client_secret: intent.client_secret,
            amount: intent.amount,
            currency: intent.currency,
            status: intent.status,
        }),
    ))
}

/// GET /api/v1/checkout/payment-intents/{id}
///
/// Verify whether a payment completed. Called by the order confirmation page
/// with the id the gateway redirected back with.
pub async fn verify_payment_intent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<PaymentVerification>>> {
    let intent = state.payments.retrieve_payment_intent(&id).await?;

    Ok(data(PaymentVerification {
        succeeded: intent.status.is_succeeded(),
        status: intent.status,
        id: intent.id,
    }))
}

/// POST /api/v1/checkout/webhook
///
/// Receives gateway events. The raw body is needed for signature
/// verification, so it is taken as bytes rather than JSON.
pub async fn webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<WebhookAck>> {
    let secret = state.config.stripe.webhook_secret.as_deref().ok_or_else(|| {
        AppError::Core(CoreError::Unavailable(
            "Webhook endpoint is not configured".into(),
        ))
    })?;

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing signature header".into()))?;

    let now = chrono::Utc::now().timestamp();
    let event = construct_event(&body, signature, secret, DEFAULT_TOLERANCE_SECS, now)
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected webhook delivery");
            AppError::BadRequest(e.to_string())
        })?;

    match event.event_type.as_str() {
        EVENT_PAYMENT_SUCCEEDED => {
            tracing::info!(event_id = %event.id, payment_intent_id = ?event.object_id(), "Payment succeeded");
        }
        EVENT_PAYMENT_FAILED => {
            tracing::warn!(event_id = %event.id, payment_intent_id = ?event.object_id(), "Payment failed");
        }
        other => {
            tracing::debug!(event_id = %event.id, event_type = other, "Ignoring webhook event");
        }
    }

    Ok(Json(WebhookAck { received: true }))
}
