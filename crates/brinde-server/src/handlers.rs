//! HTTP Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
};
use serde::{Deserialize, Serialize};

use brinde_payments::{CheckoutRequest as PaymentCheckoutRequest, validate_checkout};

use crate::state::AppState;

/// Fallback origin when the request carries no Origin header
const DEFAULT_ORIGIN: &str = "http://localhost:3000";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Checkout payload as sent by the pricing page.
///
/// All fields are optional at the parse layer so that absence flows into
/// validation (HTTP 400) instead of a framework-level rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    #[serde(default)]
    pub price_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatusPayload {
    #[serde(default)]
    pub customer_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionStatusResponse {
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct PricesResponse {
    pub monthly: String,
    pub yearly: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> ErrorReply {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Configured subscription price ids, consumed by the pricing page
pub async fn list_prices(State(state): State<AppState>) -> Json<PricesResponse> {
    Json(PricesResponse {
        monthly: state.config.monthly_price_id.clone(),
        yearly: state.config.yearly_price_id.clone(),
    })
}

/// Create a Stripe checkout session
pub async fn create_checkout(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CheckoutPayload>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, ErrorReply> {
    let Json(payload) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Unparseable checkout payload");
        bad_request("incomplete data")
    })?;

    validate_checkout(
        payload.price_id.as_deref(),
        payload.user_id.as_deref(),
        payload.user_email.as_deref(),
    )
    .map_err(|e| bad_request(&e.to_string()))?;

    // Validation guarantees presence; the defaults are unreachable
    let price_id = payload.price_id.unwrap_or_default();
    let user_id = payload.user_id.unwrap_or_default();
    let user_email = payload.user_email.unwrap_or_default();

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(DEFAULT_ORIGIN);

    // {CHECKOUT_SESSION_ID} is substituted by Stripe at redirect time
    let success_url = format!("{origin}/premium/success?session_id={{CHECKOUT_SESSION_ID}}");
    let cancel_url = format!("{origin}/premium");

    let request = PaymentCheckoutRequest {
        price_id,
        user_id,
        user_email,
        success_url,
        cancel_url,
    };

    let session = state
        .gateway
        .create_checkout_session(request)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Checkout session creation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.user_message().into(),
                }),
            )
        })?;

    Ok(Json(CheckoutResponse {
        session_id: session.id,
        url: session.url,
    }))
}

/// Whether a customer currently holds an active subscription
pub async fn subscription_status(
    State(state): State<AppState>,
    payload: Result<Json<SubscriptionStatusPayload>, JsonRejection>,
) -> Result<Json<SubscriptionStatusResponse>, ErrorReply> {
    let Json(payload) = payload.map_err(|_| bad_request("incomplete data"))?;

    let customer_id = payload
        .customer_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| bad_request("incomplete data"))?;

    let active = state
        .gateway
        .has_active_subscription(&customer_id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Subscription lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.user_message().into(),
                }),
            )
        })?;

    Ok(Json(SubscriptionStatusResponse { active }))
}
