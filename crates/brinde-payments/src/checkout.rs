//! Stripe Checkout Integration
//!
//! Implements the hosted-checkout flow for subscription purchases, plus
//! the active-subscription lookup used by the premium gate.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionBillingAddressCollection,
    CheckoutSessionMode, Client, CreateCheckoutSession, CreateCheckoutSessionConsentCollection,
    CreateCheckoutSessionConsentCollectionTermsOfService, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionSubscriptionData, CustomerId, ListSubscriptions, Subscription,
    SubscriptionStatusFilter,
};

use crate::config::PaymentConfig;
use crate::error::{PaymentError, Result};

/// Request to create a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Stripe price id for the plan being purchased
    pub price_id: String,

    /// Internal user id, attached as metadata for later correlation
    pub user_id: String,

    /// Customer email, pre-filled on the hosted page
    pub user_email: String,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Stripe session id
    pub id: String,

    /// URL to redirect the payer to
    pub url: String,
}

/// Capability over the external payment service, so handlers can run
/// against a test double.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create a subscription-mode checkout session
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession>;

    /// Whether the customer has at least one active subscription
    async fn has_active_subscription(&self, customer_id: &str) -> Result<bool>;
}

/// Stripe-backed gateway
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    /// Create a new gateway from a secret API key
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from loaded configuration
    pub fn from_config(config: &PaymentConfig) -> Self {
        Self::new(&config.secret_key)
    }
}

#[async_trait]
impl CheckoutGateway for StripeGateway {
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        // user_id travels on the session and on the subscription it creates,
        // so webhooks and dashboard lookups can map back to our user.
        let correlation: HashMap<String, String> =
            HashMap::from([("user_id".to_string(), request.user_id.clone())]);

        let mut params = CreateCheckoutSession::new();
        params.customer_email = Some(&request.user_email);
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.mode = Some(CheckoutSessionMode::Subscription);
        params.allow_promotion_codes = Some(true);
        params.billing_address_collection = Some(CheckoutSessionBillingAddressCollection::Required);
        params.consent_collection = Some(CreateCheckoutSessionConsentCollection {
            terms_of_service: Some(CreateCheckoutSessionConsentCollectionTermsOfService::Required),
            ..Default::default()
        });
        params.metadata = Some(correlation.clone());
        params.subscription_data = Some(CreateCheckoutSessionSubscriptionData {
            metadata: Some(correlation),
            ..Default::default()
        });

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            price: Some(request.price_id.clone()),
            quantity: Some(1),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, price_id = %request.price_id, "Checkout session creation failed");
                PaymentError::Stripe(e.to_string())
            })?;

        let url = session
            .url
            .ok_or_else(|| PaymentError::Stripe("No checkout URL returned".into()))?;

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url,
        })
    }

    async fn has_active_subscription(&self, customer_id: &str) -> Result<bool> {
        let customer = customer_id
            .parse::<CustomerId>()
            .map_err(|e| PaymentError::Stripe(format!("invalid customer id: {e}")))?;

        let mut params = ListSubscriptions::new();
        params.customer = Some(customer);
        params.status = Some(SubscriptionStatusFilter::Active);
        params.limit = Some(1);

        let subscriptions = Subscription::list(&self.client, &params).await.map_err(|e| {
            tracing::error!(error = %e, "Subscription list failed");
            PaymentError::Stripe(e.to_string())
        })?;

        Ok(!subscriptions.data.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_construction() {
        let _gateway = StripeGateway::new("sk_test_123");
    }

    #[test]
    fn test_session_roundtrips_as_json() {
        let session = CheckoutSession {
            id: "cs_test_1".into(),
            url: "https://checkout.stripe.com/c/pay/cs_test_1".into(),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("cs_test_1"));
    }
}
