//! Application State

use std::sync::Arc;

use brinde_payments::{CheckoutGateway, PaymentConfig};

/// Shared application state
///
/// Everything here is read-only; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Gateway to the external payment service
    pub gateway: Arc<dyn CheckoutGateway>,

    /// Stripe configuration (price ids for the pricing endpoint)
    pub config: Arc<PaymentConfig>,
}
