//! Payment Configuration
//!
//! Read once at startup. A missing variable is fatal misconfiguration,
//! not a runtime error.

use crate::error::{PaymentError, Result};

/// Stripe credentials and the two subscription price ids
#[derive(Clone, Debug)]
pub struct PaymentConfig {
    /// Secret API key (`sk_...`)
    pub secret_key: String,

    /// Price id for the monthly plan
    pub monthly_price_id: String,

    /// Price id for the yearly plan
    pub yearly_price_id: String,
}

impl PaymentConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            secret_key: require("STRIPE_SECRET_KEY")?,
            monthly_price_id: require("STRIPE_PRICE_MONTHLY")?,
            yearly_price_id: require("STRIPE_PRICE_YEARLY")?,
        })
    }
}

fn require(name: &str) -> Result<String> {
    std::env::var(name).map_err(|_| PaymentError::Config(format!("{name} not set")))
}
