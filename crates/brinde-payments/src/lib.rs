//! # brinde-payments
//!
//! Stripe checkout and subscription lookups for the Brinde.AI backend.
//!
//! The integration uses Stripe's hosted checkout:
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │  /premium   │────▶│  Stripe Hosted  │────▶│ /premium/success │
//! │  (pricing)  │     │  Checkout Page  │     └──────────────────┘
//! └─────────────┘     └─────────────────┘
//! ```
//!
//! The server never touches card data: it creates a session, hands the
//! payer Stripe's URL, and Stripe redirects back with the session id
//! substituted into the success URL.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brinde_payments::{CheckoutGateway, CheckoutRequest, StripeGateway};
//!
//! let gateway = StripeGateway::new("sk_test_xxx");
//!
//! let session = gateway.create_checkout_session(CheckoutRequest {
//!     price_id: "price_xxx".into(),
//!     user_id: "user_1".into(),
//!     user_email: "user@example.com".into(),
//!     success_url: "https://brinde.ai/premium/success?session_id={CHECKOUT_SESSION_ID}".into(),
//!     cancel_url: "https://brinde.ai/premium".into(),
//! }).await?;
//!
//! // Redirect the payer to: session.url
//! ```

mod checkout;
mod config;
mod error;
mod validate;

pub use checkout::{CheckoutGateway, CheckoutRequest, CheckoutSession, StripeGateway};
pub use config::PaymentConfig;
pub use error::{PaymentError, Result};
pub use validate::{ValidationError, validate_checkout};
