//! Brinde.AI HTTP Server
//!
//! Axum-based API fronting Stripe's hosted checkout for subscription
//! purchases.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brinde_payments::{PaymentConfig, StripeGateway};

use crate::handlers::{create_checkout, health_check, list_prices, subscription_status};
use crate::state::AppState;

fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & pricing
        .route("/health", get(health_check))
        .route("/api/checkout/prices", get(list_prices))
        // Payments
        .route("/api/checkout", post(create_checkout))
        .route("/api/subscription/status", post(subscription_status))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Stripe configuration is mandatory; refuse to start without it
    let config = Arc::new(PaymentConfig::from_env()?);
    let gateway = Arc::new(StripeGateway::from_config(&config));

    tracing::info!("✓ Stripe configured");

    let state = AppState { gateway, config };

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 brinde-server running on http://{}", addr);
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                  - Health check");
    tracing::info!("  GET  /api/checkout/prices     - Subscription price ids");
    tracing::info!("  POST /api/checkout            - Create Stripe checkout session");
    tracing::info!("  POST /api/subscription/status - Active-subscription lookup");
    tracing::info!("");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
