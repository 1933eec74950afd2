//! Checkout Input Validation
//!
//! Pure field checks for the checkout payload, run before anything is
//! sent to Stripe.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

// local@domain.tld with no embedded whitespace. Intentionally loose;
// Stripe re-validates the address on its own page.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern"));

/// Why a checkout payload was rejected
///
/// The `Display` text is the exact message returned to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or empty
    #[error("incomplete data")]
    MissingField,

    /// The email does not look like an address
    #[error("invalid email")]
    InvalidEmail,
}

/// Check the three required checkout fields.
///
/// Absent and empty are treated the same, so callers can deserialize the
/// fields as `Option<String>` and pass them straight through.
pub fn validate_checkout(
    price_id: Option<&str>,
    user_id: Option<&str>,
    user_email: Option<&str>,
) -> Result<(), ValidationError> {
    let email = match (non_empty(price_id), non_empty(user_id), non_empty(user_email)) {
        (Some(_), Some(_), Some(email)) => email,
        _ => return Err(ValidationError::MissingField),
    };

    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}
