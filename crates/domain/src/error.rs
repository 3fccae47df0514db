//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`SvcOrderError`]
//! via `From`. Adapters box their errors into [`SvcOrderError::Storage`].

/// Base error for every fallible operation crossing a port boundary.
#[derive(Debug, thiserror::Error)]
pub enum SvcOrderError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("amount must be finite and non-negative, got {0}")]
    InvalidAmount(f64),

    #[error("invalid identifier {value:?}")]
    InvalidId { value: String },

    /// Stored contents disagree with the seed fixtures.
    #[error("{collection} does not match seed data: {reason}")]
    SeedMismatch {
        collection: &'static str,
        reason: String,
    },
}

/// A lookup by id found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Check that a monetary amount is usable.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAmount`] for negative, `NaN` or infinite values.
pub fn check_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount(amount))
    }
}
