//! Typed error handling for the back-office core
//!
//! Everything at this scope is locally recoverable: failures surface as a
//! view-level message or a redirect, never as a process-ending error.
//! Update/delete against a missing id is deliberately *not* an error — those
//! operations are benign no-ops, matching idempotent-delete semantics.

use thiserror::Error;
use validator::ValidationErrors;

/// Authentication failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong credentials; reported as a user-visible message.
    /// Each attempt is independent — there is no retry or backoff.
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// A protected view was reached without a signed-in user
    #[error("not signed in")]
    SignedOut,
}

/// Form-input rejections, raised before a collection store is touched
#[derive(Debug, Error)]
pub enum FormError {
    /// A numeric form field did not parse, or parsed to a negative count
    #[error("'{field}' must be a non-negative number")]
    NotANumber { field: &'static str },

    /// Field-level validation failures (empty name, negative price, ...)
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Form(#[from] FormError),

    /// Session store failures surfacing at the app boundary
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
