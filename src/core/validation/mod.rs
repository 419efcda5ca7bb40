//! Form-input parsing and validation
//!
//! Numeric form fields arrive from the rendering collaborator as raw
//! strings. They are trimmed and parsed here, and draft values are checked
//! with their `validator` derives, before any collection store is touched —
//! the stores themselves assume pre-validated input.

use crate::core::error::FormError;
use validator::Validate;

/// Parse a money amount from a raw form string.
///
/// Accepts any finite non-negative number; everything else is a
/// [`FormError::NotANumber`] naming the offending field.
pub fn parse_price(field: &'static str, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or(FormError::NotANumber { field })
}

/// Parse a non-negative count (stock, quantity) from a raw form string
pub fn parse_count(field: &'static str, raw: &str) -> Result<u32, FormError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| FormError::NotANumber { field })
}

/// Run a draft's derived validators, mapping failures into [`FormError`]
pub fn check<T: Validate>(draft: &T) -> Result<(), FormError> {
    draft.validate().map_err(FormError::from)
}
