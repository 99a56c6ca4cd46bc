//! Angular normalization helpers.
//!
//! All calendrical quantities are degrees in the half-open range [0, 360).
//! Callers normalize once at the boundary; the classification functions
//! reject anything else instead of clamping.

use crate::error::CoreError;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // A tiny negative remainder rounds up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Check that an angle is finite and already in [0, 360).
pub(crate) fn ensure_normalized(deg: f64, what: &'static str) -> Result<(), CoreError> {
    if deg.is_finite() && (0.0..360.0).contains(&deg) {
        Ok(())
    } else {
        Err(CoreError::UnnormalizedAngle(what))
    }
}
