// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Input Guards
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Precondition checks shared by the record constructors and the formulas.
//!
//! The calculator rejects non-physical input up front instead of letting a
//! division produce `inf`, `NaN` or a negative thickness.

use crate::error::{LaminateError, LaminateResult};

/// Require `value` to be finite and strictly positive.
pub fn ensure_positive(quantity: &'static str, value: f64) -> LaminateResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LaminateError::Domain {
            quantity,
            value,
            reason: "must be finite and > 0",
        });
    }
    Ok(value)
}

/// Require a volume fraction strictly inside (0, 1).
pub fn ensure_volume_fraction(quantity: &'static str, value: f64) -> LaminateResult<f64> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(LaminateError::Domain {
            quantity,
            value,
            reason: "must lie strictly between 0 and 1",
        });
    }
    Ok(value)
}

/// Reject a computed quantity that overflowed or went non-positive.
pub fn ensure_finite_result(quantity: &'static str, value: f64) -> LaminateResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(LaminateError::Domain {
            quantity,
            value,
            reason: "result became non-finite or non-positive",
        });
    }
    Ok(value)
}

pub fn ensure_ply_count(ply_count: u32) -> LaminateResult<u32> {
    if ply_count < 1 {
        return Err(LaminateError::Range {
            quantity: "ply_count",
            value: ply_count as f64,
            reason: "at least one ply is required",
        });
    }
    Ok(ply_count)
}

/// Convert a ply count read from a continuous control.
///
/// Only exact integers are accepted; the value is never rounded or truncated.
pub fn ply_count_from_f64(value: f64) -> LaminateResult<u32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(LaminateError::Range {
            quantity: "ply_count",
            value,
            reason: "must be a whole number",
        });
    }
    if value < 1.0 || value > u32::MAX as f64 {
        return Err(LaminateError::Range {
            quantity: "ply_count",
            value,
            reason: "at least one ply is required",
        });
    }
    Ok(value as u32)
}
