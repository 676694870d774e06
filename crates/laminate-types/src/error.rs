// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaminateError {
    /// Non-positive or non-finite physical input, or a non-finite result.
    #[error("Domain error: {quantity} = {value} ({reason})")]
    Domain {
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Integer-valued input (ply count) outside its admissible range.
    #[error("Range error: {quantity} = {value} ({reason})")]
    Range {
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LaminateError {
    pub fn is_domain(&self) -> bool {
        matches!(self, LaminateError::Domain { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, LaminateError::Range { .. })
    }
}

pub type LaminateResult<T> = Result<T, LaminateError>;
