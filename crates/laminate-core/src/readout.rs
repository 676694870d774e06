// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Readout
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Numeric display values. Full precision is kept; only the text is rounded.

use std::fmt;

use serde::Serialize;

/// Decimal places shown to the user.
pub const DISPLAY_DECIMALS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Readout {
    pub thickness_mm: f64,
    /// Only the mass method derives a resin mass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resin_mass_g: Option<f64>,
}

impl Readout {
    pub fn thickness_text(&self) -> String {
        format_thickness(self.thickness_mm)
    }

    pub fn resin_text(&self) -> Option<String> {
        self.resin_mass_g.map(format_mass)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thickness {}", self.thickness_text())?;
        if let Some(resin) = self.resin_text() {
            write!(f, ", resin {resin}")?;
        }
        Ok(())
    }
}

pub fn format_thickness(thickness_mm: f64) -> String {
    format!("{:.*} mm", DISPLAY_DECIMALS, thickness_mm)
}

pub fn format_mass(mass_g: f64) -> String {
    format!("{:.*} g", DISPLAY_DECIMALS, mass_g)
}
