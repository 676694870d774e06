// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Fiber Materials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reinforcement presets. Selecting one only supplies a default fiber density.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use laminate_types::error::LaminateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FiberMaterial {
    Carbon,
    EGlass,
    Aramid,
    Basalt,
    Flax,
}

impl FiberMaterial {
    pub const ALL: [FiberMaterial; 5] = [
        FiberMaterial::Carbon,
        FiberMaterial::EGlass,
        FiberMaterial::Aramid,
        FiberMaterial::Basalt,
        FiberMaterial::Flax,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FiberMaterial::Carbon => "carbon",
            FiberMaterial::EGlass => "e-glass",
            FiberMaterial::Aramid => "aramid",
            FiberMaterial::Basalt => "basalt",
            FiberMaterial::Flax => "flax",
        }
    }

    /// Typical fiber density [kg/m³].
    pub fn density_kgm3(&self) -> f64 {
        match self {
            FiberMaterial::Carbon => 1780.0,
            FiberMaterial::EGlass => 2540.0,
            FiberMaterial::Aramid => 1440.0,
            FiberMaterial::Basalt => 2650.0,
            FiberMaterial::Flax => 1500.0,
        }
    }
}

impl fmt::Display for FiberMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FiberMaterial {
    type Err = LaminateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        let key = match key.as_str() {
            "glass" | "eglass" => "e-glass",
            "kevlar" => "aramid",
            other => other,
        };
        FiberMaterial::ALL
            .iter()
            .copied()
            .find(|m| m.name() == key)
            .ok_or_else(|| {
                let available: Vec<&str> = FiberMaterial::ALL.iter().map(|m| m.name()).collect();
                LaminateError::ConfigError(format!(
                    "Unknown fiber material: '{s}'. Available: {}",
                    available.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carbon_matches_reference_default() {
        assert_eq!(
            FiberMaterial::Carbon.density_kgm3(),
            laminate_types::constants::DEFAULT_FIBER_DENSITY_KGM3
        );
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("carbon".parse::<FiberMaterial>().unwrap(), FiberMaterial::Carbon);
        assert_eq!("E_Glass".parse::<FiberMaterial>().unwrap(), FiberMaterial::EGlass);
        assert_eq!("glass".parse::<FiberMaterial>().unwrap(), FiberMaterial::EGlass);
        assert_eq!("Kevlar".parse::<FiberMaterial>().unwrap(), FiberMaterial::Aramid);
        for m in FiberMaterial::ALL {
            assert_eq!(m.name().parse::<FiberMaterial>().unwrap(), m);
        }
    }

    #[test]
    fn test_unknown_material_lists_available() {
        let err = "unobtainium".parse::<FiberMaterial>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unobtainium"));
        assert!(msg.contains("basalt"));
    }
}
