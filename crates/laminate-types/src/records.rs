// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Records
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Immutable value records describing one laminate evaluation.
//!
//! Every record is rebuilt from the current inputs on each recompute;
//! nothing here carries identity or history.

use serde::{Deserialize, Serialize};

use crate::constants::{GRAMS_PER_KG, MM2_PER_M2};
use crate::error::{LaminateError, LaminateResult};
use crate::guards::{ensure_ply_count, ensure_positive, ensure_volume_fraction};

/// Rectangular panel footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    pub width_mm: f64,
    pub length_mm: f64,
}

impl PanelGeometry {
    pub fn new(width_mm: f64, length_mm: f64) -> LaminateResult<Self> {
        ensure_positive("width_mm", width_mm)?;
        ensure_positive("length_mm", length_mm)?;
        Ok(PanelGeometry {
            width_mm,
            length_mm,
        })
    }

    /// Panel area [m²].
    pub fn area_m2(&self) -> f64 {
        self.width_mm * self.length_mm / MM2_PER_M2
    }
}

/// Dry reinforcement placed in the mould.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiberCharge {
    pub fiber_mass_g: f64,
    pub fiber_density_kgm3: f64,
}

impl FiberCharge {
    pub fn new(fiber_mass_g: f64, fiber_density_kgm3: f64) -> LaminateResult<Self> {
        ensure_positive("fiber_mass_g", fiber_mass_g)?;
        ensure_positive("fiber_density_kgm3", fiber_density_kgm3)?;
        Ok(FiberCharge {
            fiber_mass_g,
            fiber_density_kgm3,
        })
    }

    pub fn fiber_mass_kg(&self) -> f64 {
        self.fiber_mass_g / GRAMS_PER_KG
    }
}

/// Fiber/matrix proportions of the cured laminate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaminateComposition {
    pub fiber_volume_fraction: f64,
    pub matrix_density_kgm3: f64,
}

impl LaminateComposition {
    pub fn new(fiber_volume_fraction: f64, matrix_density_kgm3: f64) -> LaminateResult<Self> {
        ensure_volume_fraction("fiber_volume_fraction", fiber_volume_fraction)?;
        ensure_positive("matrix_density_kgm3", matrix_density_kgm3)?;
        Ok(LaminateComposition {
            fiber_volume_fraction,
            matrix_density_kgm3,
        })
    }
}

/// Stack of identical fabric plies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabricSpec {
    pub grammage_gm2: f64,
    pub ply_count: u32,
}

impl FabricSpec {
    pub fn new(grammage_gm2: f64, ply_count: u32) -> LaminateResult<Self> {
        ensure_positive("grammage_gm2", grammage_gm2)?;
        ensure_ply_count(ply_count)?;
        Ok(FabricSpec {
            grammage_gm2,
            ply_count,
        })
    }
}

/// Independent variable of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepAxis {
    FiberVolumeFraction,
    PlyCount,
}

impl SweepAxis {
    pub fn label(&self) -> &'static str {
        match self {
            SweepAxis::FiberVolumeFraction => "Fiber volume fraction (V_f)",
            SweepAxis::PlyCount => "Ply count",
        }
    }
}

/// One (axis value, thickness) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub x: f64,
    pub thickness_mm: f64,
}

/// Thickness curve plus the highlighted current point.
///
/// Samples are in strictly increasing `x`. Fields are private so a result
/// cannot be altered after the sweep produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    axis: SweepAxis,
    points: Vec<SweepPoint>,
    highlight: SweepPoint,
}

impl SweepResult {
    pub fn new(axis: SweepAxis, points: Vec<SweepPoint>, highlight: SweepPoint) -> LaminateResult<Self> {
        if points.is_empty() {
            return Err(LaminateError::InvalidSweep(
                "sweep produced no samples".to_string(),
            ));
        }
        if points.windows(2).any(|w| w[1].x <= w[0].x) {
            return Err(LaminateError::InvalidSweep(
                "sweep samples must be in strictly increasing axis order".to_string(),
            ));
        }
        Ok(SweepResult {
            axis,
            points,
            highlight,
        })
    }

    pub fn axis(&self) -> SweepAxis {
        self.axis
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    pub fn highlight(&self) -> SweepPoint {
        self.highlight
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn thicknesses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.thickness_mm).collect()
    }

    /// Largest thickness over the samples and the highlighted point.
    pub fn max_thickness_mm(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.thickness_mm)
            .fold(self.highlight.thickness_mm, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_area_200x200() {
        let panel = PanelGeometry::new(200.0, 200.0).unwrap();
        assert!((panel.area_m2() - 0.04).abs() < 1e-15);
    }

    #[test]
    fn test_panel_rejects_zero_width() {
        let err = PanelGeometry::new(0.0, 200.0).unwrap_err();
        assert!(err.is_domain());
        assert!(err.to_string().contains("width_mm"));
    }

    #[test]
    fn test_fiber_charge_converts_grams() {
        let charge = FiberCharge::new(100.0, 1780.0).unwrap();
        assert!((charge.fiber_mass_kg() - 0.1).abs() < 1e-15);
        assert!(FiberCharge::new(100.0, 0.0).is_err());
        assert!(FiberCharge::new(-5.0, 1780.0).is_err());
    }

    #[test]
    fn test_composition_vf_bounds() {
        assert!(LaminateComposition::new(0.6, 1200.0).is_ok());
        assert!(LaminateComposition::new(0.0, 1200.0).is_err());
        assert!(LaminateComposition::new(1.0, 1200.0).is_err());
        assert!(LaminateComposition::new(0.6, -1.0).is_err());
    }

    #[test]
    fn test_fabric_requires_one_ply() {
        assert!(FabricSpec::new(300.0, 5).is_ok());
        assert!(FabricSpec::new(300.0, 0).unwrap_err().is_range());
        assert!(FabricSpec::new(0.0, 5).unwrap_err().is_domain());
    }

    #[test]
    fn test_sweep_result_rejects_unordered_samples() {
        let pts = vec![
            SweepPoint { x: 2.0, thickness_mm: 1.0 },
            SweepPoint { x: 1.0, thickness_mm: 0.5 },
        ];
        let hl = SweepPoint { x: 1.0, thickness_mm: 0.5 };
        assert!(SweepResult::new(SweepAxis::PlyCount, pts, hl).is_err());
        assert!(SweepResult::new(SweepAxis::PlyCount, Vec::new(), hl).is_err());
    }

    #[test]
    fn test_sweep_result_max_includes_highlight() {
        let pts = vec![
            SweepPoint { x: 1.0, thickness_mm: 0.3 },
            SweepPoint { x: 2.0, thickness_mm: 0.6 },
        ];
        let hl = SweepPoint { x: 3.5, thickness_mm: 1.05 };
        let sweep = SweepResult::new(SweepAxis::PlyCount, pts, hl).unwrap();
        assert_eq!(sweep.len(), 2);
        assert_eq!(sweep.xs(), vec![1.0, 2.0]);
        assert!((sweep.max_thickness_mm() - 1.05).abs() < 1e-15);
    }
}
