// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// g → kg
pub const GRAMS_PER_KG: f64 = 1000.0;

/// m → mm
pub const MM_PER_M: f64 = 1000.0;

/// mm² → m²
pub const MM2_PER_M2: f64 = 1.0e6;

// Reference defaults of the workshop calculator (carbon/epoxy panel).
pub const DEFAULT_WIDTH_MM: f64 = 200.0;
pub const DEFAULT_LENGTH_MM: f64 = 200.0;
pub const DEFAULT_FIBER_MASS_G: f64 = 100.0;
pub const DEFAULT_FIBER_VOLUME_FRACTION: f64 = 0.6;
/// Carbon fiber density [kg/m³].
pub const DEFAULT_FIBER_DENSITY_KGM3: f64 = 1780.0;
/// Epoxy matrix density [kg/m³].
pub const DEFAULT_MATRIX_DENSITY_KGM3: f64 = 1200.0;
pub const DEFAULT_GRAMMAGE_GM2: f64 = 300.0;
pub const DEFAULT_PLY_COUNT: u32 = 5;

/// V_f sweep bounds and resolution.
pub const DEFAULT_VF_SWEEP_MIN: f64 = 0.3;
pub const DEFAULT_VF_SWEEP_MAX: f64 = 0.7;
pub const DEFAULT_VF_SWEEP_SAMPLES: usize = 100;

/// Extra plies plotted past the current ply count.
pub const DEFAULT_PLY_LOOKAHEAD: u32 = 4;

/// Upper bound on points in any one sweep (V_f samples or plies plotted).
/// Larger requests are `InvalidSweep`, so a config or binding call cannot
/// allocate an unbounded curve.
pub const MAX_SWEEP_SAMPLES: usize = 100_000;

/// Y tick spacing suggested to plotting front-ends [mm].
pub const THICKNESS_TICK_STEP_MM: f64 = 0.5;

/// Most y ticks a hint will list. Tall curves get a coarser step instead.
pub const MAX_Y_TICKS: usize = 64;

/// Vertical offset of the highlighted point's label [mm].
pub const HIGHLIGHT_LABEL_OFFSET_MM: f64 = 0.2;

/// Advisory control range for a single input. Not enforced by the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendedRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RecommendedRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const WIDTH_RANGE_MM: RecommendedRange = RecommendedRange::new(10.0, 1000.0, 1.0);
pub const LENGTH_RANGE_MM: RecommendedRange = RecommendedRange::new(10.0, 1000.0, 1.0);
pub const FIBER_MASS_RANGE_G: RecommendedRange = RecommendedRange::new(10.0, 1000.0, 1.0);
pub const VF_RANGE: RecommendedRange = RecommendedRange::new(0.3, 0.7, 0.01);
pub const FIBER_DENSITY_RANGE_KGM3: RecommendedRange = RecommendedRange::new(1000.0, 2600.0, 1.0);
pub const MATRIX_DENSITY_RANGE_KGM3: RecommendedRange = RecommendedRange::new(800.0, 1500.0, 1.0);
pub const GRAMMAGE_RANGE_GM2: RecommendedRange = RecommendedRange::new(100.0, 2000.0, 1.0);
pub const PLY_COUNT_RANGE: RecommendedRange = RecommendedRange::new(1.0, 20.0, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_inside_recommended_ranges() {
        assert!(WIDTH_RANGE_MM.contains(DEFAULT_WIDTH_MM));
        assert!(LENGTH_RANGE_MM.contains(DEFAULT_LENGTH_MM));
        assert!(FIBER_MASS_RANGE_G.contains(DEFAULT_FIBER_MASS_G));
        assert!(VF_RANGE.contains(DEFAULT_FIBER_VOLUME_FRACTION));
        assert!(FIBER_DENSITY_RANGE_KGM3.contains(DEFAULT_FIBER_DENSITY_KGM3));
        assert!(MATRIX_DENSITY_RANGE_KGM3.contains(DEFAULT_MATRIX_DENSITY_KGM3));
        assert!(GRAMMAGE_RANGE_GM2.contains(DEFAULT_GRAMMAGE_GM2));
        assert!(PLY_COUNT_RANGE.contains(DEFAULT_PLY_COUNT as f64));
    }

    #[test]
    fn test_range_bounds_inclusive() {
        assert!(VF_RANGE.contains(0.3));
        assert!(VF_RANGE.contains(0.7));
        assert!(!VF_RANGE.contains(0.71));
        assert!(!VF_RANGE.contains(f64::NAN));
    }
}
