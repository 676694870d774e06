// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Formulas
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form laminate thickness and resin mass.
//!
//! Rule of mixtures on volumes:
//! - `V_fiber = m_f / rho_f`
//! - `V_total = V_fiber / V_f`
//! - `V_resin = V_total * (1 - V_f)`
//!
//! All inputs are validated; a non-physical input is a `Domain` error, a
//! ply count below one is a `Range` error.

use laminate_types::constants::{GRAMS_PER_KG, MM_PER_M};
use laminate_types::error::LaminateResult;
use laminate_types::guards::{
    ensure_finite_result, ensure_ply_count, ensure_positive, ensure_volume_fraction,
};

/// Fiber and total volume of a laminate built from a known fiber mass.
///
/// Shared by the thickness and resin mass calculations so both derive from
/// the same `V_total`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeVolume {
    pub fiber_volume_fraction: f64,
    /// [m³]
    pub fiber_volume_m3: f64,
    /// [m³]
    pub total_volume_m3: f64,
}

impl CompositeVolume {
    pub fn from_fiber_mass(
        fiber_mass_kg: f64,
        fiber_density_kgm3: f64,
        fiber_volume_fraction: f64,
    ) -> LaminateResult<Self> {
        ensure_positive("fiber_mass_kg", fiber_mass_kg)?;
        ensure_positive("fiber_density_kgm3", fiber_density_kgm3)?;
        ensure_volume_fraction("fiber_volume_fraction", fiber_volume_fraction)?;

        let fiber_volume_m3 =
            ensure_finite_result("fiber_volume_m3", fiber_mass_kg / fiber_density_kgm3)?;
        let total_volume_m3 =
            ensure_finite_result("total_volume_m3", fiber_volume_m3 / fiber_volume_fraction)?;

        Ok(CompositeVolume {
            fiber_volume_fraction,
            fiber_volume_m3,
            total_volume_m3,
        })
    }

    /// Matrix volume [m³].
    pub fn resin_volume_m3(&self) -> f64 {
        self.total_volume_m3 * (1.0 - self.fiber_volume_fraction)
    }
}

/// Cured thickness [mm] of `fiber_mass_kg` spread over `area_m2`.
pub fn thickness_from_mass(
    fiber_mass_kg: f64,
    area_m2: f64,
    fiber_volume_fraction: f64,
    fiber_density_kgm3: f64,
) -> LaminateResult<f64> {
    ensure_positive("area_m2", area_m2)?;
    let volume =
        CompositeVolume::from_fiber_mass(fiber_mass_kg, fiber_density_kgm3, fiber_volume_fraction)?;
    let thickness_m = volume.total_volume_m3 / area_m2;
    ensure_finite_result("thickness_mm", thickness_m * MM_PER_M)
}

/// Matrix mass [g] needed to reach `fiber_volume_fraction`.
pub fn resin_mass(
    fiber_mass_kg: f64,
    fiber_volume_fraction: f64,
    fiber_density_kgm3: f64,
    matrix_density_kgm3: f64,
) -> LaminateResult<f64> {
    ensure_positive("matrix_density_kgm3", matrix_density_kgm3)?;
    let volume =
        CompositeVolume::from_fiber_mass(fiber_mass_kg, fiber_density_kgm3, fiber_volume_fraction)?;
    let resin_kg = volume.resin_volume_m3() * matrix_density_kgm3;
    ensure_finite_result("resin_mass_g", resin_kg * GRAMS_PER_KG)
}

/// Cured thickness [mm] of `ply_count` identical plies of areal weight
/// `grammage_gm2`.
///
/// `t = (w/1000 * n) / (rho_f * V_f)`; every ply shares the same V_f.
pub fn thickness_from_grammage(
    grammage_gm2: f64,
    ply_count: u32,
    fiber_density_kgm3: f64,
    fiber_volume_fraction: f64,
) -> LaminateResult<f64> {
    ensure_positive("grammage_gm2", grammage_gm2)?;
    ensure_ply_count(ply_count)?;
    ensure_positive("fiber_density_kgm3", fiber_density_kgm3)?;
    ensure_volume_fraction("fiber_volume_fraction", fiber_volume_fraction)?;

    let grammage_kgm2 = grammage_gm2 / GRAMS_PER_KG;
    let volume_per_m2 =
        (grammage_kgm2 * ply_count as f64) / (fiber_density_kgm3 * fiber_volume_fraction);
    ensure_finite_result("thickness_mm", volume_per_m2 * MM_PER_M)
}

#[cfg(test)]
mod tests {
    use super::*;
    use laminate_types::error::LaminateError;

    #[test]
    fn test_thickness_reference_panel() {
        // 100 g carbon over 200x200 mm at V_f = 0.6
        let t = thickness_from_mass(0.1, 0.04, 0.6, 1780.0).unwrap();
        assert!((t - 2.3408).abs() < 1e-3, "Expected ~2.34 mm, got {t}");
        assert!((t - 2.337).abs() < 1e-2);
    }

    #[test]
    fn test_resin_mass_reference_panel() {
        // V_total = 0.1/1780/0.6 m³, 40 % of it epoxy at 1200 kg/m³
        let m = resin_mass(0.1, 0.6, 1780.0, 1200.0).unwrap();
        assert!((m - 44.944).abs() < 1e-2, "Expected ~44.94 g, got {m}");
    }

    #[test]
    fn test_grammage_reference_stack() {
        let t = thickness_from_grammage(300.0, 5, 1780.0, 0.6).unwrap();
        assert!((t - 1.4045).abs() < 1e-3, "Expected ~1.40 mm, got {t}");
    }

    #[test]
    fn test_volume_model_consistent() {
        let v = CompositeVolume::from_fiber_mass(0.1, 1780.0, 0.6).unwrap();
        let recombined = v.fiber_volume_m3 + v.resin_volume_m3();
        assert!((recombined - v.total_volume_m3).abs() < 1e-18);
    }

    #[test]
    fn test_zero_vf_is_domain_error() {
        let err = thickness_from_mass(0.1, 0.04, 0.0, 1780.0).unwrap_err();
        assert!(err.is_domain());
        assert!(resin_mass(0.1, 0.0, 1780.0, 1200.0).unwrap_err().is_domain());
        assert!(thickness_from_grammage(300.0, 5, 1780.0, 0.0).unwrap_err().is_domain());
    }

    #[test]
    fn test_vanishing_vf_does_not_overflow_silently() {
        let err = thickness_from_mass(0.1, 0.04, f64::MIN_POSITIVE * 1e-10, 1780.0).unwrap_err();
        match err {
            LaminateError::Domain { quantity, .. } => assert_eq!(quantity, "total_volume_m3"),
            other => panic!("Expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_or_tiny_density_is_domain_error() {
        assert!(thickness_from_mass(0.1, 0.04, 0.6, 0.0).unwrap_err().is_domain());
        assert!(thickness_from_mass(0.1, 0.04, 0.6, 5e-324).unwrap_err().is_domain());
        assert!(thickness_from_grammage(300.0, 5, -1780.0, 0.6).unwrap_err().is_domain());
        assert!(resin_mass(0.1, 0.6, 1780.0, 0.0).unwrap_err().is_domain());
    }

    #[test]
    fn test_zero_area_is_domain_error() {
        let err = thickness_from_mass(0.1, 0.0, 0.6, 1780.0).unwrap_err();
        assert!(err.to_string().contains("area_m2"));
    }

    #[test]
    fn test_vf_of_one_rejected() {
        assert!(thickness_from_mass(0.1, 0.04, 1.0, 1780.0).is_err());
        assert!(resin_mass(0.1, 1.0, 1780.0, 1200.0).is_err());
    }

    #[test]
    fn test_zero_plies_is_range_error() {
        let err = thickness_from_grammage(300.0, 0, 1780.0, 0.6).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_nan_inputs_rejected() {
        assert!(thickness_from_mass(f64::NAN, 0.04, 0.6, 1780.0).is_err());
        assert!(thickness_from_grammage(f64::NAN, 5, 1780.0, 0.6).is_err());
    }

    #[test]
    fn test_repeat_calls_bit_identical() {
        let a = thickness_from_mass(0.137, 0.0613, 0.47, 2540.0).unwrap();
        let b = thickness_from_mass(0.137, 0.0613, 0.47, 2540.0).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
