// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Sweep Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Parameter sweeps for plotting.
//!
//! One axis varies, every other input is held at its current value. The
//! highlighted point is evaluated at the exact current value with the same
//! formula as the numeric readout, never interpolated from the samples.

use ndarray::Array1;

use laminate_types::config::SweepConfig;
use laminate_types::constants::MAX_SWEEP_SAMPLES;
use laminate_types::error::{LaminateError, LaminateResult};
use laminate_types::guards::ensure_volume_fraction;
use laminate_types::records::{
    FabricSpec, FiberCharge, PanelGeometry, SweepAxis, SweepPoint, SweepResult,
};

use crate::formulas::{thickness_from_grammage, thickness_from_mass};

/// Evenly spaced V_f samples over `[vf_min, vf_max]`, both ends included.
pub fn vf_samples(config: &SweepConfig) -> LaminateResult<Array1<f64>> {
    config.validate()?;
    let mut xs = Array1::linspace(config.vf_min, config.vf_max, config.vf_samples);
    // Pin the end point; accumulated step rounding can land one ulp short.
    let last = config.vf_samples - 1;
    xs[last] = config.vf_max;
    Ok(xs)
}

/// Integer ply counts `1..=current + lookahead`.
pub fn ply_samples(current_ply_count: u32, lookahead: u32) -> LaminateResult<Vec<u32>> {
    let last = current_ply_count.checked_add(lookahead).ok_or_else(|| {
        LaminateError::InvalidSweep(format!(
            "ply sweep end {current_ply_count} + {lookahead} overflows"
        ))
    })?;
    if last < 1 {
        return Err(LaminateError::InvalidSweep(
            "ply sweep needs at least one ply".to_string(),
        ));
    }
    if last as usize > MAX_SWEEP_SAMPLES {
        return Err(LaminateError::InvalidSweep(format!(
            "ply sweep allows at most {MAX_SWEEP_SAMPLES} plies, got 1..={last}"
        )));
    }
    Ok((1..=last).collect())
}

/// Method 1 curve: thickness against V_f for a fixed charge and panel.
pub fn sweep_fiber_volume_fraction(
    charge: &FiberCharge,
    panel: &PanelGeometry,
    current_vf: f64,
    config: &SweepConfig,
) -> LaminateResult<SweepResult> {
    ensure_volume_fraction("fiber_volume_fraction", current_vf)?;
    let mass_kg = charge.fiber_mass_kg();
    let area_m2 = panel.area_m2();
    let density = charge.fiber_density_kgm3;

    let current = thickness_from_mass(mass_kg, area_m2, current_vf, density)?;
    let points = vf_samples(config)?
        .iter()
        .map(|&vf| {
            thickness_from_mass(mass_kg, area_m2, vf, density)
                .map(|thickness_mm| SweepPoint { x: vf, thickness_mm })
        })
        .collect::<LaminateResult<Vec<_>>>()?;

    tracing::debug!(
        samples = points.len(),
        vf = current_vf,
        thickness_mm = current,
        "fiber volume fraction sweep"
    );

    SweepResult::new(
        SweepAxis::FiberVolumeFraction,
        points,
        SweepPoint {
            x: current_vf,
            thickness_mm: current,
        },
    )
}

/// Method 2 curve: thickness against ply count for a fixed fabric.
pub fn sweep_ply_count(
    fabric: &FabricSpec,
    fiber_density_kgm3: f64,
    fiber_volume_fraction: f64,
    lookahead: u32,
) -> LaminateResult<SweepResult> {
    let thickness = |n: u32| {
        thickness_from_grammage(
            fabric.grammage_gm2,
            n,
            fiber_density_kgm3,
            fiber_volume_fraction,
        )
    };

    let current = thickness(fabric.ply_count)?;
    let points = ply_samples(fabric.ply_count, lookahead)?
        .into_iter()
        .map(|n| {
            thickness(n).map(|thickness_mm| SweepPoint {
                x: n as f64,
                thickness_mm,
            })
        })
        .collect::<LaminateResult<Vec<_>>>()?;

    tracing::debug!(
        samples = points.len(),
        plies = fabric.ply_count,
        thickness_mm = current,
        "ply count sweep"
    );

    SweepResult::new(
        SweepAxis::PlyCount,
        points,
        SweepPoint {
            x: fabric.ply_count as f64,
            thickness_mm: current,
        },
    )
}
