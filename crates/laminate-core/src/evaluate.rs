// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Evaluation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One full recompute for a single input change.
//!
//! Nothing is cached between calls: a front-end passes the current inputs,
//! gets back the readout, the curve and the plot hints, and redraws.

use serde::Serialize;

use laminate_types::config::{GrammageMethodConfig, LaminateConfig, MassMethodConfig, SweepConfig};
use laminate_types::error::LaminateResult;
use laminate_types::records::SweepResult;

use crate::formulas::{resin_mass, thickness_from_grammage, thickness_from_mass};
use crate::plot::PlotHints;
use crate::readout::Readout;
use crate::sweep::{sweep_fiber_volume_fraction, sweep_ply_count};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMethod {
    /// Fiber mass spread over a panel.
    Mass,
    /// Fabric grammage times ply count.
    Grammage,
}

impl CalculationMethod {
    pub fn title(&self) -> &'static str {
        match self {
            CalculationMethod::Mass => "Method 1: thickness from fiber mass",
            CalculationMethod::Grammage => "Method 2: thickness from fabric grammage",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub method: CalculationMethod,
    pub readout: Readout,
    pub sweep: SweepResult,
    pub hints: PlotHints,
}

pub fn evaluate_mass_method(
    config: &MassMethodConfig,
    sweep_config: &SweepConfig,
) -> LaminateResult<Evaluation> {
    let panel = config.panel()?;
    let charge = config.charge()?;
    let composition = config.composition()?;
    let vf = composition.fiber_volume_fraction;

    let thickness_mm = thickness_from_mass(
        charge.fiber_mass_kg(),
        panel.area_m2(),
        vf,
        charge.fiber_density_kgm3,
    )?;
    let resin_mass_g = resin_mass(
        charge.fiber_mass_kg(),
        vf,
        charge.fiber_density_kgm3,
        composition.matrix_density_kgm3,
    )?;
    let sweep = sweep_fiber_volume_fraction(&charge, &panel, vf, sweep_config)?;
    let hints = PlotHints::for_sweep(&sweep);

    tracing::debug!(
        area_m2 = panel.area_m2(),
        vf,
        thickness_mm,
        resin_mass_g,
        "mass method evaluated"
    );

    Ok(Evaluation {
        method: CalculationMethod::Mass,
        readout: Readout {
            thickness_mm,
            resin_mass_g: Some(resin_mass_g),
        },
        sweep,
        hints,
    })
}

pub fn evaluate_grammage_method(
    config: &GrammageMethodConfig,
    sweep_config: &SweepConfig,
) -> LaminateResult<Evaluation> {
    let fabric = config.fabric()?;
    let thickness_mm = thickness_from_grammage(
        fabric.grammage_gm2,
        fabric.ply_count,
        config.fiber_density_kgm3,
        config.fiber_volume_fraction,
    )?;
    let sweep = sweep_ply_count(
        &fabric,
        config.fiber_density_kgm3,
        config.fiber_volume_fraction,
        sweep_config.ply_lookahead,
    )?;
    let hints = PlotHints::for_sweep(&sweep);

    tracing::debug!(
        plies = fabric.ply_count,
        grammage_gm2 = fabric.grammage_gm2,
        thickness_mm,
        "grammage method evaluated"
    );

    Ok(Evaluation {
        method: CalculationMethod::Grammage,
        readout: Readout {
            thickness_mm,
            resin_mass_g: None,
        },
        sweep,
        hints,
    })
}

/// Evaluate every method section present in `config`, mass method first.
pub fn evaluate_config(config: &LaminateConfig) -> LaminateResult<Vec<Evaluation>> {
    config.validate()?;
    let mut out = Vec::with_capacity(2);
    if let Some(mass) = &config.mass_method {
        out.push(evaluate_mass_method(mass, &config.sweep)?);
    }
    if let Some(grammage) = &config.grammage_method {
        out.push(evaluate_grammage_method(grammage, &config.sweep)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use laminate_types::error::LaminateError;

    #[test]
    fn test_mass_method_reference() {
        let eval =
            evaluate_mass_method(&MassMethodConfig::default(), &SweepConfig::default()).unwrap();
        assert_eq!(eval.method, CalculationMethod::Mass);
        assert_eq!(eval.readout.thickness_text(), "2.34 mm");
        assert_eq!(eval.readout.resin_text().as_deref(), Some("44.94 g"));
        assert_eq!(
            eval.sweep.highlight().thickness_mm.to_bits(),
            eval.readout.thickness_mm.to_bits()
        );
        assert_eq!(eval.hints.highlight_label, eval.readout.thickness_text());
    }

    #[test]
    fn test_grammage_method_reference() {
        let eval =
            evaluate_grammage_method(&GrammageMethodConfig::default(), &SweepConfig::default())
                .unwrap();
        assert_eq!(eval.method, CalculationMethod::Grammage);
        assert_eq!(eval.readout.thickness_text(), "1.40 mm");
        assert!(eval.readout.resin_mass_g.is_none());
        assert_eq!(eval.sweep.len(), 9);
    }

    #[test]
    fn test_invalid_panel_surfaces_domain_error() {
        let cfg = MassMethodConfig {
            length_mm: 0.0,
            ..MassMethodConfig::default()
        };
        let err = evaluate_mass_method(&cfg, &SweepConfig::default()).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_zero_plies_surfaces_range_error() {
        let cfg = GrammageMethodConfig {
            ply_count: 0,
            ..GrammageMethodConfig::default()
        };
        let err = evaluate_grammage_method(&cfg, &SweepConfig::default()).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn test_evaluate_config_order() {
        let evals = evaluate_config(&LaminateConfig::default()).unwrap();
        assert_eq!(evals.len(), 2);
        assert_eq!(evals[0].method, CalculationMethod::Mass);
        assert_eq!(evals[1].method, CalculationMethod::Grammage);
    }

    #[test]
    fn test_evaluate_config_rejects_empty() {
        let cfg = LaminateConfig {
            mass_method: None,
            grammage_method: None,
            ..LaminateConfig::default()
        };
        assert!(matches!(evaluate_config(&cfg), Err(LaminateError::ConfigError(_))));
    }

    #[test]
    fn test_evaluation_serializes() {
        let eval =
            evaluate_mass_method(&MassMethodConfig::default(), &SweepConfig::default()).unwrap();
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["method"], "mass");
        assert_eq!(json["sweep"]["axis"], "fiber_volume_fraction");
        assert_eq!(json["sweep"]["points"].as_array().map(|a| a.len()), Some(100));
    }
}
