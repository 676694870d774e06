// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{LaminateError, LaminateResult};
use crate::records::{FabricSpec, FiberCharge, LaminateComposition, PanelGeometry};

/// Top-level calculator input.
/// Either method section may be omitted; at least one must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaminateConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_method: Option<MassMethodConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammage_method: Option<GrammageMethodConfig>,
    #[serde(default)]
    pub sweep: SweepConfig,
}

/// Method 1: thickness from fiber mass over a rectangular panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassMethodConfig {
    #[serde(default = "default_width")]
    pub width_mm: f64,
    #[serde(default = "default_length")]
    pub length_mm: f64,
    #[serde(default = "default_fiber_mass")]
    pub fiber_mass_g: f64,
    #[serde(rename = "Vf", default = "default_vf")]
    pub fiber_volume_fraction: f64,
    #[serde(default = "default_fiber_density")]
    pub fiber_density_kgm3: f64,
    #[serde(default = "default_matrix_density")]
    pub matrix_density_kgm3: f64,
}

/// Method 2: thickness from fabric grammage and ply count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrammageMethodConfig {
    #[serde(default = "default_grammage")]
    pub grammage_gm2: f64,
    #[serde(default = "default_ply_count")]
    pub ply_count: u32,
    #[serde(default = "default_fiber_density")]
    pub fiber_density_kgm3: f64,
    #[serde(rename = "Vf", default = "default_vf")]
    pub fiber_volume_fraction: f64,
}

/// Sampling of the plotted curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_vf_min")]
    pub vf_min: f64,
    #[serde(default = "default_vf_max")]
    pub vf_max: f64,
    #[serde(default = "default_vf_samples")]
    pub vf_samples: usize,
    #[serde(default = "default_ply_lookahead")]
    pub ply_lookahead: u32,
}

fn default_name() -> String {
    "laminate".to_string()
}
fn default_width() -> f64 {
    DEFAULT_WIDTH_MM
}
fn default_length() -> f64 {
    DEFAULT_LENGTH_MM
}
fn default_fiber_mass() -> f64 {
    DEFAULT_FIBER_MASS_G
}
fn default_vf() -> f64 {
    DEFAULT_FIBER_VOLUME_FRACTION
}
fn default_fiber_density() -> f64 {
    DEFAULT_FIBER_DENSITY_KGM3
}
fn default_matrix_density() -> f64 {
    DEFAULT_MATRIX_DENSITY_KGM3
}
fn default_grammage() -> f64 {
    DEFAULT_GRAMMAGE_GM2
}
fn default_ply_count() -> u32 {
    DEFAULT_PLY_COUNT
}
fn default_vf_min() -> f64 {
    DEFAULT_VF_SWEEP_MIN
}
fn default_vf_max() -> f64 {
    DEFAULT_VF_SWEEP_MAX
}
fn default_vf_samples() -> usize {
    DEFAULT_VF_SWEEP_SAMPLES
}
fn default_ply_lookahead() -> u32 {
    DEFAULT_PLY_LOOKAHEAD
}

impl Default for MassMethodConfig {
    fn default() -> Self {
        MassMethodConfig {
            width_mm: default_width(),
            length_mm: default_length(),
            fiber_mass_g: default_fiber_mass(),
            fiber_volume_fraction: default_vf(),
            fiber_density_kgm3: default_fiber_density(),
            matrix_density_kgm3: default_matrix_density(),
        }
    }
}

impl Default for GrammageMethodConfig {
    fn default() -> Self {
        GrammageMethodConfig {
            grammage_gm2: default_grammage(),
            ply_count: default_ply_count(),
            fiber_density_kgm3: default_fiber_density(),
            fiber_volume_fraction: default_vf(),
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            vf_min: default_vf_min(),
            vf_max: default_vf_max(),
            vf_samples: default_vf_samples(),
            ply_lookahead: default_ply_lookahead(),
        }
    }
}

impl Default for LaminateConfig {
    fn default() -> Self {
        LaminateConfig {
            name: default_name(),
            mass_method: Some(MassMethodConfig::default()),
            grammage_method: Some(GrammageMethodConfig::default()),
            sweep: SweepConfig::default(),
        }
    }
}

impl MassMethodConfig {
    pub fn panel(&self) -> LaminateResult<PanelGeometry> {
        PanelGeometry::new(self.width_mm, self.length_mm)
    }

    pub fn charge(&self) -> LaminateResult<FiberCharge> {
        FiberCharge::new(self.fiber_mass_g, self.fiber_density_kgm3)
    }

    pub fn composition(&self) -> LaminateResult<LaminateComposition> {
        LaminateComposition::new(self.fiber_volume_fraction, self.matrix_density_kgm3)
    }

    fn advisories(&self, out: &mut Vec<Advisory>) {
        check(out, "mass_method.width_mm", self.width_mm, WIDTH_RANGE_MM);
        check(out, "mass_method.length_mm", self.length_mm, LENGTH_RANGE_MM);
        check(out, "mass_method.fiber_mass_g", self.fiber_mass_g, FIBER_MASS_RANGE_G);
        check(out, "mass_method.Vf", self.fiber_volume_fraction, VF_RANGE);
        check(
            out,
            "mass_method.fiber_density_kgm3",
            self.fiber_density_kgm3,
            FIBER_DENSITY_RANGE_KGM3,
        );
        check(
            out,
            "mass_method.matrix_density_kgm3",
            self.matrix_density_kgm3,
            MATRIX_DENSITY_RANGE_KGM3,
        );
    }
}

impl GrammageMethodConfig {
    pub fn fabric(&self) -> LaminateResult<FabricSpec> {
        FabricSpec::new(self.grammage_gm2, self.ply_count)
    }

    fn advisories(&self, out: &mut Vec<Advisory>) {
        check(out, "grammage_method.grammage_gm2", self.grammage_gm2, GRAMMAGE_RANGE_GM2);
        check(out, "grammage_method.ply_count", self.ply_count as f64, PLY_COUNT_RANGE);
        check(
            out,
            "grammage_method.fiber_density_kgm3",
            self.fiber_density_kgm3,
            FIBER_DENSITY_RANGE_KGM3,
        );
        check(out, "grammage_method.Vf", self.fiber_volume_fraction, VF_RANGE);
    }
}

impl SweepConfig {
    pub fn validate(&self) -> LaminateResult<()> {
        if !self.vf_min.is_finite() || !self.vf_max.is_finite() {
            return Err(LaminateError::InvalidSweep(
                "V_f sweep bounds must be finite".to_string(),
            ));
        }
        if self.vf_min <= 0.0 || self.vf_max >= 1.0 || self.vf_min >= self.vf_max {
            return Err(LaminateError::InvalidSweep(format!(
                "V_f sweep range must satisfy 0 < min < max < 1, got [{}, {}]",
                self.vf_min, self.vf_max
            )));
        }
        if self.vf_samples < 2 {
            return Err(LaminateError::InvalidSweep(format!(
                "V_f sweep needs at least 2 samples, got {}",
                self.vf_samples
            )));
        }
        if self.vf_samples > MAX_SWEEP_SAMPLES {
            return Err(LaminateError::InvalidSweep(format!(
                "V_f sweep allows at most {MAX_SWEEP_SAMPLES} samples, got {}",
                self.vf_samples
            )));
        }
        Ok(())
    }
}

impl LaminateConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> LaminateResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> LaminateResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks only; physical checks happen when records are built.
    pub fn validate(&self) -> LaminateResult<()> {
        if self.mass_method.is_none() && self.grammage_method.is_none() {
            return Err(LaminateError::ConfigError(format!(
                "config '{}' defines neither mass_method nor grammage_method",
                self.name
            )));
        }
        self.sweep.validate()
    }

    /// Inputs that lie outside the recommended control ranges.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();
        if let Some(mass) = &self.mass_method {
            mass.advisories(&mut out);
        }
        if let Some(grammage) = &self.grammage_method {
            grammage.advisories(&mut out);
        }
        out
    }
}

/// A field outside its recommended range. Informational only.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    pub field: &'static str,
    pub value: f64,
    pub range: RecommendedRange,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside the recommended range [{}, {}]",
            self.field, self.value, self.range.min, self.range.max
        )
    }
}

fn check(out: &mut Vec<Advisory>, field: &'static str, value: f64, range: RecommendedRange) {
    if !range.contains(value) {
        out.push(Advisory {
            field,
            value,
            range,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/laminate-types/ at compile time.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_load_default_config() {
        let cfg = LaminateConfig::from_file(&config_path("configs/default_laminate.json")).unwrap();
        assert_eq!(cfg.name, "carbon-epoxy-reference");
        let mass = cfg.mass_method.unwrap();
        assert!((mass.width_mm - 200.0).abs() < 1e-12);
        assert!((mass.fiber_volume_fraction - 0.6).abs() < 1e-12);
        assert!((mass.matrix_density_kgm3 - 1200.0).abs() < 1e-12);
        let grammage = cfg.grammage_method.unwrap();
        assert_eq!(grammage.ply_count, 5);
        assert_eq!(cfg.sweep.vf_samples, 100);
    }

    #[test]
    fn test_load_all_configs() {
        let configs = [
            "configs/default_laminate.json",
            "configs/glass_panel.json",
            "configs/woven_stack.json",
        ];
        for relative in &configs {
            let path = config_path(relative);
            let result = LaminateConfig::from_file(&path);
            assert!(result.is_ok(), "Failed to load config: {}", path);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = LaminateConfig::from_file(&config_path("configs/does_not_exist.json")).unwrap_err();
        assert!(matches!(err, LaminateError::Io(_)));
    }

    #[test]
    fn test_field_defaults_fill_gaps() {
        let cfg = LaminateConfig::from_json_str(r#"{"grammage_method": {"ply_count": 8}}"#).unwrap();
        assert_eq!(cfg.name, "laminate");
        assert!(cfg.mass_method.is_none());
        let g = cfg.grammage_method.unwrap();
        assert_eq!(g.ply_count, 8);
        assert!((g.grammage_gm2 - 300.0).abs() < 1e-12);
        assert!((g.fiber_volume_fraction - 0.6).abs() < 1e-12);
        assert_eq!(cfg.sweep, SweepConfig::default());
    }

    #[test]
    fn test_empty_config_rejected() {
        let err = LaminateConfig::from_json_str(r#"{"name": "empty"}"#).unwrap_err();
        assert!(matches!(err, LaminateError::ConfigError(_)));
    }

    #[test]
    fn test_bad_sweep_rejected() {
        let json = r#"{"mass_method": {}, "sweep": {"vf_min": 0.7, "vf_max": 0.3}}"#;
        let err = LaminateConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, LaminateError::InvalidSweep(_)));

        let json = r#"{"mass_method": {}, "sweep": {"vf_samples": 1}}"#;
        assert!(LaminateConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_sweep_sample_count_capped() {
        let at_limit = SweepConfig {
            vf_samples: MAX_SWEEP_SAMPLES,
            ..SweepConfig::default()
        };
        assert!(at_limit.validate().is_ok());

        let over = SweepConfig {
            vf_samples: MAX_SWEEP_SAMPLES + 1,
            ..SweepConfig::default()
        };
        assert!(matches!(over.validate(), Err(LaminateError::InvalidSweep(_))));

        let json = r#"{"mass_method": {}, "sweep": {"vf_samples": 100001}}"#;
        let err = LaminateConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, LaminateError::InvalidSweep(_)));
    }

    #[test]
    fn test_negative_ply_count_is_json_error() {
        let json = r#"{"grammage_method": {"ply_count": -2}}"#;
        let err = LaminateConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, LaminateError::Json(_)));
    }

    #[test]
    fn test_advisories_flag_out_of_range_fields() {
        let mut cfg = LaminateConfig::default();
        assert!(cfg.advisories().is_empty());

        if let Some(m) = cfg.mass_method.as_mut() {
            m.fiber_volume_fraction = 0.8;
            m.width_mm = 5.0;
        }
        let adv = cfg.advisories();
        assert_eq!(adv.len(), 2);
        assert!(adv.iter().any(|a| a.field == "mass_method.Vf"));
        assert!(adv[0].to_string().contains("recommended range"));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = LaminateConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        assert!(json.contains("\"Vf\""));
        let cfg2 = LaminateConfig::from_json_str(&json).unwrap();
        assert_eq!(cfg.mass_method, cfg2.mass_method);
        assert_eq!(cfg.grammage_method, cfg2.grammage_method);
        assert_eq!(cfg.sweep, cfg2.sweep);
    }
}
