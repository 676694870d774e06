//! CLI command implementations.

use std::fmt::Write as _;

use clap::{Args, ValueEnum};

use laminate_core::evaluate::{evaluate_config, evaluate_grammage_method, evaluate_mass_method};
use laminate_core::{Evaluation, FiberMaterial};
use laminate_types::config::{
    GrammageMethodConfig, LaminateConfig, MassMethodConfig, SweepConfig,
};
use laminate_types::constants::*;
use laminate_types::guards::ply_count_from_f64;
use laminate_types::records::SweepAxis;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct MassArgs {
    /// Panel width [mm].
    #[arg(long, default_value_t = DEFAULT_WIDTH_MM)]
    pub width: f64,
    /// Panel length [mm].
    #[arg(long, default_value_t = DEFAULT_LENGTH_MM)]
    pub length: f64,
    /// Dry fiber mass [g].
    #[arg(long, default_value_t = DEFAULT_FIBER_MASS_G)]
    pub fiber_mass: f64,
    /// Fiber volume fraction, strictly between 0 and 1.
    #[arg(long, default_value_t = DEFAULT_FIBER_VOLUME_FRACTION)]
    pub vf: f64,
    /// Fiber density [kg/m³]. Overrides --material.
    #[arg(long)]
    pub fiber_density: Option<f64>,
    /// Matrix density [kg/m³].
    #[arg(long, default_value_t = DEFAULT_MATRIX_DENSITY_KGM3)]
    pub matrix_density: f64,
    /// Fiber preset supplying the default density (carbon, e-glass, aramid, basalt, flax).
    #[arg(long)]
    pub material: Option<FiberMaterial>,
}

#[derive(Debug, Clone, Args)]
pub struct GrammageArgs {
    /// Fabric areal weight [g/m²].
    #[arg(long, default_value_t = DEFAULT_GRAMMAGE_GM2)]
    pub grammage: f64,
    /// Number of plies; must be a whole number.
    #[arg(long, default_value_t = DEFAULT_PLY_COUNT as f64)]
    pub plies: f64,
    /// Fiber volume fraction, strictly between 0 and 1.
    #[arg(long, default_value_t = DEFAULT_FIBER_VOLUME_FRACTION)]
    pub vf: f64,
    /// Fiber density [kg/m³]. Overrides --material.
    #[arg(long)]
    pub fiber_density: Option<f64>,
    /// Fiber preset supplying the default density.
    #[arg(long)]
    pub material: Option<FiberMaterial>,
}

#[derive(Debug, Clone, Args)]
pub struct SweepArgs {
    /// Lower end of the V_f curve.
    #[arg(long, default_value_t = DEFAULT_VF_SWEEP_MIN)]
    pub vf_min: f64,
    /// Upper end of the V_f curve.
    #[arg(long, default_value_t = DEFAULT_VF_SWEEP_MAX)]
    pub vf_max: f64,
    /// Number of V_f samples.
    #[arg(long, default_value_t = DEFAULT_VF_SWEEP_SAMPLES)]
    pub samples: usize,
    /// Plies plotted past the current ply count.
    #[arg(long, default_value_t = DEFAULT_PLY_LOOKAHEAD)]
    pub lookahead: u32,
}

impl SweepArgs {
    fn config(&self) -> SweepConfig {
        SweepConfig {
            vf_min: self.vf_min,
            vf_max: self.vf_max,
            vf_samples: self.samples,
            ply_lookahead: self.lookahead,
        }
    }
}

fn fiber_density(explicit: Option<f64>, material: Option<FiberMaterial>) -> f64 {
    explicit
        .or_else(|| material.map(|m| m.density_kgm3()))
        .unwrap_or(DEFAULT_FIBER_DENSITY_KGM3)
}

impl MassArgs {
    pub fn config(&self) -> MassMethodConfig {
        MassMethodConfig {
            width_mm: self.width,
            length_mm: self.length,
            fiber_mass_g: self.fiber_mass,
            fiber_volume_fraction: self.vf,
            fiber_density_kgm3: fiber_density(self.fiber_density, self.material),
            matrix_density_kgm3: self.matrix_density,
        }
    }
}

impl GrammageArgs {
    pub fn config(&self) -> Result<GrammageMethodConfig, laminate_types::error::LaminateError> {
        Ok(GrammageMethodConfig {
            grammage_gm2: self.grammage,
            ply_count: ply_count_from_f64(self.plies)?,
            fiber_density_kgm3: fiber_density(self.fiber_density, self.material),
            fiber_volume_fraction: self.vf,
        })
    }
}

/// Method 1.
pub fn mass(inputs: &MassArgs, sweep: &SweepArgs, format: OutputFormat) -> CommandResult {
    let method = inputs.config();
    let config = LaminateConfig {
        name: "cli".to_string(),
        mass_method: Some(method),
        grammage_method: None,
        sweep: sweep.config(),
    };
    warn_advisories(&config);
    let evaluation = evaluate_mass_method(&method, &config.sweep)?;
    emit(&[evaluation], format)
}

/// Method 2.
pub fn grammage(inputs: &GrammageArgs, sweep: &SweepArgs, format: OutputFormat) -> CommandResult {
    let method = inputs.config()?;
    let config = LaminateConfig {
        name: "cli".to_string(),
        mass_method: None,
        grammage_method: Some(method),
        sweep: sweep.config(),
    };
    warn_advisories(&config);
    let evaluation = evaluate_grammage_method(&method, &config.sweep)?;
    emit(&[evaluation], format)
}

/// Evaluate a JSON config file.
pub fn run(config_path: &str, format: OutputFormat) -> CommandResult {
    let config = LaminateConfig::from_file(config_path)?;
    tracing::info!(name = %config.name, path = config_path, "loaded laminate config");
    warn_advisories(&config);
    let evaluations = evaluate_config(&config)?;
    emit(&evaluations, format)
}

pub fn materials() -> CommandResult {
    println!("Fiber materials");
    println!("───────────────");
    for m in FiberMaterial::ALL {
        println!("  {:<8} {:>6.0} kg/m³", m.name(), m.density_kgm3());
    }
    Ok(())
}

fn warn_advisories(config: &LaminateConfig) {
    for advisory in config.advisories() {
        tracing::warn!("{advisory}");
    }
}

fn emit(evaluations: &[Evaluation], format: OutputFormat) -> CommandResult {
    match format {
        OutputFormat::Text => {
            for (i, evaluation) in evaluations.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", render_text(evaluation)?);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(evaluations)?);
        }
    }
    Ok(())
}

/// Human-readable report: readout, curve table, current point.
pub fn render_text(evaluation: &Evaluation) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let title = evaluation.method.title();
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "─".repeat(title.chars().count()))?;
    writeln!(out, "Thickness:   {}", evaluation.readout.thickness_text())?;
    if let Some(resin) = evaluation.readout.resin_text() {
        writeln!(out, "Resin mass:  {resin}")?;
    }
    writeln!(out)?;

    let axis = evaluation.sweep.axis();
    writeln!(out, "{:<28} {}", axis.label(), evaluation.hints.y_label)?;
    for p in evaluation.sweep.points() {
        writeln!(out, "{:<28} {:.4}", format_x(axis, p.x), p.thickness_mm)?;
    }
    let hl = evaluation.sweep.highlight();
    writeln!(
        out,
        "current: {} -> {}",
        format_x(axis, hl.x),
        evaluation.hints.highlight_label
    )?;
    Ok(out)
}

fn format_x(axis: SweepAxis, x: f64) -> String {
    match axis {
        SweepAxis::FiberVolumeFraction => format!("{x:.4}"),
        SweepAxis::PlyCount => format!("{x:.0}"),
    }
}
