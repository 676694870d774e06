// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Laminate CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `laminate` — laminate thickness and resin mass from the command line.

use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;

use commands::{GrammageArgs, MassArgs, OutputFormat, SweepArgs};

#[derive(Parser)]
#[command(name = "laminate")]
#[command(version, about = "Composite laminate thickness and resin mass calculator")]
struct Cli {
    /// Log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Method 1: thickness and resin mass from fiber mass over a panel.
    Mass {
        #[command(flatten)]
        inputs: MassArgs,
        #[command(flatten)]
        sweep: SweepArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Method 2: thickness from fabric grammage and ply count.
    Grammage {
        #[command(flatten)]
        inputs: GrammageArgs,
        #[command(flatten)]
        sweep: SweepArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Evaluate every method defined in a JSON config file.
    Run {
        /// Path to laminate config (JSON).
        #[arg(short, long, default_value = "configs/default_laminate.json")]
        config: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List fiber material presets.
    Materials,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Mass {
            inputs,
            sweep,
            format,
        } => commands::mass(&inputs, &sweep, format),
        Commands::Grammage {
            inputs,
            sweep,
            format,
        } => commands::grammage(&inputs, &sweep, format),
        Commands::Run { config, format } => commands::run(&config, format),
        Commands::Materials => commands::materials(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mass_defaults() {
        let cli = Cli::try_parse_from(["laminate", "mass"]).unwrap();
        match cli.command {
            Commands::Mass { inputs, format, .. } => {
                assert_eq!(inputs.width, 200.0);
                assert_eq!(inputs.vf, 0.6);
                assert!(inputs.fiber_density.is_none());
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected mass command"),
        }
    }

    #[test]
    fn test_parse_grammage_with_material() {
        let cli = Cli::try_parse_from([
            "laminate", "-v", "grammage", "--plies", "8", "--material", "e-glass", "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Grammage { inputs, format, .. } => {
                assert_eq!(inputs.plies, 8.0);
                assert_eq!(
                    inputs.material,
                    Some(laminate_core::FiberMaterial::EGlass)
                );
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected grammage command"),
        }
    }

    #[test]
    fn test_unknown_material_rejected_at_parse() {
        assert!(Cli::try_parse_from(["laminate", "mass", "--material", "wood"]).is_err());
    }

    #[test]
    fn test_parse_run_config_path() {
        let cli = Cli::try_parse_from(["laminate", "run", "-c", "panel.json"]).unwrap();
        match cli.command {
            Commands::Run { config, .. } => assert_eq!(config, "panel.json"),
            _ => panic!("expected run command"),
        }
    }
}
