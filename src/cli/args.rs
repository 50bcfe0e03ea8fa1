//! Command line argument parsing for the shelver CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// shelver - classify files by name and organize them into labeled folders
#[derive(Parser, Debug, Clone)]
#[command(name = "shelver")]
#[command(about = "Classify files by name with a trained model and organize them into labeled folders")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ShelverArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ShelverArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from a labeled dataset and report its metrics
    Train(TrainArgs),

    /// Predict labels for the files in a directory and move them
    Organize(OrganizeArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Path to the `;`-delimited training dataset (Nombre/Etiqueta columns)
    #[arg(short, long, value_name = "DATASET_FILE")]
    pub dataset: PathBuf,

    /// Path where the trained model artifact is written
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Skip the training-set evaluation report
    #[arg(long)]
    pub no_report: bool,
}

/// Arguments for organizing a directory
#[derive(Parser, Debug, Clone)]
pub struct OrganizeArgs {
    /// Directory whose files are classified and moved
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Path to the trained model artifact
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub model: PathBuf,

    /// Print the planned moves without touching any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_default() {
        let args = ShelverArgs::parse_from(["shelver", "train", "-d", "x.csv", "-m", "m.bin"]);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = ShelverArgs::parse_from([
            "shelver", "-q", "-vv", "train", "-d", "x.csv", "-m", "m.bin",
        ]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_organize_args() {
        let args = ShelverArgs::parse_from([
            "shelver", "organize", "/tmp/downloads", "-m", "m.bin", "--dry-run",
        ]);
        match args.command {
            Command::Organize(organize) => {
                assert_eq!(organize.directory, PathBuf::from("/tmp/downloads"));
                assert!(organize.dry_run);
            }
            _ => panic!("expected organize subcommand"),
        }
    }
}
