//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, ShelverArgs};
use crate::error::Result;
use crate::eval::{ClassificationReport, ConfusionMatrix};
use crate::organize::{MoveOutcome, MoveReport};

/// Result structure for the train command.
#[derive(Debug, Serialize)]
pub struct TrainingSummary {
    pub dataset: String,
    pub model: String,
    pub examples: usize,
    pub labels: Vec<String>,
    pub confusion_matrix: Option<ConfusionMatrix>,
    pub report: Option<ClassificationReport>,
}

/// One planned (entry, label) pair before any move happens.
#[derive(Debug, Serialize)]
pub struct PlannedMove {
    pub name: String,
    pub label: String,
}

/// Result structure for the organize command.
#[derive(Debug, Serialize)]
pub struct OrganizeSummary {
    pub directory: String,
    pub model: String,
    pub dry_run: bool,
    /// Predictions in input order; present for dry runs.
    pub planned: Option<Vec<PlannedMove>>,
    /// Per-file outcomes; present for real runs.
    pub outcomes: Option<MoveReport>,
}

/// Output the training summary in the selected format.
pub fn output_training(summary: &TrainingSummary, args: &ShelverArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(summary, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!(
                    "Trained on {} examples from {} ({} labels)",
                    summary.examples,
                    summary.dataset,
                    summary.labels.len()
                );
                println!("Model written to {}", summary.model);
            }
            if let Some(matrix) = &summary.confusion_matrix {
                println!();
                print_confusion_matrix(matrix);
            }
            if let Some(report) = &summary.report {
                println!();
                print_classification_report(report);
            }
            Ok(())
        }
    }
}

/// Output the organize summary in the selected format.
pub fn output_organize(summary: &OrganizeSummary, args: &ShelverArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(summary, args),
        OutputFormat::Human => {
            if let Some(planned) = &summary.planned {
                println!("Planned moves in {} (dry run):", summary.directory);
                for mv in planned {
                    println!("  {} -> {}/", mv.name, mv.label);
                }
                println!("{} files, nothing moved", planned.len());
            }
            if let Some(report) = &summary.outcomes {
                for mv in &report.moves {
                    match &mv.outcome {
                        MoveOutcome::Moved => println!("  {} -> {}/", mv.name, mv.label),
                        MoveOutcome::Collision => {
                            println!("  {} !! exists in {}/, skipped", mv.name, mv.label)
                        }
                        MoveOutcome::Failed(reason) => {
                            println!("  {} !! failed: {reason}", mv.name)
                        }
                    }
                }
                println!(
                    "{} moved, {} collided, {} failed",
                    report.moved(),
                    report.collided(),
                    report.failed()
                );
            }
            Ok(())
        }
    }
}

/// Output any serializable result as JSON.
fn output_json<T: Serialize>(result: &T, args: &ShelverArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Print a confusion matrix as a plain text table.
///
/// Rows are true labels, columns are predicted labels. The heatmap rendering
/// of the original tooling is deliberately out of scope.
pub fn print_confusion_matrix(matrix: &ConfusionMatrix) {
    let width = matrix
        .labels()
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .max(5);

    println!("Confusion matrix (rows: actual, columns: predicted):");
    print!("{:>width$} ", "");
    for label in matrix.labels() {
        print!(" {label:>width$}");
    }
    println!();

    for (idx, label) in matrix.labels().iter().enumerate() {
        print!("{label:>width$} ");
        for count in matrix.row(idx) {
            print!(" {count:>width$}");
        }
        println!();
    }
}

/// Print per-label precision/recall/F1 and the overall summary lines.
pub fn print_classification_report(report: &ClassificationReport) {
    let width = report
        .per_label
        .iter()
        .map(|m| m.label.len())
        .max()
        .unwrap_or(0)
        .max(9);

    println!("{:>width$}  precision  recall  f1-score  support", "label");
    for metrics in &report.per_label {
        println!(
            "{:>width$}  {:>9.2}  {:>6.2}  {:>8.2}  {:>7}",
            metrics.label, metrics.precision, metrics.recall, metrics.f1, metrics.support
        );
    }
    println!();
    println!("accuracy: {:.2}", report.accuracy);
    println!(
        "macro avg: precision {:.2}  recall {:.2}  f1-score {:.2}",
        report.macro_precision, report.macro_recall, report.macro_f1
    );
}
