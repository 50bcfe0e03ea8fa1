//! Command implementations for the shelver CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::load_dataset;
use crate::error::Result;
use crate::eval::{ClassificationReport, ConfusionMatrix};
use crate::ml::ClassifierPipeline;
use crate::organize::{list_files, reorganize, validate_labels};

/// Execute a CLI command.
pub fn execute_command(args: ShelverArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Organize(organize_args) => organize(organize_args.clone(), &args),
    }
}

/// Train a model, persist it, and report training-set metrics.
fn train(args: TrainArgs, cli_args: &ShelverArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading dataset from: {}", args.dataset.display());
    }

    let examples = load_dataset(&args.dataset)?;
    log::info!("training on {} labeled examples", examples.len());

    let pipeline = ClassifierPipeline::fit(&examples)?;
    pipeline.save(&args.model)?;
    log::info!("model written to {}", args.model.display());

    // Evaluate against the training set, the same data the model was fit on
    let (confusion_matrix, report) = if args.no_report {
        (None, None)
    } else {
        let truth: Vec<String> = examples.iter().map(|e| e.label.clone()).collect();
        let names: Vec<String> = examples.iter().map(|e| e.name.clone()).collect();
        let predicted = pipeline.predict(&names)?;

        let matrix = ConfusionMatrix::compute(&truth, &predicted)?;
        let report = ClassificationReport::from_matrix(&matrix);
        (Some(matrix), Some(report))
    };

    output_training(
        &TrainingSummary {
            dataset: args.dataset.display().to_string(),
            model: args.model.display().to_string(),
            examples: examples.len(),
            labels: pipeline.classes().to_vec(),
            confusion_matrix,
            report,
        },
        cli_args,
    )
}

/// Classify the files in a directory and move them into label folders.
fn organize(args: OrganizeArgs, cli_args: &ShelverArgs) -> Result<()> {
    let pipeline = ClassifierPipeline::load(&args.model)?;
    log::info!("loaded model from {}", args.model.display());

    let names = list_files(&args.directory)?;
    let labels = pipeline.predict(&names)?;

    let (planned, outcomes) = if args.dry_run {
        // A plan the real run would reject must not be shown either
        validate_labels(&labels)?;
        let planned = names
            .iter()
            .zip(labels.iter())
            .map(|(name, label)| PlannedMove {
                name: name.clone(),
                label: label.clone(),
            })
            .collect();
        (Some(planned), None)
    } else {
        let report = reorganize(&args.directory, &names, &labels)?;
        (None, Some(report))
    };

    output_organize(
        &OrganizeSummary {
            directory: args.directory.display().to_string(),
            model: args.model.display().to_string(),
            dry_run: args.dry_run,
            planned,
            outcomes,
        },
        cli_args,
    )
}
