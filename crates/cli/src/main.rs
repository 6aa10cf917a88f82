//! # scorecast
//!
//! Command-line interface for the student math-score pipeline.

use std::path::{Path, PathBuf};

use anyhow::Context;
use automl_facade::prelude::{ModelTrainer, TrainerConfig};
use clap::{Args, Parser, Subcommand};
use common::{ScoreFieldMapping, Settings};
use data_api::IngestionConfig;
use pipeline_facade::prelude::{HandleUnknown, PreprocessorConfig};
use predictor::{CustomData, PredictForm, PredictPipeline};
use transformation::{DataTransformation, DataTransformationConfig};

#[derive(Parser)]
#[command(name = "scorecast")]
#[command(about = "Student math-score training and prediction", long_about = None)]
struct Cli {
    /// Artifact directory (overrides ARTIFACT_DIR)
    #[arg(long, global = true)]
    artifact_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy a raw dataset and split it into train and test files
    Ingest(IngestArgs),

    /// Fit the preprocessor and select the best model
    Train(TrainArgs),

    /// Ingest a raw dataset, then train on the split
    Run {
        #[command(flatten)]
        ingest: IngestArgs,

        #[command(flatten)]
        train: TrainOptions,
    },

    /// Predict the math score of one student
    Predict(PredictArgs),
}

#[derive(Args)]
struct IngestArgs {
    /// Raw labeled CSV file
    #[arg(short, long)]
    input: PathBuf,

    /// Fraction of rows held out for testing
    #[arg(long, default_value = "0.2")]
    test_ratio: f64,

    /// Seed of the train/test shuffle
    #[arg(long, default_value = "42")]
    split_seed: u64,
}

#[derive(Args)]
struct TrainArgs {
    /// Training CSV (default: <artifact dir>/train.csv)
    #[arg(long)]
    train: Option<PathBuf>,

    /// Test CSV (default: <artifact dir>/test.csv)
    #[arg(long)]
    test: Option<PathBuf>,

    #[command(flatten)]
    options: TrainOptions,
}

#[derive(Args)]
struct TrainOptions {
    /// Seed of the randomized algorithms
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Cross-validation folds of the grid search
    #[arg(long, default_value = "3")]
    cv_folds: usize,

    /// Evaluate grid points in parallel
    #[arg(long)]
    parallel: bool,

    /// Encode categories unseen during fit as all zeros instead of failing
    #[arg(long)]
    ignore_unknown: bool,

    /// Print the training outcome as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PredictArgs {
    #[arg(long)]
    gender: String,

    /// Race or ethnicity group, e.g. "group B"
    #[arg(long)]
    ethnicity: String,

    #[arg(long)]
    parental_level_of_education: String,

    #[arg(long)]
    lunch: String,

    #[arg(long)]
    test_preparation_course: String,

    #[arg(long)]
    reading_score: String,

    #[arg(long)]
    writing_score: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env().context("invalid settings")?;
    if let Some(dir) = cli.artifact_dir {
        settings = settings.with_artifact_dir(dir);
    }
    let log_file = common::logging::init(&settings.log_dir)
        .with_context(|| format!("cannot create log directory {}", settings.log_dir.display()))?;
    tracing::info!(log_file = %log_file.display(), "logging initialised");

    match cli.command {
        Commands::Ingest(args) => {
            let (train, test) = ingest(&settings, &args)?;
            println!("train data: {}", train.display());
            println!("test data:  {}", test.display());
        }
        Commands::Train(args) => {
            let train = args
                .train
                .unwrap_or_else(|| settings.artifact_dir.join(data_api::TRAIN_DATA_FILE));
            let test = args
                .test
                .unwrap_or_else(|| settings.artifact_dir.join(data_api::TEST_DATA_FILE));
            train_model(&settings, &train, &test, &args.options)?;
        }
        Commands::Run { ingest: args, train } => {
            let (train_path, test_path) = ingest(&settings, &args)?;
            train_model(&settings, &train_path, &test_path, &train)?;
        }
        Commands::Predict(args) => {
            let form = PredictForm {
                gender: Some(args.gender),
                ethnicity: Some(args.ethnicity),
                parental_level_of_education: Some(args.parental_level_of_education),
                lunch: Some(args.lunch),
                test_preparation_course: Some(args.test_preparation_course),
                reading_score: Some(args.reading_score),
                writing_score: Some(args.writing_score),
            };
            let data = CustomData::from_form(&form, ScoreFieldMapping::Direct)?;
            let prediction = PredictPipeline::from_settings(&settings).predict(&data)?;
            println!("{prediction:.2}");
        }
    }

    Ok(())
}

fn ingest(settings: &Settings, args: &IngestArgs) -> anyhow::Result<(PathBuf, PathBuf)> {
    let config = IngestionConfig::new(&args.input)
        .with_output_dir(&settings.artifact_dir)
        .with_test_ratio(args.test_ratio)
        .with_seed(args.split_seed);
    let artifacts = data_core::ingest(&config)
        .with_context(|| format!("ingestion of {} failed", args.input.display()))?;
    tracing::info!(
        train_rows = artifacts.train_rows,
        test_rows = artifacts.test_rows,
        "ingestion finished"
    );
    Ok((artifacts.train_path, artifacts.test_path))
}

fn train_model(
    settings: &Settings,
    train: &Path,
    test: &Path,
    options: &TrainOptions,
) -> anyhow::Result<()> {
    let mut preprocessor = PreprocessorConfig::default();
    if options.ignore_unknown {
        preprocessor = preprocessor.with_handle_unknown(HandleUnknown::Ignore);
    }
    let transformation = DataTransformation::new(
        DataTransformationConfig::new(settings.preprocessor_path()).with_preprocessor(preprocessor),
    );
    let (train_matrix, test_matrix, _) = transformation.transform_files(train, test)?.into_parts();

    let config = TrainerConfig::new(settings.model_path())
        .with_seed(options.seed)
        .with_cv_folds(options.cv_folds)
        .with_parallel(options.parallel);
    let outcome = ModelTrainer::new(config).train_with_report(&train_matrix, &test_matrix)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", outcome.report);
        println!(
            "best model: {} ({}) with R² {:.4}",
            outcome.winner, outcome.params, outcome.score
        );
    }
    Ok(())
}
