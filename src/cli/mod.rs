//! Command-line interface wiring for chem-featurizer.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::{config::Settings, data::ReferenceData, nlp::FeatureGenerator};

pub mod matrix;
pub mod resources;
pub mod tag;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Chemical mention feature tagger", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Tag(args) => tag::run(args, settings).await,
            Commands::Matrix(args) => matrix::run(args, settings).await,
            Commands::Resources => resources::run(settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run all four feature phases over JSONL documents.
    Tag(tag::Args),
    /// Tag documents and write a per-token label count matrix.
    Matrix(matrix::Args),
    /// Load the reference tables and report their sizes.
    Resources,
}

/// Serialisation of tagged tokens.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per token.
    Jsonl,
    /// One CSV row per token, features joined by `|`.
    Csv,
}

/// Generator over the process-wide reference tables.
pub(crate) fn generator(settings: &Settings) -> FeatureGenerator {
    let reference = ReferenceData::shared(&settings.reference_paths());
    FeatureGenerator::new(reference).with_gold_standard_label(settings.gold_standard_label.clone())
}
