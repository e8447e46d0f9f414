//! CLI entry-point for the label count matrix.

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    cli,
    config::Settings,
    data::input::read_documents,
    nlp::{self, export::FeatureMatrix},
};

/// Args for the `matrix` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// JSONL file or directory of JSONL files, one document per line.
    #[arg(long)]
    pub input: PathBuf,
    /// Destination CSV; defaults to `feature_matrix.csv` in the outputs dir.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let documents = read_documents(&args.input).await?;
    let mut generator = cli::generator(&settings);
    let tagged = nlp::tag_documents(&mut generator, &documents)?;
    let matrix = FeatureMatrix::build(&tagged);

    let path = args
        .output
        .unwrap_or_else(|| settings.join_output("feature_matrix.csv"));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    matrix.write_csv(BufWriter::new(file))?;
    info!(
        path = %path.display(),
        rows = matrix.counts.nrows(),
        labels = matrix.vocabulary.len(),
        "wrote feature matrix"
    );
    Ok(())
}
