//! CLI entry-point for feature tagging.

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{info, instrument};

use crate::{
    cli::{self, OutputFormat},
    config::Settings,
    data::input::read_documents,
    nlp::{
        export::{self, TaggedToken},
        report,
    },
};

/// Args for the `tag` command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// JSONL file or directory of JSONL files, one document per line.
    #[arg(long)]
    pub input: PathBuf,
    /// Destination file; defaults to `tokens.<format>` in the outputs dir.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Serialisation of the tagged tokens.
    #[arg(long, default_value = "jsonl", value_enum)]
    pub format: OutputFormat,
    /// Print the entity and feature trace of every document.
    #[arg(long)]
    pub report: bool,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let documents = read_documents(&args.input).await?;
    let mut generator = cli::generator(&settings);

    let mut tagged = Vec::new();
    for document in &documents {
        generator.run_all(document)?;
        let tokens = generator.feature_tokens_of(&document.id)?;
        if args.report {
            println!("{}", report::render(document, tokens, generator.gold_standard_label()));
        }
        tagged.extend(TaggedToken::collect(document, tokens));
    }

    let path = args.output.unwrap_or_else(|| match args.format {
        OutputFormat::Jsonl => settings.join_output("tokens.jsonl"),
        OutputFormat::Csv => settings.join_output("tokens.csv"),
    });
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    match args.format {
        OutputFormat::Jsonl => export::write_jsonl(&mut writer, &tagged)?,
        OutputFormat::Csv => export::write_csv(&mut writer, &tagged)?,
    }
    info!(path = %path.display(), tokens = tagged.len(), "wrote tagged tokens");
    Ok(())
}
