//! CLI entry-point reporting reference table sizes.

use anyhow::Result;
use tracing::instrument;

use crate::{config::Settings, data::ReferenceData};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let reference = ReferenceData::shared(&settings.reference_paths());
    println!("ontology nodes: {}", reference.ontology.len());
    println!("prefixes:       {}", reference.affixes.prefixes.len());
    println!("suffixes:       {}", reference.affixes.suffixes.len());
    println!("phrases:        {}", reference.phrases.len());
    Ok(())
}
