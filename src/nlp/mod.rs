//! Feature tagging layer: feature model, token store and the phase pipeline.

pub mod export;
pub mod features;
pub mod mention;
pub mod normalization;
pub mod phrase;
pub mod pipeline;
pub mod report;
pub mod stopword;
pub mod store;
pub mod tagging;

use anyhow::Result;
use tracing::info;

pub use features::Feature;
pub use pipeline::{FeatureGenerator, Phase};
pub use store::FeatureToken;

use crate::{data::Document, nlp::export::TaggedToken};

/// Run every phase over each document and collect the tagged tokens.
pub fn tag_documents(
    generator: &mut FeatureGenerator,
    documents: &[Document],
) -> Result<Vec<TaggedToken>> {
    info!(documents = documents.len(), "starting feature tagging");
    let mut tagged = Vec::new();
    for document in documents {
        let tokens = generator.run_all(document)?;
        tagged.extend(TaggedToken::collect(document, tokens));
    }
    info!(tokens = tagged.len(), "feature tagging finished");
    Ok(tagged)
}
