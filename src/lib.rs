//! Per-token feature tagging for chemical entity mention classification.
//!
//! Tokens of a document accumulate feature labels over four phases driven by
//! the host pipeline: tagger provenance, match expansion, stopword filtering
//! and normalisation. See [`nlp::FeatureGenerator`].

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod nlp;

pub use error::{PipelineError, ReferenceError};
