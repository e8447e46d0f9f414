//! Error types surfaced by the reference loaders and the phase pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::nlp::Phase;

/// Failure while reading one reference table.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {table} row at line {line}: {reason}")]
    MalformedRow {
        table: &'static str,
        line: usize,
        reason: String,
    },
}

impl ReferenceError {
    pub(crate) fn malformed(table: &'static str, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            table,
            line,
            reason: reason.into(),
        }
    }
}

/// Integration errors raised by the phase pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("document {document} has no feature tokens; run {} first", Phase::Provenance)]
    DocumentNotInitialized { document: String },

    #[error("document {document}: {requested} requested but {expected} is next")]
    OutOfOrder {
        document: String,
        expected: Phase,
        requested: Phase,
    },

    #[error("document {document} already completed {}", Phase::Normalization)]
    AlreadyComplete { document: String, requested: Phase },
}
