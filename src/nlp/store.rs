//! Per-document feature tokens and span containment lookups.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    data::Span,
    error::PipelineError,
    nlp::{features::Feature, Phase},
};

/// A token span with its accumulated features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureToken {
    pub begin: usize,
    pub end: usize,
    features: Vec<Feature>,
}

impl FeatureToken {
    pub fn new(span: Span) -> Self {
        Self {
            begin: span.begin,
            end: span.end,
            features: Vec::new(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.begin, self.end)
    }

    pub fn covered_text<'a>(&self, text: &'a str) -> &'a str {
        self.span().covered_text(text)
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn has_feature(&self, feature: &Feature) -> bool {
        self.features.contains(feature)
    }

    /// Append a feature; repeats are kept.
    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }
}

#[derive(Debug)]
struct DocumentEntry {
    tokens: Vec<FeatureToken>,
    completed: Option<Phase>,
}

/// Feature tokens of the document currently being processed.
#[derive(Debug, Default)]
pub struct FeatureTokenStore {
    documents: HashMap<String, DocumentEntry>,
}

impl FeatureTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every document's tokens and start an empty sequence for `document`.
    pub fn reset(&mut self, document: &str) -> &mut Vec<FeatureToken> {
        self.documents.clear();
        &mut self
            .documents
            .entry(document.to_string())
            .or_insert(DocumentEntry {
                tokens: Vec::new(),
                completed: None,
            })
            .tokens
    }

    pub fn tokens_of(&self, document: &str) -> Result<&[FeatureToken], PipelineError> {
        self.entry(document).map(|entry| entry.tokens.as_slice())
    }

    pub fn tokens_of_mut(&mut self, document: &str) -> Result<&mut [FeatureToken], PipelineError> {
        self.documents
            .get_mut(document)
            .map(|entry| entry.tokens.as_mut_slice())
            .ok_or_else(|| not_initialized(document))
    }

    /// Tokens lying entirely inside `container`, in document order.
    pub fn tokens_within(
        &self,
        document: &str,
        container: Span,
    ) -> Result<Vec<&FeatureToken>, PipelineError> {
        let tokens = self.tokens_of(document)?;
        Ok(contained_indices(tokens, container)
            .into_iter()
            .map(|idx| &tokens[idx])
            .collect())
    }

    pub(crate) fn completed_phase(&self, document: &str) -> Result<Option<Phase>, PipelineError> {
        self.entry(document).map(|entry| entry.completed)
    }

    pub(crate) fn mark_completed(&mut self, document: &str, phase: Phase) {
        if let Some(entry) = self.documents.get_mut(document) {
            entry.completed = Some(phase);
        }
    }

    fn entry(&self, document: &str) -> Result<&DocumentEntry, PipelineError> {
        self.documents
            .get(document)
            .ok_or_else(|| not_initialized(document))
    }
}

fn not_initialized(document: &str) -> PipelineError {
    PipelineError::DocumentNotInitialized {
        document: document.to_string(),
    }
}

/// Indices of tokens inside `container`.
///
/// Tokens are sorted by begin offset, so the scan stops at the first token
/// starting past the container's end.
pub(crate) fn contained_indices(tokens: &[FeatureToken], container: Span) -> Vec<usize> {
    let mut hits = Vec::new();
    for (idx, token) in tokens.iter().enumerate() {
        if token.begin > container.end {
            break;
        }
        if container.contains(&token.span()) {
            hits.push(idx);
        }
    }
    hits
}
