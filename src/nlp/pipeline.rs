//! Four-phase feature generation driven once per document per phase.

use std::{fmt, sync::Arc};

use tracing::{debug, instrument, trace};

use crate::{
    data::{CandidateMention, Document, ReferenceData, Span},
    error::PipelineError,
    nlp::{
        mention::{EmbeddedIds, MentionAdapter, GOLD_STANDARD},
        normalization, phrase, report, stopword,
        store::{FeatureToken, FeatureTokenStore},
        tagging,
    },
};

/// Pipeline checkpoints at which the host invokes the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// After all tagger components ran.
    Provenance,
    /// After match expansion.
    MatchExpansion,
    /// After stopword filtering.
    Stopword,
    /// After normalisation.
    Normalization,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Provenance,
        Phase::MatchExpansion,
        Phase::Stopword,
        Phase::Normalization,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::Provenance => 1,
            Self::MatchExpansion => 2,
            Self::Stopword => 3,
            Self::Normalization => 4,
        }
    }

    pub fn next(self) -> Option<Phase> {
        match self {
            Self::Provenance => Some(Self::MatchExpansion),
            Self::MatchExpansion => Some(Self::Stopword),
            Self::Stopword => Some(Self::Normalization),
            Self::Normalization => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PHASE{}", self.number())
    }
}

/// Accumulates features on the tokens of the document being processed.
pub struct FeatureGenerator {
    reference: Arc<ReferenceData>,
    adapter: Box<dyn MentionAdapter>,
    gold_standard: String,
    store: FeatureTokenStore,
}

impl FeatureGenerator {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            reference,
            adapter: Box::new(EmbeddedIds),
            gold_standard: GOLD_STANDARD.to_string(),
            store: FeatureTokenStore::new(),
        }
    }

    pub fn with_adapter(mut self, adapter: impl MentionAdapter + 'static) -> Self {
        self.adapter = Box::new(adapter);
        self
    }

    pub fn with_gold_standard_label(mut self, label: impl Into<String>) -> Self {
        self.gold_standard = label.into();
        self
    }

    /// Run one phase against `document`.
    ///
    /// `Phase::Provenance` always restarts the document. Any other phase must
    /// directly follow the last one completed for the same document.
    #[instrument(skip_all, fields(document = %document.id, phase = %phase))]
    pub fn process(&mut self, document: &Document, phase: Phase) -> Result<(), PipelineError> {
        if phase != Phase::Provenance {
            self.check_order(&document.id, phase)?;
        }

        let gold = self.gold_standard.as_str();
        let mentions = recognised(&document.mentions, gold);
        let appended = match phase {
            Phase::Provenance => {
                let tokens = self.store.reset(&document.id);
                tokens.extend(document.tokens.iter().copied().map(FeatureToken::new));
                tagging::tag_provenance(tokens, mentions)
            }
            Phase::MatchExpansion => {
                tagging::tag_expansions(self.store.tokens_of_mut(&document.id)?, mentions)
            }
            Phase::Stopword => {
                stopword::tag_stopwords(self.store.tokens_of_mut(&document.id)?, mentions)
            }
            Phase::Normalization => {
                let tokens = self.store.tokens_of_mut(&document.id)?;
                normalization::tag_normalization(
                    tokens,
                    &document.text,
                    mentions,
                    self.adapter.as_ref(),
                    &self.reference,
                ) + phrase::tag_phrases(tokens, document, &self.reference.phrases)
            }
        };
        self.store.mark_completed(&document.id, phase);
        debug!(appended, "phase complete");

        if phase == Phase::Normalization && tracing::enabled!(tracing::Level::TRACE) {
            let tokens = self.store.tokens_of(&document.id)?;
            trace!(
                "feature tokens\n{}",
                report::render(document, tokens, &self.gold_standard)
            );
        }
        Ok(())
    }

    /// Run all four phases in order and return the finished tokens.
    pub fn run_all(&mut self, document: &Document) -> Result<&[FeatureToken], PipelineError> {
        for phase in Phase::ALL {
            self.process(document, phase)?;
        }
        self.feature_tokens_of(&document.id)
    }

    pub fn feature_tokens_of(&self, document: &str) -> Result<&[FeatureToken], PipelineError> {
        self.store.tokens_of(document)
    }

    pub fn tokens_within(
        &self,
        document: &str,
        container: Span,
    ) -> Result<Vec<&FeatureToken>, PipelineError> {
        self.store.tokens_within(document, container)
    }

    pub fn gold_standard_label(&self) -> &str {
        &self.gold_standard
    }

    fn check_order(&self, document: &str, requested: Phase) -> Result<(), PipelineError> {
        let Some(done) = self.store.completed_phase(document)? else {
            return Err(PipelineError::DocumentNotInitialized {
                document: document.to_string(),
            });
        };
        match done.next() {
            Some(expected) if expected == requested => Ok(()),
            Some(expected) => Err(PipelineError::OutOfOrder {
                document: document.to_string(),
                expected,
                requested,
            }),
            None => Err(PipelineError::AlreadyComplete {
                document: document.to_string(),
                requested,
            }),
        }
    }
}

/// Mentions eligible for feature derivation.
pub fn recognised<'a>(
    mentions: &'a [CandidateMention],
    gold_standard: &'a str,
) -> impl Iterator<Item = &'a CandidateMention> + 'a {
    mentions.iter().filter(move |m| m.source != gold_standard)
}
