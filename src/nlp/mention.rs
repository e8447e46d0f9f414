//! Adapter exposing dictionary and ontology identifiers of a mention.

use crate::data::{document::DICTIONARY_SLOTS, CandidateMention};

/// Provenance label reserved for ground-truth annotations.
pub const GOLD_STANDARD: &str = "goldstandard";

/// Identifiers resolved for one mention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionIds {
    /// Slot `i` pairs with `DictionarySource::ALL[i]`.
    pub dictionary: [Option<String>; DICTIONARY_SLOTS],
    pub ontology: Option<String>,
}

/// Resolves identifiers for a candidate mention.
pub trait MentionAdapter: Send + Sync {
    fn identifiers(&self, mention: &CandidateMention) -> MentionIds;
}

/// Reads the identifiers the normaliser stored on the mention itself.
///
/// The ChEBI slot doubles as the ontology identifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedIds;

impl MentionAdapter for EmbeddedIds {
    fn identifiers(&self, mention: &CandidateMention) -> MentionIds {
        let dictionary = mention
            .ids
            .slots()
            .map(|slot| slot.map(str::to_string));
        MentionIds {
            ontology: mention.ids.cheb.clone(),
            dictionary,
        }
    }
}
