//! Closed feature vocabulary attached to tokens.

use std::fmt;

use serde_with::SerializeDisplay;

use crate::data::document::DICTIONARY_SLOTS;

/// Upstream tagger a mention can originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaggerSource {
    Crf,
    Dictionary,
    SumTagger,
    Abbrev,
}

impl TaggerSource {
    /// Map a mention's provenance label to a tagger, ignoring case.
    pub fn from_source(source: &str) -> Option<Self> {
        match source.to_uppercase().as_str() {
            "CRF" => Some(Self::Crf),
            "DICTIONARY" => Some(Self::Dictionary),
            "SUM_TAGGER" => Some(Self::SumTagger),
            "ABBREV" => Some(Self::Abbrev),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crf => "CRF",
            Self::Dictionary => "DICTIONARY",
            Self::SumTagger => "SUM_TAGGER",
            Self::Abbrev => "ABBREV",
        }
    }
}

/// Dictionary a normalised identifier comes from, in mention slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionarySource {
    ChemIdPlus,
    Chebi,
    Cas,
    PubchemCompound,
    PubchemSubstance,
    Inchi,
    DrugBank,
    Hmdb,
    KeggCompound,
    KeggDrug,
    Mesh,
}

impl DictionarySource {
    pub const ALL: [DictionarySource; DICTIONARY_SLOTS] = [
        Self::ChemIdPlus,
        Self::Chebi,
        Self::Cas,
        Self::PubchemCompound,
        Self::PubchemSubstance,
        Self::Inchi,
        Self::DrugBank,
        Self::Hmdb,
        Self::KeggCompound,
        Self::KeggDrug,
        Self::Mesh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChemIdPlus => "CHID",
            Self::Chebi => "CHEB",
            Self::Cas => "CAS",
            Self::PubchemCompound => "PUBC",
            Self::PubchemSubstance => "PUBS",
            Self::Inchi => "INCH",
            Self::DrugBank => "DRUG",
            Self::Hmdb => "HMBD",
            Self::KeggCompound => "KEGG",
            Self::KeggDrug => "KEGD",
            Self::Mesh => "MESH",
        }
    }
}

/// Ontology metric encoded into a bucket feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OntologyMetric {
    AvgDepth,
    MinDepth,
    MaxDepth,
    Children,
}

impl OntologyMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AvgDepth => "CHEB_AVG_DEPTH",
            Self::MinDepth => "CHEB_MIN_DEPTH",
            Self::MaxDepth => "CHEB_MAX_DEPTH",
            Self::Children => "CHEB_CHILDREN",
        }
    }
}

/// A single feature label on a token.
///
/// `Display` renders the flat label used by downstream classifiers, e.g.
/// `CRF`, `DICTIONARY_ME`, `CHEB_AVG_DEPTH_4` or a phrase label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay)]
pub enum Feature {
    /// The token lies inside a mention proposed by this tagger.
    Tagger(TaggerSource),
    /// The token joined this tagger's mention through match expansion.
    TaggerExpansion(TaggerSource),
    MatchExpansion,
    Stopword,
    /// The token lies inside a mention that survived to normalisation.
    ChemSpot,
    DictionaryId(DictionarySource),
    Ontology { metric: OntologyMetric, value: u32 },
    ChemicalPrefix,
    ChemicalSuffix,
    Phrase(String),
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tagger(source) => f.write_str(source.as_str()),
            Self::TaggerExpansion(source) => write!(f, "{}_ME", source.as_str()),
            Self::MatchExpansion => f.write_str("MATCH_EXPANSION"),
            Self::Stopword => f.write_str("STOPWORD"),
            Self::ChemSpot => f.write_str("CHEMSPOT"),
            Self::DictionaryId(source) => f.write_str(source.as_str()),
            Self::Ontology { metric, value } => write!(f, "{}_{value}", metric.as_str()),
            Self::ChemicalPrefix => f.write_str("CHEMICAL_PREFIX"),
            Self::ChemicalSuffix => f.write_str("CHEMICAL_SUFFIX"),
            Self::Phrase(label) => f.write_str(label),
        }
    }
}
