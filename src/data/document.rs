//! Input document model: token, sentence and candidate mention spans.

use serde::{Deserialize, Serialize};

/// Number of dictionary identifier slots carried by a mention.
pub const DICTIONARY_SLOTS: usize = 11;

/// Half-open byte range into a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub begin: usize,
    pub end: usize,
}

impl Span {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// True when `other` lies entirely inside this span (bounds inclusive).
    pub fn contains(&self, other: &Span) -> bool {
        other.begin >= self.begin && other.end <= self.end
    }

    /// Text covered by the span, empty when the offsets do not address `text`.
    pub fn covered_text<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.begin..self.end).unwrap_or("")
    }
}

/// Dictionary identifiers attached to a mention by the upstream normaliser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", default)]
pub struct DictionaryIds {
    pub chid: Option<String>,
    pub cheb: Option<String>,
    pub cas: Option<String>,
    pub pubc: Option<String>,
    pub pubs: Option<String>,
    pub inch: Option<String>,
    pub drug: Option<String>,
    pub hmbd: Option<String>,
    pub kegg: Option<String>,
    pub kegd: Option<String>,
    pub mesh: Option<String>,
}

impl DictionaryIds {
    /// Identifiers in slot order; slot `i` pairs with `DictionarySource::ALL[i]`.
    pub fn slots(&self) -> [Option<&str>; DICTIONARY_SLOTS] {
        [
            self.chid.as_deref(),
            self.cheb.as_deref(),
            self.cas.as_deref(),
            self.pubc.as_deref(),
            self.pubs.as_deref(),
            self.inch.as_deref(),
            self.drug.as_deref(),
            self.hmbd.as_deref(),
            self.kegg.as_deref(),
            self.kegd.as_deref(),
            self.mesh.as_deref(),
        ]
    }
}

/// Candidate entity mention produced by one tagging source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMention {
    pub begin: usize,
    pub end: usize,
    pub source: String,
    #[serde(default)]
    pub ids: DictionaryIds,
}

impl CandidateMention {
    pub fn new(begin: usize, end: usize, source: impl Into<String>) -> Self {
        Self {
            begin,
            end,
            source: source.into(),
            ids: DictionaryIds::default(),
        }
    }

    pub fn with_ids(mut self, ids: DictionaryIds) -> Self {
        self.ids = ids;
        self
    }

    pub fn span(&self) -> Span {
        Span::new(self.begin, self.end)
    }
}

/// One document as handed over by the tokenizer, sentence splitter and taggers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub tokens: Vec<Span>,
    #[serde(default)]
    pub sentences: Vec<Span>,
    #[serde(default)]
    pub mentions: Vec<CandidateMention>,
}

impl Document {
    pub fn covered_text(&self, span: Span) -> &str {
        span.covered_text(&self.text)
    }
}
