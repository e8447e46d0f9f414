//! Input documents and reference tables.

pub mod affixes;
pub mod document;
pub mod input;
pub mod ontology;
pub mod phrases;
pub mod reference;

pub use document::{CandidateMention, DictionaryIds, Document, Span};
pub use reference::{ReferenceData, ReferencePaths};
