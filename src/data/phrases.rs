//! Phrase dictionary mapping alternative surface forms to a relation label.
//!
//! Each row is `label <TAB> term|term|...`. The terms of a row are
//! alternatives: any one of them occurring in a sentence fires the label.

use indexmap::IndexMap;

use crate::error::ReferenceError;

const TABLE: &str = "phrase";

/// Term lists and their labels, iterated in file order.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    entries: IndexMap<Vec<String>, String>,
}

impl PhraseDictionary {
    pub fn parse(content: &str) -> Result<Self, ReferenceError> {
        let mut dictionary = Self::default();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((label, terms)) = line.split_once('\t') else {
                return Err(ReferenceError::malformed(
                    TABLE,
                    idx + 1,
                    "expected label and term list",
                ));
            };
            // only the second column holds terms
            let terms = terms.split('\t').next().unwrap_or_default();
            dictionary.insert(terms.split('|'), label);
        }
        Ok(dictionary)
    }

    /// Register `terms` under `label`; a repeated term list keeps the newer label.
    pub fn insert<I>(&mut self, terms: I, label: impl Into<String>)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let terms: Vec<String> = terms
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if terms.is_empty() {
            return;
        }
        self.entries.insert(terms, label.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[String], &str)> {
        self.entries
            .iter()
            .map(|(terms, label)| (terms.as_slice(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
