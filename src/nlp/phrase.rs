//! Sentence-level phrase dictionary matching.

use crate::{
    data::{phrases::PhraseDictionary, Document, Span},
    nlp::{
        features::Feature,
        store::{contained_indices, FeatureToken},
    },
};

/// Tag tokens covered by any whole-word occurrence of a dictionary term.
///
/// Terms of one entry are alternatives, so every matching term fires the
/// entry's label on the tokens it covers.
pub fn tag_phrases(
    tokens: &mut [FeatureToken],
    document: &Document,
    phrases: &PhraseDictionary,
) -> usize {
    if phrases.is_empty() {
        return 0;
    }
    let mut appended = 0;
    for sentence in &document.sentences {
        let lowered = LoweredText::new(document.covered_text(*sentence));
        if lowered.text.is_empty() {
            continue;
        }
        for (terms, label) in phrases.iter() {
            for term in terms {
                for (start, end) in lowered.whole_word_matches(term) {
                    let span = Span::new(sentence.begin + start, sentence.begin + end);
                    for idx in contained_indices(tokens, span) {
                        tokens[idx].push(Feature::Phrase(label.to_string()));
                        appended += 1;
                    }
                }
            }
        }
    }
    appended
}

/// Lower-cased text with a byte map back to the source offsets.
#[derive(Debug)]
pub struct LoweredText {
    pub text: String,
    origin: Vec<usize>,
}

impl LoweredText {
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len() + 1);
        for (offset, ch) in source.char_indices() {
            for lower in ch.to_lowercase() {
                let before = text.len();
                text.push(lower);
                origin.resize(origin.len() + (text.len() - before), offset);
            }
        }
        origin.push(source.len());
        Self { text, origin }
    }

    /// Source byte ranges of every occurrence of `term` not glued to a letter.
    pub fn whole_word_matches(&self, term: &str) -> Vec<(usize, usize)> {
        let mut hits = Vec::new();
        let Some(first) = term.chars().next() else {
            return hits;
        };
        let mut from = 0;
        while let Some(pos) = self.text[from..].find(term) {
            let start = from + pos;
            let end = start + term.len();
            let open = !self.text[..start]
                .chars()
                .next_back()
                .is_some_and(char::is_alphabetic);
            let close = !self.text[end..]
                .chars()
                .next()
                .is_some_and(char::is_alphabetic);
            if open && close {
                hits.push((self.origin[start], self.origin[end]));
            }
            from = start + first.len_utf8();
        }
        hits
    }
}
