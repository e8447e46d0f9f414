//! Human-readable trace of recognised entities and featured tokens.

use std::cmp::Reverse;

use crate::{
    data::{CandidateMention, Document},
    nlp::{pipeline::recognised, store::FeatureToken},
};

/// Render each recognised entity once, followed by the tokens carrying features.
///
/// ```text
///
/// benzaldehyde
///   benzaldehyde -> [DICTIONARY, CHEMSPOT, CHEB]
/// ```
pub fn render(document: &Document, tokens: &[FeatureToken], gold_standard: &str) -> String {
    let mut entities: Vec<&CandidateMention> =
        recognised(&document.mentions, gold_standard).collect();
    // outer mentions before inner ones sharing a begin offset
    entities.sort_by_key(|m| (m.begin, Reverse(m.end)));

    let mut out = String::new();
    let mut cursor = 0;
    for token in tokens {
        while cursor < entities.len() && entities[cursor].end < token.begin {
            cursor += 1;
        }
        if let Some(entity) = entities.get(cursor) {
            if entity.begin <= token.begin && entity.end >= token.end {
                out.push_str(&format!("\n{}\n", document.covered_text(entity.span())));
                cursor += 1;
            }
        }

        if !token.features().is_empty() {
            let labels: Vec<String> = token.features().iter().map(ToString::to_string).collect();
            out.push_str(&format!(
                "  {} -> [{}]\n",
                token.covered_text(&document.text),
                labels.join(", ")
            ));
        }
    }
    out
}
