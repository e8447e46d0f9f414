//! Tagger provenance and match-expansion features.

use crate::{
    data::CandidateMention,
    nlp::{
        features::{Feature, TaggerSource},
        store::{contained_indices, FeatureToken},
    },
};

/// Mark every token inside a mention with the tagger that proposed it.
///
/// Mentions from unknown sources contribute nothing.
pub fn tag_provenance<'a, I>(tokens: &mut [FeatureToken], mentions: I) -> usize
where
    I: IntoIterator<Item = &'a CandidateMention>,
{
    let mut appended = 0;
    for mention in mentions {
        let Some(source) = TaggerSource::from_source(&mention.source) else {
            continue;
        };
        for idx in contained_indices(tokens, mention.span()) {
            tokens[idx].push(Feature::Tagger(source));
            appended += 1;
        }
    }
    appended
}

/// Flag tokens a mention now covers but its own tagger never voted for.
pub fn tag_expansions<'a, I>(tokens: &mut [FeatureToken], mentions: I) -> usize
where
    I: IntoIterator<Item = &'a CandidateMention>,
{
    let mut appended = 0;
    for mention in mentions {
        let Some(source) = TaggerSource::from_source(&mention.source) else {
            continue;
        };
        let vote = Feature::Tagger(source);
        for idx in contained_indices(tokens, mention.span()) {
            let token = &mut tokens[idx];
            if !token.has_feature(&vote) {
                token.push(Feature::TaggerExpansion(source));
                token.push(Feature::MatchExpansion);
                appended += 2;
            }
        }
    }
    appended
}
