//! Stopword marking for featured tokens left outside every mention.

use crate::{
    data::CandidateMention,
    nlp::{
        features::Feature,
        store::{contained_indices, FeatureToken},
    },
};

pub fn tag_stopwords<'a, I>(tokens: &mut [FeatureToken], mentions: I) -> usize
where
    I: IntoIterator<Item = &'a CandidateMention>,
{
    let mut covered = vec![false; tokens.len()];
    for mention in mentions {
        for idx in contained_indices(tokens, mention.span()) {
            covered[idx] = true;
        }
    }

    let mut appended = 0;
    for (token, covered) in tokens.iter_mut().zip(covered) {
        if !covered && !token.features().is_empty() {
            token.push(Feature::Stopword);
            appended += 1;
        }
    }
    appended
}
