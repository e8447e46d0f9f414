//! Normalisation features: dictionary hits, ontology buckets and chemical affixes.

use crate::{
    data::{ontology::NodeMetrics, CandidateMention, ReferenceData},
    nlp::{
        features::{DictionarySource, Feature, OntologyMetric},
        mention::MentionAdapter,
        store::{contained_indices, FeatureToken},
    },
};

pub fn tag_normalization<'a, I>(
    tokens: &mut [FeatureToken],
    text: &str,
    mentions: I,
    adapter: &dyn MentionAdapter,
    reference: &ReferenceData,
) -> usize
where
    I: IntoIterator<Item = &'a CandidateMention>,
{
    let mut appended = 0;
    for mention in mentions {
        let ids = adapter.identifiers(mention);
        let dictionaries: Vec<DictionarySource> = ids
            .dictionary
            .iter()
            .zip(DictionarySource::ALL)
            .filter(|(id, _)| id.as_deref().is_some_and(|id| !id.is_empty()))
            .map(|(_, source)| source)
            .collect();
        let buckets = ids
            .ontology
            .as_deref()
            .and_then(|id| reference.ontology.get(id))
            .map(ontology_buckets);

        for idx in contained_indices(tokens, mention.span()) {
            let token = &mut tokens[idx];
            let before = token.features().len();

            token.push(Feature::ChemSpot);
            for source in &dictionaries {
                token.push(Feature::DictionaryId(*source));
            }
            if let Some(buckets) = &buckets {
                for feature in buckets {
                    token.push(feature.clone());
                }
            }

            let word = token.covered_text(text).to_lowercase();
            for _ in 0..reference.affixes.prefix_matches(&word) {
                token.push(Feature::ChemicalPrefix);
            }
            for _ in 0..reference.affixes.suffix_matches(&word) {
                token.push(Feature::ChemicalSuffix);
            }

            appended += token.features().len() - before;
        }
    }
    appended
}

/// Bucket features for one ontology node, average depth first.
pub fn ontology_buckets(metrics: &NodeMetrics) -> [Feature; 4] {
    [
        (OntologyMetric::AvgDepth, metrics.avg_depth),
        (OntologyMetric::MinDepth, metrics.min_depth),
        (OntologyMetric::MaxDepth, metrics.max_depth),
        (OntologyMetric::Children, metrics.child_count),
    ]
    .map(|(metric, value)| Feature::Ontology { metric, value })
}
