use std::sync::Arc;

use chem_featurizer::{
    data::{
        affixes::AffixLists, ontology::OntologyMetrics, phrases::PhraseDictionary,
        CandidateMention, DictionaryIds, Document, ReferenceData, Span,
    },
    nlp::{
        mention::{MentionAdapter, MentionIds},
        FeatureGenerator, FeatureToken, Phase,
    },
    PipelineError,
};

const TEXT: &str = "We used sodium chloride today";

fn tokens() -> Vec<Span> {
    vec![
        Span::new(0, 2),
        Span::new(3, 7),
        Span::new(8, 14),
        Span::new(15, 23),
        Span::new(24, 29),
    ]
}

fn document(mentions: Vec<CandidateMention>) -> Document {
    Document {
        id: "doc-1".into(),
        text: TEXT.into(),
        tokens: tokens(),
        sentences: vec![Span::new(0, TEXT.len())],
        mentions,
    }
}

fn reference() -> Arc<ReferenceData> {
    let ontology = OntologyMetrics::parse("id\tchildren\tdepths\nCHEBI:26710\t7\t1,3\n").unwrap();
    Arc::new(ReferenceData::from_parts(
        ontology,
        AffixLists::default(),
        PhraseDictionary::default(),
    ))
}

fn labels(token: &FeatureToken) -> Vec<String> {
    token.features().iter().map(ToString::to_string).collect()
}

fn all_labels(generator: &FeatureGenerator, document: &str) -> Vec<Vec<String>> {
    generator
        .feature_tokens_of(document)
        .unwrap()
        .iter()
        .map(labels)
        .collect()
}

#[test]
fn dictionary_mention_end_to_end() {
    let ids = DictionaryIds {
        cheb: Some("CHEBI:26710".into()),
        ..Default::default()
    };
    let doc = document(vec![CandidateMention::new(8, 23, "DICTIONARY").with_ids(ids)]);
    let mut generator = FeatureGenerator::new(reference());
    for phase in Phase::ALL {
        generator.process(&doc, phase).unwrap();
    }

    let expected = vec![
        "DICTIONARY",
        "CHEMSPOT",
        "CHEB",
        "CHEB_AVG_DEPTH_2",
        "CHEB_MIN_DEPTH_1",
        "CHEB_MAX_DEPTH_3",
        "CHEB_CHILDREN_7",
    ];
    let labels = all_labels(&generator, "doc-1");
    assert!(labels[0].is_empty());
    assert!(labels[1].is_empty());
    assert_eq!(labels[2], expected);
    assert_eq!(labels[3], expected);
    assert!(labels[4].is_empty());
}

#[test]
fn one_feature_token_per_input_token() {
    let doc = document(Vec::new());
    let mut generator = FeatureGenerator::new(reference());
    generator.process(&doc, Phase::Provenance).unwrap();

    let spans: Vec<Span> = generator
        .feature_tokens_of("doc-1")
        .unwrap()
        .iter()
        .map(FeatureToken::span)
        .collect();
    assert_eq!(spans, tokens());
}

#[test]
fn gold_standard_mentions_never_contribute() {
    let ids = DictionaryIds {
        cheb: Some("CHEBI:26710".into()),
        mesh: Some("D012965".into()),
        ..Default::default()
    };
    let doc = document(vec![CandidateMention::new(8, 23, "goldstandard").with_ids(ids)]);
    let mut generator = FeatureGenerator::new(reference());
    generator.run_all(&doc).unwrap();

    assert!(all_labels(&generator, "doc-1").iter().all(Vec::is_empty));
}

#[test]
fn custom_gold_standard_label_is_excluded() {
    let doc = document(vec![
        CandidateMention::new(8, 14, "ANNOTATOR"),
        CandidateMention::new(15, 23, "CRF"),
    ]);
    let mut generator = FeatureGenerator::new(reference()).with_gold_standard_label("ANNOTATOR");
    generator.process(&doc, Phase::Provenance).unwrap();

    let labels = all_labels(&generator, "doc-1");
    assert!(labels[2].is_empty());
    assert_eq!(labels[3], vec!["CRF"]);
}

#[test]
fn source_matching_ignores_case_and_skips_unknown_labels() {
    let doc = document(vec![
        CandidateMention::new(8, 14, "sum_tagger"),
        CandidateMention::new(15, 23, "RULES"),
    ]);
    let mut generator = FeatureGenerator::new(reference());
    generator.run_all(&doc).unwrap();

    let labels = all_labels(&generator, "doc-1");
    assert_eq!(labels[2], vec!["SUM_TAGGER", "CHEMSPOT"]);
    // unknown taggers still reach normalisation
    assert_eq!(labels[3], vec!["CHEMSPOT"]);
}

#[test]
fn expanded_mentions_mark_tokens_missing_the_tagger_vote() {
    let mut doc = document(vec![CandidateMention::new(8, 14, "CRF")]);
    let mut generator = FeatureGenerator::new(reference());
    generator.process(&doc, Phase::Provenance).unwrap();

    // match expansion grows the mention over "chloride"
    doc.mentions = vec![CandidateMention::new(8, 23, "CRF")];
    generator.process(&doc, Phase::MatchExpansion).unwrap();

    let labels = all_labels(&generator, "doc-1");
    assert_eq!(labels[2], vec!["CRF"]);
    assert_eq!(labels[3], vec!["CRF_ME", "MATCH_EXPANSION"]);
}

#[test]
fn filtered_mentions_leave_stopwords_behind() {
    let mut doc = document(vec![
        CandidateMention::new(8, 23, "DICTIONARY"),
        CandidateMention::new(24, 29, "CRF"),
    ]);
    let mut generator = FeatureGenerator::new(reference());
    generator.process(&doc, Phase::Provenance).unwrap();
    generator.process(&doc, Phase::MatchExpansion).unwrap();

    // the stopword filter drops "today"
    doc.mentions.truncate(1);
    generator.process(&doc, Phase::Stopword).unwrap();

    let labels = all_labels(&generator, "doc-1");
    assert!(labels[0].is_empty());
    assert_eq!(labels[2], vec!["DICTIONARY"]);
    assert_eq!(labels[4], vec!["CRF", "STOPWORD"]);
}

#[test]
fn chemical_affixes_tag_mention_tokens() {
    let text = "Benzaldehyde and xyz";
    let doc = Document {
        id: "affix".into(),
        text: text.into(),
        tokens: vec![Span::new(0, 12), Span::new(13, 16), Span::new(17, 20)],
        sentences: vec![Span::new(0, text.len())],
        mentions: vec![
            CandidateMention::new(0, 12, "CRF"),
            CandidateMention::new(17, 20, "CRF"),
        ],
    };
    let reference = ReferenceData::from_parts(
        OntologyMetrics::default(),
        AffixLists::new(["benz", "meth"], ["hyde", "dehyde"]),
        PhraseDictionary::default(),
    );
    let mut generator = FeatureGenerator::new(Arc::new(reference));
    generator.run_all(&doc).unwrap();

    let labels = all_labels(&generator, "affix");
    assert_eq!(
        labels[0],
        vec![
            "CRF",
            "CHEMSPOT",
            "CHEMICAL_PREFIX",
            "CHEMICAL_SUFFIX",
            "CHEMICAL_SUFFIX"
        ]
    );
    assert_eq!(labels[2], vec!["CRF", "CHEMSPOT"]);
}

#[test]
fn any_phrase_term_fires_the_label() {
    let text = "Drug X blocks enzyme Y. The catalyst was added.";
    let doc = Document {
        id: "phrase".into(),
        text: text.into(),
        tokens: vec![
            Span::new(0, 4),
            Span::new(5, 6),
            Span::new(7, 13),
            Span::new(14, 20),
            Span::new(21, 22),
            Span::new(22, 23),
            Span::new(24, 27),
            Span::new(28, 36),
            Span::new(37, 40),
            Span::new(41, 46),
            Span::new(46, 47),
        ],
        sentences: vec![Span::new(0, 23), Span::new(24, 47)],
        mentions: Vec::new(),
    };
    let mut phrases = PhraseDictionary::default();
    phrases.insert(["inhibits", "blocks"], "INHIBITION");
    phrases.insert(["cat"], "ANIMAL");
    let reference =
        ReferenceData::from_parts(OntologyMetrics::default(), AffixLists::default(), phrases);
    let mut generator = FeatureGenerator::new(Arc::new(reference));
    generator.run_all(&doc).unwrap();

    let labels = all_labels(&generator, "phrase");
    assert_eq!(labels[2], vec!["INHIBITION"]);
    for (idx, token) in labels.iter().enumerate() {
        if idx != 2 {
            assert!(token.is_empty(), "token {idx} tagged {token:?}");
        }
    }
}

#[test]
fn ontology_identifier_comes_from_the_adapter() {
    struct FixedChebi;

    impl MentionAdapter for FixedChebi {
        fn identifiers(&self, _mention: &CandidateMention) -> MentionIds {
            MentionIds {
                ontology: Some("CHEBI:26710".into()),
                ..Default::default()
            }
        }
    }

    let doc = document(vec![CandidateMention::new(8, 14, "CRF")]);
    let mut generator = FeatureGenerator::new(reference()).with_adapter(FixedChebi);
    generator.run_all(&doc).unwrap();

    let labels = all_labels(&generator, "doc-1");
    assert_eq!(
        labels[2],
        vec![
            "CRF",
            "CHEMSPOT",
            "CHEB_AVG_DEPTH_2",
            "CHEB_MIN_DEPTH_1",
            "CHEB_MAX_DEPTH_3",
            "CHEB_CHILDREN_7"
        ]
    );
}

#[test]
fn unknown_ontology_identifier_adds_no_buckets() {
    let ids = DictionaryIds {
        cheb: Some("CHEBI:0".into()),
        cas: Some(String::new()),
        ..Default::default()
    };
    let doc = document(vec![CandidateMention::new(8, 14, "CRF").with_ids(ids)]);
    let mut generator = FeatureGenerator::new(reference());
    generator.run_all(&doc).unwrap();

    assert_eq!(
        all_labels(&generator, "doc-1")[2],
        vec!["CRF", "CHEMSPOT", "CHEB"]
    );
}

#[test]
fn later_phases_require_provenance_first() {
    let doc = document(Vec::new());
    let mut generator = FeatureGenerator::new(reference());

    let err = generator.process(&doc, Phase::MatchExpansion).unwrap_err();
    assert_eq!(
        err,
        PipelineError::DocumentNotInitialized {
            document: "doc-1".into()
        }
    );
}

#[test]
fn phases_cannot_be_skipped_or_repeated() {
    let doc = document(Vec::new());
    let mut generator = FeatureGenerator::new(reference());
    generator.process(&doc, Phase::Provenance).unwrap();

    let err = generator.process(&doc, Phase::Stopword).unwrap_err();
    assert_eq!(
        err,
        PipelineError::OutOfOrder {
            document: "doc-1".into(),
            expected: Phase::MatchExpansion,
            requested: Phase::Stopword,
        }
    );

    generator.process(&doc, Phase::MatchExpansion).unwrap();
    generator.process(&doc, Phase::Stopword).unwrap();
    generator.process(&doc, Phase::Normalization).unwrap();
    assert!(matches!(
        generator.process(&doc, Phase::Normalization),
        Err(PipelineError::AlreadyComplete { .. })
    ));
}

#[test]
fn rerunning_provenance_restarts_the_document() {
    let doc = document(vec![CandidateMention::new(8, 23, "CRF")]);
    let mut generator = FeatureGenerator::new(reference());
    generator.run_all(&doc).unwrap();
    generator.process(&doc, Phase::Provenance).unwrap();

    assert_eq!(all_labels(&generator, "doc-1")[2], vec!["CRF"]);
}

#[test]
fn next_document_replaces_the_previous_one() {
    let first = document(Vec::new());
    let mut second = document(Vec::new());
    second.id = "doc-2".into();

    let mut generator = FeatureGenerator::new(reference());
    generator.run_all(&first).unwrap();
    generator.run_all(&second).unwrap();

    assert!(generator.feature_tokens_of("doc-1").is_err());
    assert_eq!(generator.feature_tokens_of("doc-2").unwrap().len(), 5);
}

#[test]
fn gold_standard_coverage_does_not_prevent_stopwords() {
    let mut doc = document(vec![CandidateMention::new(24, 29, "CRF")]);
    let mut generator = FeatureGenerator::new(reference());
    generator.process(&doc, Phase::Provenance).unwrap();
    generator.process(&doc, Phase::MatchExpansion).unwrap();

    // only a ground-truth annotation still covers "today"
    doc.mentions = vec![CandidateMention::new(24, 29, "goldstandard")];
    generator.process(&doc, Phase::Stopword).unwrap();

    assert_eq!(all_labels(&generator, "doc-1")[4], vec!["CRF", "STOPWORD"]);
}

#[test]
fn generator_exposes_contained_tokens() {
    let doc = document(vec![CandidateMention::new(8, 23, "CRF")]);
    let mut generator = FeatureGenerator::new(reference());
    generator.process(&doc, Phase::Provenance).unwrap();

    let within = generator.tokens_within("doc-1", Span::new(8, 23)).unwrap();
    let spans: Vec<Span> = within.iter().map(|t| t.span()).collect();
    assert_eq!(spans, vec![Span::new(8, 14), Span::new(15, 23)]);
    assert!(within.iter().all(|t| labels(t) == vec!["CRF"]));
    assert!(generator.tokens_within("doc-2", Span::new(0, 5)).is_err());
}
