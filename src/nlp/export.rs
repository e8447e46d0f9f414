//! Export of tagged tokens as records and as a label count matrix.

use std::io::Write;

use anyhow::Result;
use indexmap::IndexMap;
use ndarray::Array2;
use serde::Serialize;

use crate::{
    data::Document,
    nlp::{features::Feature, store::FeatureToken},
};

/// One token and its features, flattened for serialisation.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedToken {
    pub document: String,
    pub begin: usize,
    pub end: usize,
    pub text: String,
    pub features: Vec<Feature>,
}

impl TaggedToken {
    pub fn collect(document: &Document, tokens: &[FeatureToken]) -> Vec<Self> {
        tokens
            .iter()
            .map(|token| Self {
                document: document.id.clone(),
                begin: token.begin,
                end: token.end,
                text: token.covered_text(&document.text).to_string(),
                features: token.features().to_vec(),
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    document: &'a str,
    begin: usize,
    end: usize,
    text: &'a str,
    features: String,
}

pub fn write_jsonl<W: Write>(writer: &mut W, tokens: &[TaggedToken]) -> Result<()> {
    for token in tokens {
        serde_json::to_writer(&mut *writer, token)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write tokens as CSV, features joined by `|`.
pub fn write_csv<W: Write>(writer: W, tokens: &[TaggedToken]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for token in tokens {
        let labels: Vec<String> = token.features.iter().map(ToString::to_string).collect();
        out.serialize(CsvRow {
            document: &token.document,
            begin: token.begin,
            end: token.end,
            text: &token.text,
            features: labels.join("|"),
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Label counts per token; repeated labels count more than once.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    pub vocabulary: IndexMap<String, usize>,
    pub counts: Array2<f32>,
}

impl FeatureMatrix {
    /// Build the matrix with columns in first-seen label order.
    pub fn build(tokens: &[TaggedToken]) -> Self {
        let mut vocabulary = IndexMap::new();
        for token in tokens {
            for feature in &token.features {
                let next = vocabulary.len();
                vocabulary.entry(feature.to_string()).or_insert(next);
            }
        }

        let mut counts = Array2::<f32>::zeros((tokens.len(), vocabulary.len()));
        for (row, token) in tokens.iter().enumerate() {
            for feature in &token.features {
                if let Some(&col) = vocabulary.get(&feature.to_string()) {
                    counts[[row, col]] += 1.0;
                }
            }
        }
        Self { vocabulary, counts }
    }

    /// Write a header of labels followed by one count row per token.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(self.vocabulary.keys())?;
        for row in self.counts.rows() {
            out.write_record(row.iter().map(|value| value.to_string()))?;
        }
        out.flush()?;
        Ok(())
    }
}
