//! Runtime configuration utilities for chem-featurizer.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{data::ReferencePaths, nlp::mention::GOLD_STANDARD};

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Ontology depth and child count table.
    pub ontology_file: PathBuf,
    /// Chemical prefix list.
    pub prefix_file: PathBuf,
    /// Chemical suffix list.
    pub suffix_file: PathBuf,
    /// Phrase to label dictionary.
    pub phrase_file: PathBuf,
    /// Root folder for tagged outputs.
    pub outputs_dir: PathBuf,
    /// Provenance label of ground-truth mentions.
    pub gold_standard_label: String,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let resources_dir = env::var("RESOURCES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./resources"));
        let defaults = ReferencePaths::under(&resources_dir);
        let ontology_file = path_var("ONTOLOGY_FILE", defaults.ontology);
        let prefix_file = path_var("PREFIX_FILE", defaults.prefixes);
        let suffix_file = path_var("SUFFIX_FILE", defaults.suffixes);
        let phrase_file = path_var("PHRASE_FILE", defaults.phrases);
        let outputs_dir = path_var("OUTPUTS_DIR", PathBuf::from("./outputs"));
        let gold_standard_label =
            env::var("GOLD_STANDARD_LABEL").unwrap_or_else(|_| GOLD_STANDARD.to_string());

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            ontology_file,
            prefix_file,
            suffix_file,
            phrase_file,
            outputs_dir,
            gold_standard_label,
        })
    }

    pub fn reference_paths(&self) -> ReferencePaths {
        ReferencePaths {
            ontology: self.ontology_file.clone(),
            prefixes: self.prefix_file.clone(),
            suffixes: self.suffix_file.clone(),
            phrases: self.phrase_file.clone(),
        }
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}

fn path_var(key: &str, default: PathBuf) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or(default)
}
