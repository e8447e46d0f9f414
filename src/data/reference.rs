//! Read-only reference tables shared by every phase.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::{
    data::{
        affixes::{parse_affix_list, AffixLists},
        ontology::OntologyMetrics,
        phrases::PhraseDictionary,
    },
    error::ReferenceError,
};

static SHARED: OnceCell<Arc<ReferenceData>> = OnceCell::new();

/// Locations of the reference table files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePaths {
    pub ontology: PathBuf,
    pub prefixes: PathBuf,
    pub suffixes: PathBuf,
    pub phrases: PathBuf,
}

impl ReferencePaths {
    /// Conventional file layout below a resources directory.
    pub fn under<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            ontology: root.join("chebi").join("chebi_ontology_fulldepth.txt"),
            prefixes: root.join("prefixes.txt"),
            suffixes: root.join("suffixes-filtered.txt"),
            phrases: root.join("phare.txt"),
        }
    }
}

/// Ontology metrics, affix lists and phrase dictionary.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub ontology: OntologyMetrics,
    pub affixes: AffixLists,
    pub phrases: PhraseDictionary,
}

impl ReferenceData {
    pub fn from_parts(
        ontology: OntologyMetrics,
        affixes: AffixLists,
        phrases: PhraseDictionary,
    ) -> Self {
        Self {
            ontology,
            affixes,
            phrases,
        }
    }

    /// Load every table; a table that fails to load is logged and left empty.
    pub fn load(paths: &ReferencePaths) -> Self {
        let ontology = load_table("ontology", &paths.ontology, OntologyMetrics::parse)
            .unwrap_or_default();
        info!(nodes = ontology.len(), "loaded ontology metrics");

        let prefixes = load_table("prefix", &paths.prefixes, |c| Ok(parse_affix_list(c)))
            .unwrap_or_default();
        let suffixes = load_table("suffix", &paths.suffixes, |c| Ok(parse_affix_list(c)))
            .unwrap_or_default();
        info!(
            prefixes = prefixes.len(),
            suffixes = suffixes.len(),
            "loaded chemical affixes"
        );

        let phrases =
            load_table("phrase", &paths.phrases, PhraseDictionary::parse).unwrap_or_default();
        info!(entries = phrases.len(), "loaded phrase dictionary");

        Self {
            ontology,
            affixes: AffixLists {
                prefixes,
                suffixes,
            },
            phrases,
        }
    }

    /// Process-wide instance; only the first caller reads the files.
    pub fn shared(paths: &ReferencePaths) -> Arc<Self> {
        SHARED
            .get_or_init(|| Arc::new(Self::load(paths)))
            .clone()
    }
}

fn load_table<T>(
    table: &'static str,
    path: &Path,
    parse: impl FnOnce(&str) -> Result<T, ReferenceError>,
) -> Option<T> {
    let result = fs::read_to_string(path)
        .map_err(|source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|content| parse(&content));
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(table, path = %path.display(), error = %err, "reference table not loaded");
            None
        }
    }
}
