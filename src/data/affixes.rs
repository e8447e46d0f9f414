//! Chemical prefix and suffix lists.

/// Lower-cased chemical affixes in file order.
#[derive(Debug, Clone, Default)]
pub struct AffixLists {
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl AffixLists {
    pub fn new<P, S>(prefixes: P, suffixes: S) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .collect(),
            suffixes: suffixes
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Number of listed prefixes `word` starts with.
    pub fn prefix_matches(&self, word: &str) -> usize {
        self.prefixes
            .iter()
            .filter(|prefix| word.starts_with(prefix.as_str()))
            .count()
    }

    /// Number of listed suffixes `word` ends with.
    pub fn suffix_matches(&self, word: &str) -> usize {
        self.suffixes
            .iter()
            .filter(|suffix| word.ends_with(suffix.as_str()))
            .count()
    }
}

/// Take the first whitespace delimited field of each line, lower-cased.
///
/// Blank lines are skipped: an empty affix would match every word.
pub fn parse_affix_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_lowercase)
        .collect()
}
