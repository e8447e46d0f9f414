//! ChEBI ontology node metrics: depth statistics and child counts.
//!
//! The table is a header line followed by tab separated rows of
//! `id <TAB> child_count <TAB> depth[,depth...]`.

use std::collections::HashMap;

use crate::error::ReferenceError;

const TABLE: &str = "ontology";

/// Depth statistics and child count for one ontology node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeMetrics {
    pub min_depth: u32,
    pub avg_depth: u32,
    pub max_depth: u32,
    pub child_count: u32,
}

impl NodeMetrics {
    /// Summarise a node from its child count and every depth it occurs at.
    pub fn from_depths(child_count: u32, depths: &[u32]) -> Option<Self> {
        let min_depth = *depths.iter().min()?;
        let max_depth = *depths.iter().max()?;
        let sum: u64 = depths.iter().map(|&d| u64::from(d)).sum();
        let mean = sum as f64 / depths.len() as f64;
        // ties round up
        let avg_depth = (mean + 0.5).floor() as u32;
        Some(Self {
            min_depth,
            avg_depth,
            max_depth,
            child_count,
        })
    }
}

/// Ontology metrics keyed by ontology identifier.
#[derive(Debug, Clone, Default)]
pub struct OntologyMetrics {
    nodes: HashMap<String, NodeMetrics>,
}

impl OntologyMetrics {
    /// Parse the full table; any malformed row rejects the whole table.
    pub fn parse(content: &str) -> Result<Self, ReferenceError> {
        let mut nodes = HashMap::new();
        for (idx, line) in content.lines().enumerate().skip(1) {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(id), Some(children), Some(depths)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(ReferenceError::malformed(
                    TABLE,
                    line_no,
                    "expected id, child count and depth list",
                ));
            };
            let child_count = parse_number(children, line_no)?;
            let depths = depths
                .split(',')
                .map(|value| parse_number(value, line_no))
                .collect::<Result<Vec<_>, _>>()?;
            let metrics = NodeMetrics::from_depths(child_count, &depths)
                .ok_or_else(|| ReferenceError::malformed(TABLE, line_no, "empty depth list"))?;
            nodes.insert(id.to_string(), metrics);
        }
        Ok(Self { nodes })
    }

    pub fn get(&self, id: &str) -> Option<&NodeMetrics> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn parse_number(value: &str, line: usize) -> Result<u32, ReferenceError> {
    value
        .trim()
        .parse()
        .map_err(|err| ReferenceError::malformed(TABLE, line, format!("{value:?}: {err}")))
}
