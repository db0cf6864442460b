//! Recoverable decode problems
//!
//! None of these abort a file. They are collected while decoding so callers
//! can see exactly which fields were skipped and why.

use std::fmt;

use super::decoder::ScanMiss;
use super::descriptor::FieldDescriptor;

/// One recoverable problem found while decoding a graph file.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No marker for `field` inside record `record` (node window or edge record).
    MarkerNotFound { field: &'static str, record: usize },
    /// Marker present but fewer bytes remain than the payload needs.
    MalformedPayload {
        field: &'static str,
        record: usize,
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// Material code outside the material table.
    UnknownMaterialCode { node: u32, code: u64 },
    /// Criteria text without the `NODECRITERIA_` prefix.
    MissingCriteriaPrefix { node: u32 },
    /// A positionally correlated column has the wrong length.
    SequenceLengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    /// Edge record lacking one or both endpoints; no edge was built from it.
    IncompleteEdge { record: usize },
    /// The header's node count disagrees with the number of node windows.
    MaxNodesMismatch { declared: u64, found: usize },
    /// Decoded Node Id differs from the sequentially assigned id.
    IdMismatch { node: u32, source_id: u64 },
}

impl Diagnostic {
    pub(crate) fn from_miss(desc: &FieldDescriptor, record: usize, miss: ScanMiss) -> Self {
        match miss {
            ScanMiss::NotFound => Diagnostic::MarkerNotFound {
                field: desc.name,
                record,
            },
            ScanMiss::Truncated {
                marker,
                needed,
                available,
            } => Diagnostic::MalformedPayload {
                field: desc.name,
                record,
                offset: marker,
                needed,
                available,
            },
        }
    }

    /// Whether this marks a field skipped during extraction.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Diagnostic::MarkerNotFound { .. } | Diagnostic::MalformedPayload { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MarkerNotFound { field, record } => {
                write!(f, "record {record}: '{field}' marker not found")
            }
            Diagnostic::MalformedPayload {
                field,
                record,
                offset,
                needed,
                available,
            } => write!(
                f,
                "record {record}: '{field}' at offset {offset} needs {needed} bytes, \
                 {available} available"
            ),
            Diagnostic::UnknownMaterialCode { node, code } => {
                write!(f, "node {node}: unknown material code {code}")
            }
            Diagnostic::MissingCriteriaPrefix { node } => {
                write!(f, "node {node}: criteria has no NODECRITERIA_ prefix")
            }
            Diagnostic::SequenceLengthMismatch {
                field,
                expected,
                found,
            } => write!(f, "'{field}' has {found} values, expected {expected}"),
            Diagnostic::IncompleteEdge { record } => {
                write!(f, "edge record {record}: missing endpoint")
            }
            Diagnostic::MaxNodesMismatch { declared, found } => {
                write!(f, "header declares {declared} nodes, found {found}")
            }
            Diagnostic::IdMismatch { node, source_id } => {
                write!(f, "node {node}: stored id is {source_id}")
            }
        }
    }
}

/// All diagnostics for one decoded file, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl GraphReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of fields skipped during extraction.
    #[must_use]
    pub fn skipped_fields(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_skip()).count()
    }

    /// Number of diagnostics matching `pred`.
    pub fn count(&self, pred: impl Fn(&Diagnostic) -> bool) -> usize {
        self.diagnostics.iter().filter(|d| pred(d)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::graph::descriptor::FieldKind;

    #[test]
    fn test_from_miss() {
        let desc = FieldKind::NodeGamma.descriptor();
        assert_eq!(
            Diagnostic::from_miss(desc, 3, ScanMiss::NotFound),
            Diagnostic::MarkerNotFound {
                field: "Node Gamma",
                record: 3
            }
        );
        let truncated = Diagnostic::from_miss(
            desc,
            0,
            ScanMiss::Truncated {
                marker: 40,
                needed: 4,
                available: 1,
            },
        );
        assert!(truncated.is_skip());
        assert_eq!(
            truncated.to_string(),
            "record 0: 'Node Gamma' at offset 40 needs 4 bytes, 1 available"
        );
    }

    #[test]
    fn test_report_counts() {
        let mut report = GraphReport::new();
        assert!(report.is_clean());
        report.push(Diagnostic::MissingCriteriaPrefix { node: 1 });
        report.push(Diagnostic::MarkerNotFound {
            field: "Node Radius",
            record: 0,
        });
        assert_eq!(report.skipped_fields(), 1);
        assert_eq!(
            report.count(|d| matches!(d, Diagnostic::MissingCriteriaPrefix { .. })),
            1
        );
    }
}
