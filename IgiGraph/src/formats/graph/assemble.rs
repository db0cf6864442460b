//! Node record assembly
//!
//! Turns the node and edge columns into [`NodeRecord`]s: assigns sequential
//! ids, resolves each node's neighbours, looks up material names and strips
//! the criteria prefix.

use super::columns::FieldColumns;
use super::decoder::{FieldValue, le_uint};
use super::descriptor::FieldKind;
use super::document::{EdgeTuple, GraphDocument, NodeLink, NodeRecord};
use super::material::Material;
use super::report::{Diagnostic, GraphReport};
use super::ParseOptions;
use crate::error::{Error, Result};

/// Prefix that introduces the gameplay tag in a node's criteria text.
pub const CRITERIA_PREFIX: &str = "NODECRITERIA_";

/// Text following [`CRITERIA_PREFIX`] (matched case-insensitively), or `None`.
#[must_use]
pub fn extract_criteria(text: &str) -> Option<&str> {
    let index = text
        .to_ascii_lowercase()
        .find(&CRITERIA_PREFIX.to_ascii_lowercase())?;
    text.get(index + CRITERIA_PREFIX.len()..)
}

/// Build the graph document from extracted columns.
pub fn assemble_graph(
    node_fields: FieldColumns,
    edge_fields: FieldColumns,
    declared_max_nodes: Option<u64>,
    options: &ParseOptions,
    mut report: GraphReport,
) -> Result<GraphDocument> {
    check_alignment(&node_fields, options, &mut report)?;
    check_alignment(&edge_fields, options, &mut report)?;

    let edges = build_edges(&edge_fields, &mut report);
    let incomplete = edge_fields.len() - edges.len();
    if options.strict && incomplete > 0 {
        return Err(Error::IncompleteRecords { count: incomplete });
    }

    if let Some(declared) = declared_max_nodes.filter(|&d| d != node_fields.len() as u64) {
        report.push(Diagnostic::MaxNodesMismatch {
            declared,
            found: node_fields.len(),
        });
    }

    let endpoints: Vec<(u64, u64, Option<u8>)> = edges
        .iter()
        .map(|e| (le_uint(&e.endpoint_a), le_uint(&e.endpoint_b), e.edge_type))
        .collect();

    let mut nodes = Vec::with_capacity(node_fields.len());
    for (id, index) in (1u32..).zip(0..node_fields.len()) {
        let mut node = NodeRecord::new(id);
        node.source_id = node_fields
            .value(FieldKind::NodeId, index)
            .and_then(FieldValue::to_le_uint);
        node.position = node_fields
            .value(FieldKind::NodePosition, index)
            .and_then(FieldValue::as_vector);
        node.gamma = node_fields
            .value(FieldKind::NodeGamma, index)
            .and_then(FieldValue::as_float);
        node.radius = node_fields
            .value(FieldKind::NodeRadius, index)
            .and_then(FieldValue::as_float);
        // Material is a single byte; big-endian and little-endian agree.
        node.material_code = node_fields
            .value(FieldKind::NodeMaterial, index)
            .and_then(FieldValue::to_be_uint);
        node.criteria = node_fields
            .value(FieldKind::NodeCriteria, index)
            .and_then(FieldValue::as_text)
            .map(|text| {
                extract_criteria(text).map_or_else(
                    || {
                        report.push(Diagnostic::MissingCriteriaPrefix { node: id });
                        String::new()
                    },
                    str::to_string,
                )
            });

        if let Some(code) = node.material_code.filter(|&c| Material::from_code(c).is_none()) {
            report.push(Diagnostic::UnknownMaterialCode { node: id, code });
        }
        if let Some(source_id) = node.source_id.filter(|&s| s != u64::from(id)) {
            report.push(Diagnostic::IdMismatch { node: id, source_id });
        }

        // Linear scan over all edges per node; graph files hold at most a few
        // thousand of each.
        let me = u64::from(id);
        for &(a, b, edge_type) in &endpoints {
            let neighbor = if a == me {
                b
            } else if b == me {
                a
            } else {
                continue;
            };
            node.links.push(NodeLink { neighbor, edge_type });
        }

        nodes.push(node);
    }

    tracing::debug!("Assembled {} nodes, {} edges", nodes.len(), edges.len());
    Ok(GraphDocument {
        declared_max_nodes,
        nodes,
        edges,
        node_fields,
        edge_fields,
        report,
    })
}

fn check_alignment(
    fields: &FieldColumns,
    options: &ParseOptions,
    report: &mut GraphReport,
) -> Result<()> {
    for column in fields.misaligned() {
        let (field, expected, found) = (column.descriptor.name, fields.len(), column.values.len());
        tracing::warn!("'{field}' has {found} values for {expected} records");
        if options.strict {
            return Err(Error::InconsistentSequences {
                field,
                expected,
                found,
            });
        }
        report.push(Diagnostic::SequenceLengthMismatch {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

fn build_edges(fields: &FieldColumns, report: &mut GraphReport) -> Vec<EdgeTuple> {
    let mut edges = Vec::with_capacity(fields.len());
    for record in 0..fields.len() {
        let a = fields.value(FieldKind::GraphEdge1, record).and_then(FieldValue::as_raw);
        let b = fields.value(FieldKind::GraphEdge2, record).and_then(FieldValue::as_raw);
        let (Some(a), Some(b)) = (a, b) else {
            report.push(Diagnostic::IncompleteEdge { record });
            continue;
        };
        let edge_type = fields
            .value(FieldKind::GraphEdgeType, record)
            .and_then(FieldValue::as_raw)
            .and_then(|raw| raw.first().copied());
        edges.push(EdgeTuple {
            endpoint_a: a.to_vec(),
            endpoint_b: b.to_vec(),
            edge_type,
        });
    }
    edges
}
