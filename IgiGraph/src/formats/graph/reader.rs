//! Graph file reading and parsing

use std::path::Path;

use super::assemble::assemble_graph;
use super::decoder::scan_field;
use super::descriptor::{FIELD_TABLE, FieldKind};
use super::document::GraphDocument;
use super::edges::extract_edges;
use super::nodes::extract_nodes;
use super::report::GraphReport;
use super::scanner::find_all_markers;
use super::ParseOptions;
use crate::error::{Error, Result};

/// Read a graph file from disk
///
/// # Errors
///
/// Returns [`Error::FileUnreadable`] if the file cannot be opened or read.
/// With [`ParseOptions::strict`] set, also returns the strict-mode errors of
/// [`parse_graph_bytes_with`].
pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<GraphDocument> {
    read_graph_with(path, &ParseOptions::default())
}

/// Read a graph file from disk with explicit options
pub fn read_graph_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<GraphDocument> {
    let buffer = read_graph_data(path)?;
    parse_graph_bytes_with(&buffer, options)
}

/// Read the raw bytes of a graph file
///
/// # Errors
///
/// Returns [`Error::FileUnreadable`] if the file cannot be opened or read.
pub fn read_graph_data<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tracing::info!("Reading graph file {}", path.display());
    std::fs::read(path).map_err(|source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse graph data from bytes
///
/// Never fails in lenient mode: missing or truncated fields are recorded in
/// the document's report and decoding carries on.
pub fn parse_graph_bytes(data: &[u8]) -> Result<GraphDocument> {
    parse_graph_bytes_with(data, &ParseOptions::default())
}

/// Parse graph data from bytes with explicit options
///
/// # Errors
///
/// In strict mode, returns [`Error::InconsistentSequences`] when field
/// columns disagree in length and [`Error::IncompleteRecords`] when an edge
/// record lacks an endpoint.
pub fn parse_graph_bytes_with(data: &[u8], options: &ParseOptions) -> Result<GraphDocument> {
    let mut report = GraphReport::new();

    let declared_max_nodes = scan_field(FieldKind::MaxNodes.descriptor(), data, 0, data.len())
        .ok()
        .and_then(|decoded| decoded.value.to_le_uint());

    let node_fields = extract_nodes(data, &mut report);
    let edge_fields = extract_edges(data, &mut report);
    let document = assemble_graph(node_fields, edge_fields, declared_max_nodes, options, report)?;

    tracing::info!(
        "Decoded {} nodes, {} edges ({} fields skipped)",
        document.nodes.len(),
        document.edges.len(),
        document.report.skipped_fields()
    );
    Ok(document)
}

/// Count marker occurrences for every descriptor, in table order.
#[must_use]
pub fn marker_census(data: &[u8]) -> Vec<(FieldKind, usize)> {
    FIELD_TABLE
        .iter()
        .map(|desc| (desc.kind, find_all_markers(data, &desc.signature).len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph0.dat");
        match read_graph_data(&path) {
            Err(Error::FileUnreadable { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected FileUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_marker_census_in_table_order() {
        let mut data = FieldKind::NodeId.descriptor().signature.to_vec();
        data.extend_from_slice(&FieldKind::NodeId.descriptor().signature);
        let census = marker_census(&data);
        assert_eq!(census.len(), FIELD_TABLE.len());
        assert_eq!(census[0], (FieldKind::MaxNodes, 0));
        assert_eq!(census[1], (FieldKind::NodeId, 2));
    }
}
