//! Edge record extraction
//!
//! Edge records are not nested inside node windows, so they are found by a
//! single forward scan of the whole buffer. Each "Graph Edge1" marker starts a
//! record; Edge2 and EdgeType follow it back-to-back and must appear before
//! the next Edge1 marker.

use super::columns::FieldColumns;
use super::decoder::scan_field;
use super::descriptor::{FieldKind, FieldScope, fields_in};
use super::report::{Diagnostic, GraphReport};
use super::scanner::find_marker;

/// Extract every edge record, one slot per Edge1 occurrence.
pub fn extract_edges(buffer: &[u8], report: &mut GraphReport) -> FieldColumns {
    tracing::debug!("Extracting edge data...");
    let edge_marker = &FieldKind::GraphEdge1.descriptor().signature;
    let mut edges = FieldColumns::new(fields_in(FieldScope::Edge));

    let mut search_from = 0;
    while let Some(start) = find_marker(buffer, edge_marker, search_from) {
        let bound = find_marker(buffer, edge_marker, start + edge_marker.len())
            .unwrap_or(buffer.len());
        let record = edges.len();

        let mut cursor = start;
        for column in &mut edges.columns {
            match scan_field(column.descriptor, buffer, cursor, bound) {
                Ok(decoded) => {
                    cursor = decoded.next;
                    column.values.push(Some(decoded.value));
                }
                Err(miss) => {
                    report.push(Diagnostic::from_miss(column.descriptor, record, miss));
                    column.values.push(None);
                }
            }
        }

        edges.spans.push(start..cursor);
        // A record that decoded nothing still has to move past its marker.
        search_from = cursor.max(start + edge_marker.len());
    }

    tracing::debug!("Found {} edge records", edges.len());
    edges
}
