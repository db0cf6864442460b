//! Windowed node field extraction
//!
//! Each "Node Id" marker opens a window that runs to the next "Node Id"
//! marker (or the end of the buffer). Node-scoped fields are looked up only
//! inside their own window, in table order, with an inner cursor that moves
//! past every decoded payload.

use super::columns::FieldColumns;
use super::decoder::scan_field;
use super::descriptor::{FieldKind, FieldScope, fields_in};
use super::report::{Diagnostic, GraphReport};
use super::scanner::find_marker;

/// Extract every node-scoped field, one slot per node window.
pub fn extract_nodes(buffer: &[u8], report: &mut GraphReport) -> FieldColumns {
    tracing::debug!("Extracting node data...");
    let node_marker = &FieldKind::NodeId.descriptor().signature;
    let mut nodes = FieldColumns::new(fields_in(FieldScope::Node));

    let mut search_from = 0;
    while let Some(start) = find_marker(buffer, node_marker, search_from) {
        let end = find_marker(buffer, node_marker, start + node_marker.len())
            .unwrap_or(buffer.len());
        let window = nodes.len();
        tracing::debug!("Node window {window}: {start}..{end}");

        let mut cursor = start;
        for column in &mut nodes.columns {
            match scan_field(column.descriptor, buffer, cursor, end) {
                Ok(decoded) => {
                    cursor = decoded.next;
                    column.values.push(Some(decoded.value));
                }
                Err(miss) => {
                    report.push(Diagnostic::from_miss(column.descriptor, window, miss));
                    column.values.push(None);
                }
            }
        }

        nodes.spans.push(start..end);
        search_from = end;
    }

    tracing::debug!("Found {} node windows", nodes.len());
    nodes
}
