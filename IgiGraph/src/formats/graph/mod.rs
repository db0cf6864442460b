//! Graph file (`graph*.dat`) format
//!
//! Project IGI stores each level's AI navigation graph in an undocumented
//! binary stream. Fields are not at fixed offsets; every value is introduced
//! by a 4-byte marker (see [`FIELD_TABLE`]). Decoding is two independent
//! passes over the same buffer:
//!
//! - node fields are read inside windows delimited by "Node Id" markers
//! - edge records are read by one unwindowed forward scan
//!
//! The resulting columns are joined by position into [`NodeRecord`]s.

mod assemble;
mod columns;
mod decoder;
mod descriptor;
mod document;
mod edges;
mod material;
mod nodes;
mod reader;
mod report;
mod scanner;

pub use assemble::{CRITERIA_PREFIX, assemble_graph, extract_criteria};
pub use columns::{FieldColumn, FieldColumns};
pub use decoder::{Decoded, FieldValue, ScanMiss, be_uint, decode_at, le_uint, scan_field};
pub use descriptor::{
    Decoding, FIELD_TABLE, FieldDescriptor, FieldKind, FieldScope, MARKER_HEADER_LEN, fields_in,
};
pub use document::{EdgeTuple, GraphDocument, NodeLink, NodeRecord};
pub use edges::extract_edges;
pub use material::{Material, UNKNOWN_MATERIAL, material_name};
pub use nodes::extract_nodes;
pub use reader::{
    marker_census, parse_graph_bytes, parse_graph_bytes_with, read_graph, read_graph_data,
    read_graph_with,
};
pub use report::{Diagnostic, GraphReport};
pub use scanner::{find_all_markers, find_marker};

use serde::{Deserialize, Serialize};

/// Options controlling how strictly a graph file is decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fail on misaligned field columns or incomplete edge records instead
    /// of reporting them.
    pub strict: bool,
}
