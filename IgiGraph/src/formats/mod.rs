//! File format handlers

pub mod graph;

// Re-export main document types
pub use graph::{GraphDocument, NodeRecord, ParseOptions, parse_graph_bytes, read_graph};
