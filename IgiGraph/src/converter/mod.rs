//! Format conversion utilities
//!
//! Graph files are decoded once and rendered to JSON; there is no path back
//! to the binary format.

pub mod graph_to_json;

pub use graph_to_json::{
    CriteriaKey, JsonOptions, convert_graph_to_json, graph_to_json_string, write_graph_json,
};
