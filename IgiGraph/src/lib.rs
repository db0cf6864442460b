//! # IgiGraph
//!
//! A pure-Rust decoder for Project IGI AI graph files (`graph*.dat`).
//!
//! Graph files hold a level's navigation nodes (position, gamma, radius,
//! material, criteria) and the edges between them. The format has no fixed
//! record layout: each field is located by a 4-byte marker, and a node's
//! fields are tied together only by their position in the stream.
//!
//! ## Quick Start
//!
//! ### Decoding a Graph File
//!
//! ```no_run
//! use igigraph::formats::graph::read_graph;
//!
//! let graph = read_graph("graph4019.dat")?;
//! for node in &graph.nodes {
//!     println!("node {} links to {:?}", node.id, node.edges());
//! }
//! # Ok::<(), igigraph::Error>(())
//! ```
//!
//! ### Converting to JSON
//!
//! ```no_run
//! use igigraph::converter::{convert_graph_to_json, JsonOptions};
//! use igigraph::formats::graph::ParseOptions;
//!
//! convert_graph_to_json(
//!     "graph4019.dat",
//!     "graph4019.json",
//!     &ParseOptions::default(),
//!     &JsonOptions::default(),
//! )?;
//! # Ok::<(), igigraph::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `igigraph` command-line binary

pub mod batch;
pub mod config;
pub mod converter;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::graph::{
        Diagnostic, EdgeTuple, GraphDocument, GraphReport, Material, NodeLink, NodeRecord,
        ParseOptions, parse_graph_bytes, read_graph,
    };
    pub use crate::converter::{
        CriteriaKey, JsonOptions, convert_graph_to_json, graph_to_json_string,
    };
    pub use crate::config::GraphConfig;
    pub use crate::batch::{BatchConvertResult, batch_convert, find_graph_files};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
