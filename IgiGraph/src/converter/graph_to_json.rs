//! Graph → JSON conversion
//!
//! Output is an array of node objects with keys `id, x, y, z, gamma, radius,
//! material, criteria, edges`. Fields that were not decoded for a node are
//! left out of that node's object.
//!
//! Key order is fixed by the hand-written `Serialize` impls below; the
//! optional keys (`source_id`, `edge_types`) and the renameable criteria key
//! sit between the fixed ones. `gamma` and `radius` are written as the exact
//! `f64` value of the stored `f32`.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::formats::graph::{GraphDocument, NodeRecord, ParseOptions, read_graph_with};

// ============================================================================
// Options
// ============================================================================

/// Key under which a node's criteria text is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriteriaKey {
    #[default]
    Criteria,
    /// Key read by the legacy desktop viewer.
    Description,
}

impl CriteriaKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CriteriaKey::Criteria => "criteria",
            CriteriaKey::Description => "description",
        }
    }
}

impl fmt::Display for CriteriaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriteriaKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "criteria" => Ok(CriteriaKey::Criteria),
            "description" => Ok(CriteriaKey::Description),
            _ => Err(format!(
                "Invalid criteria key '{s}'. Valid values: criteria, description"
            )),
        }
    }
}

/// Options for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Add an `edge_types` array parallel to `edges`.
    pub include_edge_types: bool,
    /// Add the `source_id` stored in the file next to the assigned `id`.
    pub include_source_ids: bool,
    /// Write every `z` as 0.
    pub flatten_height: bool,
    pub criteria_key: CriteriaKey,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            include_edge_types: false,
            include_source_ids: false,
            flatten_height: false,
            criteria_key: CriteriaKey::Criteria,
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// One node object, keyed per [`JsonOptions`].
struct NodeJson<'a> {
    node: &'a NodeRecord,
    options: &'a JsonOptions,
}

impl Serialize for NodeJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let node = self.node;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &node.id)?;
        if self.options.include_source_ids {
            map.serialize_entry("source_id", &node.source_id)?;
        }
        if let Some(pos) = node.position {
            map.serialize_entry("x", &pos.x)?;
            map.serialize_entry("y", &pos.y)?;
            let z = if self.options.flatten_height { 0.0 } else { pos.z };
            map.serialize_entry("z", &z)?;
        }
        if let Some(gamma) = node.gamma {
            map.serialize_entry("gamma", &f64::from(gamma))?;
        }
        if let Some(radius) = node.radius {
            map.serialize_entry("radius", &f64::from(radius))?;
        }
        if let Some(material) = node.material() {
            map.serialize_entry("material", material)?;
        }
        if let Some(criteria) = &node.criteria {
            map.serialize_entry(self.options.criteria_key.as_str(), criteria)?;
        }
        map.serialize_entry("edges", &node.edges())?;
        if self.options.include_edge_types {
            let types: Vec<Option<u8>> = node.links.iter().map(|l| l.edge_type).collect();
            map.serialize_entry("edge_types", &types)?;
        }
        map.end()
    }
}

/// The top-level array of node objects.
struct NodesJson<'a> {
    nodes: &'a [NodeRecord],
    options: &'a JsonOptions,
}

impl Serialize for NodesJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.nodes.len()))?;
        for node in self.nodes {
            seq.serialize_element(&NodeJson {
                node,
                options: self.options,
            })?;
        }
        seq.end()
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Write the document's nodes as JSON to `writer`
///
/// # Arguments
/// * `document` - Decoded graph
/// * `writer` - Destination; not flushed
/// * `options` - Indentation and optional keys
///
/// # Errors
/// Returns [`Error::Json`](crate::Error::Json) if serialization or the
/// underlying write fails.
pub fn write_graph_json<W: Write>(
    document: &GraphDocument,
    writer: W,
    options: &JsonOptions,
) -> Result<()> {
    let indent = " ".repeat(options.indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    NodesJson {
        nodes: &document.nodes,
        options,
    }
    .serialize(&mut serializer)?;
    Ok(())
}

/// Render the document's nodes as a JSON string
///
/// # Returns
/// The same bytes [`write_graph_json`] would write, as a `String`.
pub fn graph_to_json_string(document: &GraphDocument, options: &JsonOptions) -> Result<String> {
    let mut out = Vec::new();
    write_graph_json(document, &mut out, options)?;
    Ok(String::from_utf8(out)?)
}

/// Convert a graph file to a JSON file
///
/// # Arguments
/// * `source` - Path to the `graph*.dat` file
/// * `dest` - Path of the JSON file to create (overwritten if present)
/// * `parse_options` - Decoding options
/// * `json_options` - Output options
///
/// # Returns
/// The decoded document, so callers can report node/edge counts and
/// diagnostics.
///
/// # Errors
/// Returns [`Error::FileUnreadable`](crate::Error::FileUnreadable) if the
/// source cannot be read, the strict-mode errors of
/// [`parse_graph_bytes_with`](crate::formats::graph::parse_graph_bytes_with),
/// or an IO/JSON error while writing.
pub fn convert_graph_to_json<P: AsRef<Path>>(
    source: P,
    dest: P,
    parse_options: &ParseOptions,
    json_options: &JsonOptions,
) -> Result<GraphDocument> {
    tracing::info!(
        "Converting graph→JSON: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    let document = read_graph_with(source.as_ref(), parse_options)?;
    let mut writer = BufWriter::new(File::create(dest.as_ref())?);
    write_graph_json(&document, &mut writer, json_options)?;
    writer.flush()?;

    tracing::info!("Conversion complete");
    Ok(document)
}
