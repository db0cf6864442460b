//! Decoded graph document

use glam::DVec3;

use super::columns::FieldColumns;
use super::material::material_name;
use super::report::GraphReport;

/// One neighbour of a node, with the type of the edge that links them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLink {
    pub neighbor: u64,
    pub edge_type: Option<u8>,
}

/// One node of the graph.
///
/// Every field except `id` and `links` is optional: a field whose marker was
/// missing or whose payload was cut short is `None` rather than a default.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    /// Sequential id starting at 1, in discovery order.
    pub id: u32,
    /// The "Node Id" value stored in the file.
    pub source_id: Option<u64>,
    pub position: Option<DVec3>,
    pub gamma: Option<f32>,
    pub radius: Option<f32>,
    pub material_code: Option<u64>,
    /// Text after the `NODECRITERIA_` prefix, empty when there is no prefix.
    pub criteria: Option<String>,
    /// Neighbours in edge discovery order; duplicates are kept.
    pub links: Vec<NodeLink>,
}

impl NodeRecord {
    /// A node with only its id set.
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self {
            id,
            source_id: None,
            position: None,
            gamma: None,
            radius: None,
            material_code: None,
            criteria: None,
            links: Vec::new(),
        }
    }

    /// Material name, `"UNKNOWN"` for codes outside the table.
    #[must_use]
    pub fn material(&self) -> Option<&'static str> {
        self.material_code.map(material_name)
    }

    /// Neighbour ids in edge discovery order.
    #[must_use]
    pub fn edges(&self) -> Vec<u64> {
        self.links.iter().map(|l| l.neighbor).collect()
    }
}

/// One edge as found in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTuple {
    /// Raw little-endian endpoint bytes.
    pub endpoint_a: Vec<u8>,
    pub endpoint_b: Vec<u8>,
    pub edge_type: Option<u8>,
}

/// Everything decoded from one graph file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDocument {
    /// Node count stored in the file header, if present.
    pub declared_max_nodes: Option<u64>,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeTuple>,
    /// Raw node columns, one slot per node window.
    pub node_fields: FieldColumns,
    /// Raw edge columns, one slot per edge record.
    pub edge_fields: FieldColumns,
    pub report: GraphReport,
}

impl GraphDocument {
    #[must_use]
    pub fn node(&self, id: u32) -> Option<&NodeRecord> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.nodes.get(index)
    }

    /// Every decoded value per descriptor, rendered as text.
    ///
    /// Strings are shown as-is, vectors as `x y z`, raw bytes as uppercase
    /// hex. Skipped slots are shown as `-`.
    #[must_use]
    pub fn field_dump(&self) -> Vec<(&'static str, Vec<String>)> {
        self.node_fields
            .columns
            .iter()
            .chain(&self.edge_fields.columns)
            .map(|column| {
                let values = column
                    .values
                    .iter()
                    .map(|v| v.as_ref().map_or_else(|| "-".to_string(), ToString::to_string))
                    .collect();
                (column.descriptor.name, values)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_lookup() {
        let mut node = NodeRecord::new(1);
        assert_eq!(node.material(), None);
        node.material_code = Some(5);
        assert_eq!(node.material(), Some("StrongMetal"));
        node.material_code = Some(99);
        assert_eq!(node.material(), Some("UNKNOWN"));
    }

    #[test]
    fn test_node_by_id() {
        let doc = GraphDocument {
            nodes: vec![NodeRecord::new(1), NodeRecord::new(2)],
            ..GraphDocument::default()
        };
        assert_eq!(doc.node(2).map(|n| n.id), Some(2));
        assert!(doc.node(0).is_none());
        assert!(doc.node(3).is_none());
    }
}
