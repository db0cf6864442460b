//! Field descriptor table
//!
//! Every field in a graph file is introduced by a 4-byte marker, followed by
//! a 4-byte header that is skipped, followed by the payload. The table below
//! is the complete list of markers the decoder understands.

/// How a field's payload bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoding {
    /// Little-endian unsigned integer, kept as raw bytes until assembly.
    RawInteger,
    /// Opaque byte block.
    RawBytes,
    /// Fixed-width text field of `n` bytes, printable ASCII only.
    FixedString(usize),
    /// Three little-endian `f64` values (x, y, z).
    Vector3Double,
    /// One little-endian `f32`.
    Float32,
}

/// Which extraction pass a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
    /// File-level value, read once.
    Header,
    /// Per-node value, read inside node windows.
    Node,
    /// Edge record value, read by the unwindowed edge scan.
    Edge,
}

/// Identifies one entry of [`FIELD_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    MaxNodes,
    NodeId,
    NodePosition,
    NodeGamma,
    NodeRadius,
    NodeMaterial,
    NodeCriteria,
    GraphEdge1,
    GraphEdge2,
    GraphEdgeType,
}

impl FieldKind {
    /// The descriptor for this field.
    #[must_use]
    pub fn descriptor(self) -> &'static FieldDescriptor {
        &FIELD_TABLE[self as usize]
    }
}

/// Static description of one field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub name: &'static str,
    pub signature: [u8; 4],
    pub decoding: Decoding,
    pub payload_length: usize,
    pub scope: FieldScope,
}

impl FieldDescriptor {
    const fn new(
        kind: FieldKind,
        name: &'static str,
        signature: [u8; 4],
        decoding: Decoding,
        payload_length: usize,
        scope: FieldScope,
    ) -> Self {
        Self {
            kind,
            name,
            signature,
            decoding,
            payload_length,
            scope,
        }
    }

    /// Signature formatted as spaced uppercase hex (`04 CE 35 07`).
    #[must_use]
    pub fn signature_hex(&self) -> String {
        self.signature
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Bytes between a marker's first byte and its payload (marker + skipped header).
pub const MARKER_HEADER_LEN: usize = 8;

/// All recognised fields, in extraction order.
#[rustfmt::skip]
pub static FIELD_TABLE: [FieldDescriptor; 10] = [
    FieldDescriptor::new(FieldKind::MaxNodes, "Max Nodes", [0x04, 0xE6, 0x3A, 0x0D], Decoding::RawInteger, 4, FieldScope::Header),
    FieldDescriptor::new(FieldKind::NodeId, "Node Id", [0x04, 0xCE, 0x35, 0x07], Decoding::RawInteger, 4, FieldScope::Node),
    FieldDescriptor::new(FieldKind::NodePosition, "Node Position", [0x04, 0x95, 0x42, 0x1D], Decoding::Vector3Double, 24, FieldScope::Node),
    FieldDescriptor::new(FieldKind::NodeGamma, "Node Gamma", [0x04, 0x9C, 0x7E, 0x0F], Decoding::Float32, 4, FieldScope::Node),
    FieldDescriptor::new(FieldKind::NodeRadius, "Node Radius", [0x04, 0x23, 0x30, 0x14], Decoding::Float32, 4, FieldScope::Node),
    FieldDescriptor::new(FieldKind::NodeMaterial, "Node Material", [0x04, 0x29, 0xB6, 0x1B], Decoding::RawInteger, 1, FieldScope::Node),
    FieldDescriptor::new(FieldKind::NodeCriteria, "Node Criteria", [0x04, 0xE5, 0xD3, 0x1B], Decoding::FixedString(20), 20, FieldScope::Node),
    FieldDescriptor::new(FieldKind::GraphEdge1, "Graph Edge1", [0x04, 0x4A, 0x10, 0x09], Decoding::RawInteger, 2, FieldScope::Edge),
    FieldDescriptor::new(FieldKind::GraphEdge2, "Graph Edge2", [0x04, 0xF6, 0x18, 0x09], Decoding::RawInteger, 2, FieldScope::Edge),
    FieldDescriptor::new(FieldKind::GraphEdgeType, "Graph EdgeType", [0x04, 0x23, 0xA9, 0x0D], Decoding::RawInteger, 1, FieldScope::Edge),
];

/// Descriptors belonging to `scope`, in table order.
pub fn fields_in(scope: FieldScope) -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELD_TABLE.iter().filter(move |d| d.scope == scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_indexes_table() {
        for (i, desc) in FIELD_TABLE.iter().enumerate() {
            assert_eq!(desc.kind as usize, i, "{} is out of place", desc.name);
            assert_eq!(desc.kind.descriptor(), desc);
        }
    }

    #[test]
    fn test_signatures_unique() {
        for (i, a) in FIELD_TABLE.iter().enumerate() {
            for b in &FIELD_TABLE[i + 1..] {
                assert_ne!(a.signature, b.signature, "{} and {} share a marker", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_payload_lengths_match_decoding() {
        for desc in &FIELD_TABLE {
            match desc.decoding {
                Decoding::Vector3Double => assert_eq!(desc.payload_length, 24),
                Decoding::Float32 => assert_eq!(desc.payload_length, 4),
                Decoding::FixedString(n) => assert_eq!(desc.payload_length, n),
                Decoding::RawInteger | Decoding::RawBytes => assert!(desc.payload_length > 0),
            }
        }
    }

    #[test]
    fn test_scopes() {
        let edges: Vec<_> = fields_in(FieldScope::Edge).map(|d| d.kind).collect();
        assert_eq!(
            edges,
            vec![FieldKind::GraphEdge1, FieldKind::GraphEdge2, FieldKind::GraphEdgeType]
        );
        assert_eq!(fields_in(FieldScope::Node).count(), 6);
        assert_eq!(fields_in(FieldScope::Header).count(), 1);
    }

    #[test]
    fn test_signature_hex() {
        assert_eq!(FieldKind::NodeId.descriptor().signature_hex(), "04 CE 35 07");
    }
}
