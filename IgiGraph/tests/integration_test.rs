use igigraph::formats::graph::{
    Diagnostic, FieldKind, ParseOptions, parse_graph_bytes, parse_graph_bytes_with, read_graph,
};
use igigraph::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// Marker + 4 filler header bytes + payload.
fn field(kind: FieldKind, payload: &[u8]) -> Vec<u8> {
    let mut buf = kind.descriptor().signature.to_vec();
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(payload);
    buf
}

fn criteria(text: &str) -> [u8; 20] {
    let mut payload = [0u8; 20];
    payload[..text.len()].copy_from_slice(text.as_bytes());
    payload
}

fn position(x: f64, y: f64, z: f64) -> Vec<u8> {
    [x, y, z].iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn node(id: u32, pos: (f64, f64, f64), material: u8, text: &str) -> Vec<u8> {
    let mut buf = field(FieldKind::NodeId, &id.to_le_bytes());
    buf.extend(field(FieldKind::NodePosition, &position(pos.0, pos.1, pos.2)));
    buf.extend(field(FieldKind::NodeGamma, &0.75f32.to_le_bytes()));
    buf.extend(field(FieldKind::NodeRadius, &1.5f32.to_le_bytes()));
    buf.extend(field(FieldKind::NodeMaterial, &[material]));
    buf.extend(field(FieldKind::NodeCriteria, &criteria(text)));
    buf
}

fn edge(a: u16, b: u16, edge_type: u8) -> Vec<u8> {
    let mut buf = field(FieldKind::GraphEdge1, &a.to_le_bytes());
    buf.extend(field(FieldKind::GraphEdge2, &b.to_le_bytes()));
    buf.extend(field(FieldKind::GraphEdgeType, &[edge_type]));
    buf
}

#[test]
fn test_single_node_minimal_buffer() {
    let buf = node(1, (10.126, -4.0, 2.5), 5, "NODECRITERIA_DOOR");
    let graph = parse_graph_bytes(&buf).unwrap();

    assert_eq!(graph.nodes.len(), 1);
    let n = &graph.nodes[0];
    assert_eq!(n.id, 1);
    let pos = n.position.unwrap();
    assert_eq!((pos.x, pos.y, pos.z), (10.13, -4.0, 2.5));
    assert_eq!(n.gamma, Some(0.75));
    assert_eq!(n.radius, Some(1.5));
    assert_eq!(n.material(), Some("StrongMetal"));
    assert_eq!(n.criteria.as_deref(), Some("DOOR"));
    assert!(n.edges().is_empty());
    assert!(graph.report.is_clean());
}

#[test]
fn test_two_nodes_one_edge() {
    let mut buf = node(1, (0.0, 0.0, 0.0), 1, "NODECRITERIA_A");
    buf.extend(node(2, (1.0, 1.0, 1.0), 2, "NODECRITERIA_B"));
    buf.extend(edge(1, 2, 0));

    let graph = parse_graph_bytes(&buf).unwrap();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[0].edges(), vec![2]);
    assert_eq!(graph.nodes[1].edges(), vec![1]);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].edge_type, Some(0));
}

#[test]
fn test_node_count_matches_node_id_markers() {
    let mut buf = vec![0x55; 7];
    for id in 1..=5 {
        buf.extend(node(id, (f64::from(id), 0.0, 0.0), 0, ""));
        buf.extend_from_slice(&[0x99; 3]);
    }
    let graph = parse_graph_bytes(&buf).unwrap();
    assert_eq!(graph.nodes.len(), 5);
    let ids: Vec<u32> = graph.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_every_edge_listed_once_per_tuple() {
    let mut buf = Vec::new();
    for id in 1..=3 {
        buf.extend(node(id, (0.0, 0.0, 0.0), 0, ""));
    }
    buf.extend(edge(1, 2, 0));
    buf.extend(edge(2, 3, 1));
    buf.extend(edge(1, 2, 2));
    buf.extend(edge(3, 1, 0));

    let graph = parse_graph_bytes(&buf).unwrap();
    assert_eq!(graph.nodes[0].edges(), vec![2, 2, 3]);
    assert_eq!(graph.nodes[1].edges(), vec![1, 3, 1]);
    assert_eq!(graph.nodes[2].edges(), vec![2, 1]);
}

#[test]
fn test_unknown_material_and_missing_prefix() {
    let buf = node(1, (0.0, 0.0, 0.0), 99, "PATROL");
    let graph = parse_graph_bytes(&buf).unwrap();
    assert_eq!(graph.nodes[0].material(), Some("UNKNOWN"));
    assert_eq!(graph.nodes[0].criteria.as_deref(), Some(""));
}

#[test]
fn test_truncated_payload_is_skipped() {
    let mut buf = node(1, (1.0, 2.0, 3.0), 3, "NODECRITERIA_X");
    buf.extend(field(FieldKind::NodeId, &2u32.to_le_bytes()));
    buf.extend(field(FieldKind::NodePosition, &position(4.0, 5.0, 6.0)));
    // Gamma marker with only 2 of its 4 payload bytes
    buf.extend(field(FieldKind::NodeGamma, &[0x00, 0x00]));

    let graph = parse_graph_bytes(&buf).unwrap();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[0].gamma, Some(0.75));
    assert_eq!(graph.nodes[1].gamma, None);
    assert_eq!(graph.nodes[1].position.map(|p| p.z), Some(6.0));
    assert!(graph.report.diagnostics.iter().any(|d| matches!(
        d,
        Diagnostic::MalformedPayload { field: "Node Gamma", record: 1, .. }
    )));

    let json = graph_to_json_string(&graph, &JsonOptions::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value[1].get("gamma").is_none());
    assert_eq!(value[1]["z"], 6.0);
}

#[test]
fn test_strict_mode_rejects_incomplete_edges() {
    let mut buf = node(1, (0.0, 0.0, 0.0), 0, "");
    buf.extend(field(FieldKind::GraphEdge1, &1u16.to_le_bytes()));

    assert!(parse_graph_bytes(&buf).is_ok());
    let strict = ParseOptions { strict: true };
    assert!(matches!(
        parse_graph_bytes_with(&buf, &strict),
        Err(Error::IncompleteRecords { count: 1 })
    ));
}

#[test]
fn test_max_nodes_header() {
    let mut buf = field(FieldKind::MaxNodes, &2u32.to_le_bytes());
    buf.extend(node(1, (0.0, 0.0, 0.0), 0, "NODECRITERIA_A"));
    buf.extend(node(2, (0.0, 0.0, 0.0), 0, "NODECRITERIA_B"));

    let graph = parse_graph_bytes(&buf).unwrap();
    assert_eq!(graph.declared_max_nodes, Some(2));
    assert!(graph.report.is_clean());
}

#[test]
fn test_json_output() {
    let mut buf = node(1, (1.0, 2.0, 3.0), 11, "NODECRITERIA_DOOR");
    buf.extend(node(2, (4.0, 5.0, 6.0), 0, ""));
    buf.extend(edge(2, 1, 0));

    let graph = parse_graph_bytes(&buf).unwrap();
    let json = graph_to_json_string(&graph, &JsonOptions::default()).unwrap();
    let expected = r#"[
    {
        "id": 1,
        "x": 1.0,
        "y": 2.0,
        "z": 3.0,
        "gamma": 0.75,
        "radius": 1.5,
        "material": "Concrete",
        "criteria": "DOOR",
        "edges": [
            2
        ]
    },
    {
        "id": 2,
        "x": 4.0,
        "y": 5.0,
        "z": 6.0,
        "gamma": 0.75,
        "radius": 1.5,
        "material": "Air",
        "criteria": "",
        "edges": [
            1
        ]
    }
]"#;
    assert_eq!(json, expected);
    assert_eq!(json, graph_to_json_string(&graph, &JsonOptions::default()).unwrap());
}

#[test]
fn test_file_round_trip_through_converter() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("graph1.dat");
    let dest = dir.path().join("graph1.json");

    let mut buf = node(1, (0.0, 0.0, 0.0), 0, "");
    buf.extend(node(2, (0.0, 0.0, 0.0), 0, ""));
    buf.extend(edge(1, 2, 0));
    std::fs::write(&source, &buf).unwrap();

    let graph = read_graph(&source).unwrap();
    assert_eq!(graph.nodes.len(), 2);

    convert_graph_to_json(&source, &dest, &ParseOptions::default(), &JsonOptions::default())
        .unwrap();
    let written = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(written, graph_to_json_string(&graph, &JsonOptions::default()).unwrap());
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempdir().unwrap();
    let err = read_graph(dir.path().join("nope.dat")).unwrap_err();
    assert!(matches!(err, Error::FileUnreadable { .. }));
}

#[test]
fn test_batch_convert() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    std::fs::create_dir_all(src.path().join("level1")).unwrap();
    std::fs::write(src.path().join("level1/graph1.dat"), node(1, (0.0, 0.0, 0.0), 0, "")).unwrap();
    std::fs::write(src.path().join("graph2.dat"), b"").unwrap();

    let files = find_graph_files(src.path()).unwrap();
    assert_eq!(files.len(), 2);

    let result = batch_convert(
        &files,
        src.path(),
        dst.path(),
        &ParseOptions::default(),
        &JsonOptions::default(),
        |_| {},
    );
    assert_eq!(result.success_count, 2);
    assert_eq!(result.fail_count, 0);
    assert_eq!(
        std::fs::read_to_string(dst.path().join("graph2.json")).unwrap(),
        "[]"
    );
    assert!(dst.path().join("level1/graph1.json").is_file());
}
