//! Graph file inspection
//!
//! Shows the header, marker counts, a node/edge summary and every
//! recoverable problem found while decoding.

use std::path::Path;

use crate::config::GraphConfig;
use crate::formats::graph::{Diagnostic, marker_census, parse_graph_bytes_with, read_graph_data};

pub fn execute(path: &Path, show_fields: bool, config: &GraphConfig) -> anyhow::Result<()> {
    println!("Inspecting graph file: {}", path.display());
    println!();

    let data = read_graph_data(path)?;
    let graph = parse_graph_bytes_with(&data, &config.parse)?;

    println!("Graph File Information");
    println!("======================");
    println!("File size:   {} bytes", data.len());
    match graph.declared_max_nodes {
        Some(n) => println!("Max nodes:   {n}"),
        None => println!("Max nodes:   (not present)"),
    }
    println!("Nodes:       {}", graph.nodes.len());
    println!("Edges:       {}", graph.edges.len());
    println!();

    println!("Markers:");
    println!("--------");
    for (kind, count) in marker_census(&data) {
        let desc = kind.descriptor();
        println!("  {:16} {} | {count:>6}", desc.name, desc.signature_hex());
    }
    println!();

    let id_mismatches = graph
        .report
        .count(|d| matches!(d, Diagnostic::IdMismatch { .. }));
    if id_mismatches > 0 {
        println!("Note: {id_mismatches} node(s) store an id different from their position");
        println!();
    }

    if show_fields {
        println!("Fields:");
        println!("-------");
        for (name, values) in graph.field_dump() {
            println!("  {name}: [{}]", values.join(", "));
        }
        println!();
    }

    let others: Vec<_> = graph
        .report
        .diagnostics
        .iter()
        .filter(|d| !matches!(d, Diagnostic::IdMismatch { .. }))
        .collect();
    if others.is_empty() {
        println!("No problems found");
    } else {
        println!("Diagnostics ({}):", others.len());
        for diagnostic in others {
            println!("  - {diagnostic}");
        }
    }

    Ok(())
}
