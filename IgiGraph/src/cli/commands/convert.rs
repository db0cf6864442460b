//! CLI interface for graph → JSON conversion
use std::io::Write;
use std::path::Path;

use crate::config::GraphConfig;
use crate::converter::{convert_graph_to_json, write_graph_json};
use crate::formats::graph::read_graph_with;

pub fn execute(
    source: &Path,
    destination: Option<&Path>,
    config: &GraphConfig,
) -> anyhow::Result<()> {
    let Some(destination) = destination else {
        // JSON goes to stdout; keep it clean of status lines
        let document = read_graph_with(source, &config.parse)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_graph_json(&document, &mut out, &config.export)?;
        writeln!(out)?;
        return Ok(());
    };

    println!("Converting {} to {}", source.display(), destination.display());
    let document = convert_graph_to_json(source, destination, &config.parse, &config.export)?;

    println!(
        "Wrote {} nodes, {} edges",
        document.nodes.len(),
        document.edges.len()
    );
    let skipped = document.report.skipped_fields();
    if skipped > 0 {
        println!("Skipped {skipped} field(s); run `igigraph inspect` for details");
    }
    println!("Conversion complete");
    Ok(())
}
