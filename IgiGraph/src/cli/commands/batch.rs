//! CLI command for batch graph conversion

use std::path::Path;
use std::time::Instant;

use crate::batch::{batch_convert, find_graph_files};
use crate::cli::progress::{GEAR, LOOKING_GLASS, print_done, print_step, simple_bar};
use crate::config::GraphConfig;

pub fn execute(
    source: &Path,
    destination: &Path,
    show_progress: bool,
    config: &GraphConfig,
) -> anyhow::Result<()> {
    let started = Instant::now();

    print_step(1, 2, LOOKING_GLASS, &format!("Finding graph files in {}...", source.display()));
    let files = find_graph_files(source)?;
    if files.is_empty() {
        println!("No graph files found in: {}", source.display());
        return Ok(());
    }

    print_step(2, 2, GEAR, &format!("Converting {} file(s)...", files.len()));
    let pb = show_progress.then(|| simple_bar(files.len() as u64, "Converting"));

    let result = batch_convert(
        &files,
        source,
        destination,
        &config.parse,
        &config.export,
        |progress| {
            if let Some(pb) = &pb {
                pb.set_position(progress.current as u64);
            }
        },
    );

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    for line in &result.results {
        println!("  {line}");
    }
    println!(
        "{} converted, {} failed",
        result.success_count, result.fail_count
    );
    print_done(started.elapsed());

    if result.fail_count > 0 {
        anyhow::bail!("{} of {} file(s) failed", result.fail_count, files.len());
    }
    Ok(())
}
