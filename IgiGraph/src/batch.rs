//! Batch graph conversion
//!
//! Each file is decoded by its own independent pipeline, so files are
//! converted in parallel on the rayon pool with no shared state beyond the
//! progress counters.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::converter::{JsonOptions, convert_graph_to_json};
use crate::error::Result;
use crate::formats::graph::ParseOptions;

/// Progress update for one file of a batch
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// 1-based index of the file being processed
    pub current: usize,
    pub total: usize,
    /// Path relative to the batch source directory
    pub file: String,
}

/// Result of a batch conversion
#[derive(Debug, Clone)]
pub struct BatchConvertResult {
    /// Number of successful conversions
    pub success_count: usize,
    /// Number of failed conversions
    pub fail_count: usize,
    /// Messages for each file processed
    pub results: Vec<String>,
}

// ============================================================================
// Discovery
// ============================================================================

/// Find all graph (`.dat`) files in a directory recursively
///
/// The extension match is case-insensitive; symlinks are followed.
///
/// # Arguments
/// * `dir` - Directory to search for graph files
///
/// # Returns
/// A sorted list of paths to graph files found in the directory tree.
///
/// # Errors
/// Returns [`Error::WalkDir`](crate::Error::WalkDir) if the directory or any
/// entry below it cannot be read.
pub fn find_graph_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("dat"))
        {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

// ============================================================================
// Conversion
// ============================================================================

/// Convert graph files to JSON in parallel
///
/// Each `graphN.dat` becomes `graphN.json` under `dest_base`, preserving its
/// directory relative to `source_base`. A failing file does not stop the
/// others.
///
/// # Arguments
/// * `files` - Graph files to convert
/// * `source_base` - Base directory of the source (for calculating relative paths)
/// * `dest_base` - Destination directory for the JSON files
/// * `parse_options` - Decoding options applied to every file
/// * `json_options` - Output options applied to every file
/// * `progress` - Callback for progress updates, called once per file
///
/// # Returns
/// Summary of the batch conversion, one message per file in `files` order.
pub fn batch_convert<F>(
    files: &[PathBuf],
    source_base: &Path,
    dest_base: &Path,
    parse_options: &ParseOptions,
    json_options: &JsonOptions,
    progress: F,
) -> BatchConvertResult
where
    F: Fn(&BatchProgress) + Send + Sync,
{
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = files.len();

    let results: Vec<String> = files
        .par_iter()
        .map(|path| {
            // Relative path for display and output structure
            let relative_path = path.strip_prefix(source_base).unwrap_or(path.as_path());
            let display_path = relative_path.to_string_lossy();

            // Update progress (atomic)
            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&BatchProgress {
                current,
                total,
                file: display_path.to_string(),
            });

            let dest = dest_base.join(relative_path).with_extension("json");
            let parent = dest.parent().unwrap_or(dest_base);
            if let Err(e) = std::fs::create_dir_all(parent) {
                fail_counter.fetch_add(1, Ordering::SeqCst);
                return format!("Failed to create folder for {display_path}: {e}");
            }

            let converted =
                convert_graph_to_json(path.as_path(), dest.as_path(), parse_options, json_options);
            match converted {
                Ok(document) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    format!(
                        "Converted: {display_path} ({} nodes, {} edges)",
                        document.nodes.len(),
                        document.edges.len()
                    )
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    format!("Failed {display_path}: {e}")
                }
            }
        })
        .collect();

    BatchConvertResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        results,
    }
}
