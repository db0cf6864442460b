//! Marker search over the raw graph buffer

use memchr::memmem;

/// Offset of the first occurrence of `signature` at or after `from`.
///
/// Never scans backward; returns `None` once `from` is past the end or the
/// marker does not occur again.
#[must_use]
pub fn find_marker(buffer: &[u8], signature: &[u8; 4], from: usize) -> Option<usize> {
    let haystack = buffer.get(from..)?;
    memmem::find(haystack, signature).map(|pos| from + pos)
}

/// Offsets of every non-overlapping occurrence of `signature`, left to right.
#[must_use]
pub fn find_all_markers(buffer: &[u8], signature: &[u8; 4]) -> Vec<usize> {
    memmem::find_iter(buffer, signature).collect()
}
