//! Flattening and blacklist filtering of chunk output files.

use crate::compilation::ChunkSnapshot;
use regex::Regex;

/// Flatten the selected chunks' output files and drop blacklisted ones.
///
/// Files keep chunk-major order (chunk order, then file order within the
/// chunk) since hint priority follows discovery order. One blacklist match
/// is enough to drop a file. Survivors are prefixed with the public base
/// path verbatim. Duplicates are kept: a file emitted by two chunks is
/// hinted twice.
pub fn filter_files(
    chunks: &[&ChunkSnapshot],
    blacklist: &[Regex],
    public_path: &str,
) -> Vec<String> {
    chunks
        .iter()
        .flat_map(|chunk| chunk.files.iter())
        .filter(|file| !blacklist.iter().any(|pattern| pattern.is_match(file)))
        .map(|file| format!("{public_path}{file}"))
        .collect()
}
