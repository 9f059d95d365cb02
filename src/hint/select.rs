//! Chunk selection by inclusion policy.

use crate::compilation::ChunkSnapshot;
use crate::config::IncludePolicy;
use crate::log;

/// Select the chunks that contribute hint candidates.
///
/// Input order is preserved and no chunk is duplicated.
///
/// Under [`IncludePolicy::AsyncChunks`], a snapshot where any chunk cannot
/// report initiality falls back to including every chunk; the fallback is
/// logged, never silent.
pub fn select_chunks<'a>(
    chunks: &'a [ChunkSnapshot],
    policy: &IncludePolicy,
) -> Vec<&'a ChunkSnapshot> {
    match policy {
        IncludePolicy::AsyncChunks => {
            if chunks.iter().any(|chunk| chunk.initial.is_none()) {
                log!(
                    "warning";
                    "chunk initiality unavailable, falling back to including all {} chunks",
                    chunks.len()
                );
                return chunks.iter().collect();
            }
            chunks
                .iter()
                .filter(|chunk| chunk.initial == Some(false))
                .collect()
        }
        IncludePolicy::All => chunks.iter().collect(),
        IncludePolicy::Chunks(names) => chunks
            .iter()
            .filter(|chunk| {
                // Works only for named chunks
                chunk
                    .name
                    .as_ref()
                    .is_some_and(|name| names.contains(name))
            })
            .collect(),
    }
}
