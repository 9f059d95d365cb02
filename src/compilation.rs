//! Compilation snapshot types.
//!
//! Read-only view of one bundler pass: the chunk list, the public base path,
//! and the mutable output asset map. The host bundler owns the real build
//! graph; this crate only consumes a per-pass snapshot of it and mutates at
//! most one asset's content.

use rustc_hash::FxHashMap;

// ============================================================================
// ChunkSnapshot
// ============================================================================

/// Per-chunk view of the build graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSnapshot {
    /// Chunk name; anonymous chunks have none.
    pub name: Option<String>,

    /// Whether the chunk is part of the initial page load.
    /// `None` when the host cannot report initiality (degraded collaborator).
    pub initial: Option<bool>,

    /// Output file names emitted for this chunk, in emission order.
    pub files: Vec<String>,
}

impl ChunkSnapshot {
    /// Create an anonymous chunk with unknown initiality.
    pub fn new(files: Vec<String>) -> Self {
        Self {
            name: None,
            initial: None,
            files,
        }
    }

    /// Set the chunk name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set whether the chunk belongs to the initial load.
    pub fn with_initial(mut self, initial: bool) -> Self {
        self.initial = Some(initial);
        self
    }
}

// ============================================================================
// Asset
// ============================================================================

/// A mutable output asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    content: String,
}

impl Asset {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Current content.
    pub fn source(&self) -> &str {
        &self.content
    }

    /// Append a fragment to the content.
    pub fn append(&mut self, extra: &str) {
        self.content.push_str(extra);
    }
}

// ============================================================================
// Compilation
// ============================================================================

/// Snapshot of one compilation pass.
#[derive(Debug, Clone, Default)]
pub struct Compilation {
    /// Chunks in build-graph order. Hint priority follows this order.
    pub chunks: Vec<ChunkSnapshot>,

    /// Public base path prefixed onto every emitted file name.
    pub public_path: String,

    /// Output assets by file name.
    pub assets: FxHashMap<String, Asset>,
}

impl Compilation {
    pub fn new(public_path: impl Into<String>) -> Self {
        Self {
            chunks: Vec::new(),
            public_path: public_path.into(),
            assets: FxHashMap::default(),
        }
    }

    /// Append a chunk to the snapshot.
    pub fn add_chunk(&mut self, chunk: ChunkSnapshot) {
        self.chunks.push(chunk);
    }

    /// Register an output asset under its file name.
    pub fn add_asset(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.assets.insert(name.into(), Asset::new(content));
    }

    /// Look up an asset by file name.
    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }
}

// ============================================================================
// tests
// ============================================================================
