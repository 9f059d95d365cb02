//! Snippet injection into the target chunk's first output asset.

use crate::compilation::Compilation;
use crate::debug;

/// What happened to the snippet during injection.
///
/// Every non-injected variant is a defined no-op, never an error; the
/// default configuration (no target chunk) modifies nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectOutcome {
    /// Snippet appended to this asset.
    Injected { file: String },

    /// No target chunk configured.
    NoTarget,

    /// No chunk carries the configured name.
    ChunkNotFound { name: String },

    /// The matched chunk has no output files.
    ChunkHasNoFiles { name: String },

    /// The chunk's first file is not in the assets map.
    AssetMissing { file: String },
}

impl InjectOutcome {
    pub fn is_injected(&self) -> bool {
        matches!(self, Self::Injected { .. })
    }
}

/// Append the assembled snippet to the target chunk's first output asset.
///
/// The target is matched by chunk name; its first output file must exist in
/// the compilation's asset map. Any miss along the way skips injection and
/// reports why.
pub fn inject_snippet(
    compilation: &mut Compilation,
    target: Option<&str>,
    snippet: &str,
) -> InjectOutcome {
    let Some(target) = target else {
        return InjectOutcome::NoTarget;
    };

    let Some(chunk) = compilation
        .chunks
        .iter()
        .find(|chunk| chunk.name.as_deref() == Some(target))
    else {
        debug!("inject"; "target chunk `{}` not found, skipping", target);
        return InjectOutcome::ChunkNotFound {
            name: target.to_string(),
        };
    };

    let Some(file) = chunk.files.first().cloned() else {
        debug!("inject"; "target chunk `{}` has no output files, skipping", target);
        return InjectOutcome::ChunkHasNoFiles {
            name: target.to_string(),
        };
    };

    let Some(asset) = compilation.assets.get_mut(&file) else {
        debug!("inject"; "asset `{}` missing from compilation, skipping", file);
        return InjectOutcome::AssetMissing { file };
    };

    asset.append(snippet);
    InjectOutcome::Injected { file }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compilation::ChunkSnapshot;

    fn compilation() -> Compilation {
        let mut compilation = Compilation::new("/assets/");
        compilation.add_chunk(
            ChunkSnapshot::new(vec!["runtime.js".into(), "runtime.js.map".into()])
                .with_name("runtime")
                .with_initial(true),
        );
        compilation.add_asset("runtime.js", "var r = 1;");
        compilation
    }

    #[test]
    fn test_inject_appends_to_first_file() {
        let mut compilation = compilation();
        let outcome = inject_snippet(&mut compilation, Some("runtime"), "(function(){})();");
        assert_eq!(
            outcome,
            InjectOutcome::Injected {
                file: "runtime.js".into()
            }
        );
        assert_eq!(
            compilation.asset("runtime.js").unwrap().source(),
            "var r = 1;(function(){})();"
        );
    }

    #[test]
    fn test_no_target_is_noop() {
        let mut compilation = compilation();
        let before = compilation.asset("runtime.js").unwrap().source().to_string();
        let outcome = inject_snippet(&mut compilation, None, "SNIPPET");
        assert_eq!(outcome, InjectOutcome::NoTarget);
        assert_eq!(compilation.asset("runtime.js").unwrap().source(), before);
    }

    #[test]
    fn test_unmatched_chunk_is_noop() {
        let mut compilation = compilation();
        let outcome = inject_snippet(&mut compilation, Some("missing"), "SNIPPET");
        assert_eq!(
            outcome,
            InjectOutcome::ChunkNotFound {
                name: "missing".into()
            }
        );
    }

    #[test]
    fn test_chunk_without_files_is_noop() {
        let mut compilation = Compilation::new("");
        compilation.add_chunk(ChunkSnapshot::new(vec![]).with_name("empty"));
        let outcome = inject_snippet(&mut compilation, Some("empty"), "SNIPPET");
        assert_eq!(
            outcome,
            InjectOutcome::ChunkHasNoFiles {
                name: "empty".into()
            }
        );
    }

    #[test]
    fn test_missing_asset_is_noop() {
        let mut compilation = Compilation::new("");
        compilation.add_chunk(ChunkSnapshot::new(vec!["ghost.js".into()]).with_name("ghost"));
        let outcome = inject_snippet(&mut compilation, Some("ghost"), "SNIPPET");
        assert_eq!(
            outcome,
            InjectOutcome::AssetMissing {
                file: "ghost.js".into()
            }
        );
    }
}
