//! Per-pass pipeline entry point.

use crate::compilation::Compilation;
use crate::config::HintConfig;
use crate::debug;
use crate::hint::{HintDescriptor, classify, filter_files, select_chunks};
use crate::inject::{InjectOutcome, inject_snippet};
use crate::snippet::assemble;
use anyhow::Result;

/// Resource-hint post-processing plugin.
///
/// Holds the immutable configuration; everything else is per-pass state
/// built fresh inside [`process`](Self::process) and returned to the caller,
/// so repeated passes never leak descriptors into each other.
#[derive(Debug, Clone)]
pub struct HintPlugin {
    config: HintConfig,
}

/// Result of one compilation pass.
#[derive(Debug, Clone)]
pub struct PassReport {
    /// Descriptors in discovery order (chunk-major).
    pub descriptors: Vec<HintDescriptor>,

    /// What happened to the assembled snippet.
    pub outcome: InjectOutcome,
}

impl HintPlugin {
    pub fn new(config: HintConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub const fn config(&self) -> &HintConfig {
        &self.config
    }

    /// Run one pass: select -> filter -> classify -> assemble -> inject.
    ///
    /// Synchronous; completion is signaled by the return value. The host
    /// owns pass lifecycle and retries.
    pub fn process(&self, compilation: &mut Compilation) -> Result<PassReport> {
        let selected = select_chunks(&compilation.chunks, &self.config.include);
        let files = filter_files(
            &selected,
            &self.config.file_blacklist,
            &compilation.public_path,
        );

        let descriptors: Vec<HintDescriptor> = files
            .iter()
            .map(|file| classify(file, &self.config))
            .collect();

        let snippet = assemble(&descriptors, self.config.delay)?;
        let outcome = inject_snippet(compilation, self.config.insert_chunk.as_deref(), &snippet);

        debug!(
            "hint";
            "pass complete: {} descriptors, injected: {}",
            descriptors.len(),
            outcome.is_injected()
        );

        Ok(PassReport {
            descriptors,
            outcome,
        })
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compilation::ChunkSnapshot;
    use crate::config::IncludePolicy;

    /// Two-chunk snapshot: an initial entry chunk and an async vendor chunk
    /// with a source map.
    fn snapshot(public_path: &str) -> Compilation {
        let mut compilation = Compilation::new(public_path);
        compilation.add_chunk(
            ChunkSnapshot::new(vec!["main.js".into()])
                .with_name("main")
                .with_initial(true),
        );
        compilation.add_chunk(
            ChunkSnapshot::new(vec!["vendor.js".into(), "vendor.js.map".into()])
                .with_name("vendor")
                .with_initial(false),
        );
        compilation.add_asset("main.js", "var main = 1;");
        compilation.add_asset("vendor.js", "var vendor = 1;");
        compilation
    }

    #[test]
    fn test_end_to_end_default_config() {
        let plugin = HintPlugin::new(HintConfig::default());
        let mut compilation = snapshot("/assets/");

        let report = plugin.process(&mut compilation).unwrap();

        // main excluded as initial, vendor.js.map blacklisted
        assert_eq!(report.descriptors.len(), 1);
        let descriptor = &report.descriptors[0];
        assert_eq!(descriptor.rel, "preload");
        assert_eq!(descriptor.as_type.as_deref(), Some("script"));
        assert!(!descriptor.crossorigin);
        assert_eq!(descriptor.href, "/assets/vendor.js");
    }

    #[test]
    fn test_no_insert_chunk_modifies_nothing() {
        let plugin = HintPlugin::new(HintConfig::default());
        let mut compilation = snapshot("/assets/");

        let report = plugin.process(&mut compilation).unwrap();

        assert_eq!(report.outcome, InjectOutcome::NoTarget);
        assert_eq!(compilation.asset("main.js").unwrap().source(), "var main = 1;");
        assert_eq!(
            compilation.asset("vendor.js").unwrap().source(),
            "var vendor = 1;"
        );
    }

    #[test]
    fn test_injection_into_target_chunk() {
        let config = HintConfig::default().with_insert_chunk("main").with_delay(100);
        let plugin = HintPlugin::new(config);
        let mut compilation = snapshot("/assets/");

        let report = plugin.process(&mut compilation).unwrap();

        assert!(report.outcome.is_injected());
        let main = compilation.asset("main.js").unwrap().source();
        assert!(main.starts_with("var main = 1;"));
        assert!(main.contains("/assets/vendor.js"));
        assert!(main.contains("}, 100);"));
    }

    #[test]
    fn test_passes_are_independent() {
        let plugin = HintPlugin::new(HintConfig::default());
        let mut compilation = snapshot("/assets/");

        let first = plugin.process(&mut compilation).unwrap();
        let second = plugin.process(&mut compilation).unwrap();

        // Fresh descriptor list per pass, no accumulation
        assert_eq!(first.descriptors.len(), 1);
        assert_eq!(second.descriptors.len(), 1);
        assert_eq!(first.descriptors, second.descriptors);
    }

    #[test]
    fn test_include_all_hints_every_surviving_file() {
        let config = HintConfig::default().with_include(IncludePolicy::All);
        let plugin = HintPlugin::new(config);
        let mut compilation = snapshot("/assets/");

        let report = plugin.process(&mut compilation).unwrap();

        let hrefs: Vec<_> = report.descriptors.iter().map(|d| d.href.as_str()).collect();
        assert_eq!(hrefs, ["/assets/main.js", "/assets/vendor.js"]);
    }

    #[test]
    fn test_explicit_chunk_list() {
        let config =
            HintConfig::default().with_include(IncludePolicy::Chunks(vec!["main".into()]));
        let plugin = HintPlugin::new(config);
        let mut compilation = snapshot("/");

        let report = plugin.process(&mut compilation).unwrap();

        assert_eq!(report.descriptors.len(), 1);
        assert_eq!(report.descriptors[0].href, "/main.js");
    }

    #[test]
    fn test_prefetch_descriptors_have_no_as_type() {
        let config = HintConfig::default().with_rel("prefetch");
        let plugin = HintPlugin::new(config);
        let mut compilation = snapshot("/assets/");

        let report = plugin.process(&mut compilation).unwrap();

        assert_eq!(report.descriptors.len(), 1);
        assert_eq!(report.descriptors[0].rel, "prefetch");
        assert!(report.descriptors[0].as_type.is_none());
    }

    #[test]
    fn test_degraded_snapshot_includes_everything() {
        let plugin = HintPlugin::new(HintConfig::default());
        let mut compilation = Compilation::new("/");
        // Host cannot report initiality
        compilation.add_chunk(ChunkSnapshot::new(vec!["a.js".into()]).with_name("a"));
        compilation.add_chunk(ChunkSnapshot::new(vec!["b.js".into()]).with_name("b"));

        let report = plugin.process(&mut compilation).unwrap();

        assert_eq!(report.descriptors.len(), 2);
    }
}
