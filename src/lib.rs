//! Linkhint - resource-hint injection for bundler output.
//!
//! Post-processes a bundler compilation pass: selects chunks by inclusion
//! policy, filters their output files against a blacklist, classifies each
//! survivor into a preload/prefetch link descriptor, and appends a
//! self-contained bootstrap snippet to a designated output asset.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── config/        # HintConfig (rel, include, blacklist, as, delay)
//! ├── compilation    # ChunkSnapshot / Asset / Compilation snapshot types
//! ├── hint/          # select, filter, classify
//! ├── embed/         # runtime.js template + typed variable injection
//! ├── snippet        # descriptor list -> injectable IIFE
//! ├── inject         # append snippet to the target chunk's first asset
//! ├── plugin         # HintPlugin: per-pass pipeline entry point
//! └── logger         # log!/debug! macros with colored prefixes
//! ```
//!
//! # Example
//!
//! ```
//! use linkhint::{Compilation, ChunkSnapshot, HintConfig, HintPlugin};
//!
//! let config = HintConfig::default();
//! let plugin = HintPlugin::new(config);
//!
//! let mut compilation = Compilation::new("/assets/");
//! compilation.add_chunk(
//!     ChunkSnapshot::new(vec!["vendor.js".into()])
//!         .with_name("vendor")
//!         .with_initial(false),
//! );
//!
//! let report = plugin.process(&mut compilation).unwrap();
//! assert_eq!(report.descriptors.len(), 1);
//! assert_eq!(report.descriptors[0].href, "/assets/vendor.js");
//! ```

pub mod compilation;
pub mod config;
mod embed;
pub mod hint;
pub mod inject;
#[doc(hidden)]
pub mod logger;
pub mod plugin;
pub mod snippet;

pub use compilation::{Asset, ChunkSnapshot, Compilation};
pub use config::{AsOverride, ConfigError, HintConfig, IncludePolicy};
pub use hint::{HintDescriptor, classify, filter_files, select_chunks};
pub use inject::{InjectOutcome, inject_snippet};
pub use logger::set_verbose;
pub use plugin::{HintPlugin, PassReport};
pub use snippet::assemble;
