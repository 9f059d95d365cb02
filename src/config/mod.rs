//! Hint configuration management.
//!
//! `HintConfig` is built once (from TOML or programmatically) and never
//! mutated afterwards; every compilation pass reads the same instance.
//!
//! # Example
//!
//! ```toml
//! rel = "preload"
//! include = "async-chunks"
//! file-blacklist = ["\\.map"]
//! insert-chunk = "runtime"
//! delay = 100
//! ```

mod types;

pub use types::{AsOverride, IncludePolicy};

mod error;
pub use error::ConfigError;

use crate::log;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Relation value that triggers as-type and crossorigin inference.
pub const REL_PRELOAD: &str = "preload";

/// Default blacklist pattern (source maps are never worth hinting).
const DEFAULT_BLACKLIST: &str = r"\.map";

// ============================================================================
// root configuration
// ============================================================================

/// Resource-hint configuration.
///
/// Immutable after construction; a compilation pass only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HintConfig {
    /// Hint relation written into each descriptor ("preload", "prefetch", ...)
    pub rel: String,

    /// Which chunks contribute hint candidates
    pub include: IncludePolicy,

    /// Output files matching ANY of these patterns are dropped
    #[serde(with = "blacklist")]
    pub file_blacklist: Vec<Regex>,

    /// Override for the inferred as-type (fixed value or per-file resolver)
    #[serde(rename = "as", skip_serializing_if = "AsOverride::is_unserialized")]
    pub as_override: AsOverride,

    /// Name of the chunk whose first output file receives the snippet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_chunk: Option<String>,

    /// Milliseconds the runtime waits before creating the hint elements
    pub delay: u64,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            rel: REL_PRELOAD.to_string(),
            include: IncludePolicy::default(),
            // Known-good literal pattern
            file_blacklist: vec![Regex::new(DEFAULT_BLACKLIST).unwrap()],
            as_override: AsOverride::default(),
            insert_chunk: None,
            delay: 0,
        }
    }
}

impl HintConfig {
    /// Parse configuration from a TOML string.
    ///
    /// Unknown keys are warned about but never rejected; callers keep the
    /// permissive behavior hosts rely on.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "unknown config fields, ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // builder setters
    // ========================================================================

    /// Set the hint relation.
    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = rel.into();
        self
    }

    /// Set the chunk inclusion policy.
    pub fn with_include(mut self, include: IncludePolicy) -> Self {
        self.include = include;
        self
    }

    /// Replace the blacklist with pre-compiled patterns.
    pub fn with_blacklist(mut self, patterns: Vec<Regex>) -> Self {
        self.file_blacklist = patterns;
        self
    }

    /// Replace the blacklist, compiling each pattern.
    pub fn try_blacklist(mut self, patterns: &[&str]) -> Result<Self, ConfigError> {
        self.file_blacklist = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| ConfigError::Pattern {
                    pattern: (*p).to_string(),
                    source,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Force a fixed as-type for every descriptor.
    pub fn with_as(mut self, as_type: impl Into<String>) -> Self {
        self.as_override = AsOverride::Fixed(as_type.into());
        self
    }

    /// Resolve the as-type per file path.
    pub fn with_as_resolver(
        mut self,
        resolver: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.as_override = AsOverride::Resolver(Arc::new(resolver));
        self
    }

    /// Set the chunk that receives the assembled snippet.
    pub fn with_insert_chunk(mut self, name: impl Into<String>) -> Self {
        self.insert_chunk = Some(name.into());
        self
    }

    /// Set the runtime delay in milliseconds.
    pub fn with_delay(mut self, delay: u64) -> Self {
        self.delay = delay;
        self
    }

    /// True when the relation triggers as-type/crossorigin inference.
    pub fn is_preload(&self) -> bool {
        self.rel == REL_PRELOAD
    }
}

// ============================================================================
// blacklist (de)serialization
// ============================================================================

/// Serde adapter for `Vec<Regex>` as a list of pattern strings.
mod blacklist {
    use regex::Regex;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(patterns: &[Regex], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(patterns.len()))?;
        for pattern in patterns {
            seq.serialize_element(pattern.as_str())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Regex>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|p| Regex::new(p).map_err(serde::de::Error::custom))
            .collect()
    }
}

// ============================================================================
// tests
// ============================================================================
