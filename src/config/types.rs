//! Configuration value types: inclusion policy and as-type override.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// IncludePolicy
// ============================================================================

/// Which chunks contribute hint candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IncludePolicy {
    /// Chunks not part of the initial page load (default).
    #[default]
    AsyncChunks,

    /// Every chunk: async, vendor, normal.
    All,

    /// Only chunks whose name appears in the list. Nameless chunks never match.
    Chunks(Vec<String>),
}

impl Serialize for IncludePolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::AsyncChunks => serializer.serialize_str("async-chunks"),
            Self::All => serializer.serialize_str("all"),
            Self::Chunks(names) => names.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for IncludePolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Preset(String),
            Chunks(Vec<String>),
        }

        match Raw::deserialize(deserializer)? {
            // "asyncChunks" kept for compatibility with older configs
            Raw::Preset(s) => match s.as_str() {
                "async-chunks" | "asyncChunks" => Ok(Self::AsyncChunks),
                "all" => Ok(Self::All),
                other => Err(de::Error::custom(format!(
                    "unknown include policy `{other}` (expected \"async-chunks\", \"all\", or a chunk name list)"
                ))),
            },
            Raw::Chunks(names) => Ok(Self::Chunks(names)),
        }
    }
}

// ============================================================================
// AsOverride
// ============================================================================

/// Per-file resolver for the as-type.
pub type AsResolver = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How the as-type of a preload descriptor is determined.
#[derive(Clone, Default)]
pub enum AsOverride {
    /// Infer from the file extension (default).
    #[default]
    Infer,

    /// Use one fixed value for every file.
    Fixed(String),

    /// Ask a resolver function per file path. Not expressible in TOML;
    /// set via [`HintConfig::with_as_resolver`](crate::HintConfig::with_as_resolver).
    Resolver(AsResolver),
}

impl AsOverride {
    /// Resolve the override for a file path; `None` means "infer".
    pub fn resolve(&self, href: &str) -> Option<String> {
        match self {
            Self::Infer => None,
            Self::Fixed(value) => Some(value.clone()),
            Self::Resolver(resolver) => Some(resolver(href)),
        }
    }

    /// True for the default (inferring) variant.
    pub fn is_infer(&self) -> bool {
        matches!(self, Self::Infer)
    }

    /// True when the override has no textual form (skipped when serializing).
    pub(crate) fn is_unserialized(&self) -> bool {
        !matches!(self, Self::Fixed(_))
    }
}

impl fmt::Debug for AsOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infer => write!(f, "Infer"),
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Resolver(_) => write!(f, "Resolver(..)"),
        }
    }
}

impl Serialize for AsOverride {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Fixed(value) => serializer.serialize_str(value),
            // Infer is skipped by the parent; Resolver has no textual form
            Self::Infer | Self::Resolver(_) => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for AsOverride {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::Fixed(String::deserialize(deserializer)?))
    }
}

// ============================================================================
// tests
// ============================================================================
