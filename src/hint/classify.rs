//! Hint descriptor classification.

use crate::config::HintConfig;
use serde::Serialize;

/// A single resource-hint descriptor.
///
/// Serializes to the JSON shape the runtime snippet consumes:
/// `as` is omitted when absent and `crossorigin` is omitted when false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintDescriptor {
    /// Hint relation ("preload", "prefetch", ...).
    pub rel: String,

    /// Resource role; only set for the preload relation.
    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    pub as_type: Option<String>,

    /// Whether the runtime sets the crossorigin attribute.
    #[serde(skip_serializing_if = "is_false")]
    pub crossorigin: bool,

    /// Fetch URL (public path already applied).
    pub href: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Compute the descriptor for one filtered file path.
///
/// Pure and total: identical input always yields identical output, and no
/// string input can make it fail.
///
/// For the preload relation the as-type comes from the configured override
/// (fixed value or per-file resolver) or from extension heuristics, and
/// `crossorigin` is set exactly when the as-type resolves to "font". Any
/// other relation carries neither an as-type nor the crossorigin flag.
pub fn classify(href: &str, config: &HintConfig) -> HintDescriptor {
    if !config.is_preload() {
        return HintDescriptor {
            rel: config.rel.clone(),
            as_type: None,
            crossorigin: false,
            href: href.to_string(),
        };
    }

    let as_type = config
        .as_override
        .resolve(href)
        .unwrap_or_else(|| infer_as_type(href).to_string());
    let crossorigin = as_type == "font";

    HintDescriptor {
        rel: config.rel.clone(),
        as_type: Some(as_type),
        crossorigin,
        href: href.to_string(),
    }
}

/// Extension heuristics for the as-type.
fn infer_as_type(href: &str) -> &'static str {
    if href.ends_with(".css") {
        "style"
    } else if href.ends_with(".woff2") {
        "font"
    } else {
        "script"
    }
}
