//! Embedded runtime resources.
//!
//! Carries the bootstrap JS template (`runtime.js`) and a typed
//! placeholder-substitution mechanism. The template is self-contained: it
//! captures no outer variables, so it can be appended verbatim to any
//! script asset.

use std::marker::PhantomData;

// ============================================================================
// Typed templates
// ============================================================================

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    #[allow(dead_code)]
    pub const fn content(&self) -> &'static str {
        self.content
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

// ============================================================================
// Runtime template
// ============================================================================

/// Variables for runtime.js.
pub struct RuntimeVars<'a> {
    /// JSON array of hint descriptors, embedded as a literal.
    pub params_json: &'a str,
    /// Milliseconds before the hint elements are created.
    pub delay: u64,
}

impl TemplateVars for RuntimeVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__LINKHINT_PARAMS__", self.params_json)
            .replace("__LINKHINT_DELAY__", &self.delay.to_string())
    }
}

/// Bootstrap snippet template: creates one `<link>` per descriptor after
/// the configured delay, iterating with an index-based loop so hint order
/// matches descriptor order in every host environment.
pub const RUNTIME_JS: Template<RuntimeVars<'static>> =
    Template::new(include_str!("runtime.js"));

// ============================================================================
// tests
// ============================================================================
