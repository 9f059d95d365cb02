//! Snippet assembly: descriptor list -> injectable bootstrap fragment.

use crate::embed::{RUNTIME_JS, RuntimeVars};
use crate::hint::HintDescriptor;
use anyhow::Result;

/// Assemble the self-executing bootstrap fragment for a descriptor list.
///
/// The descriptors are embedded as a JSON array literal; the fragment
/// schedules one pass over them after `delay` milliseconds (zero means the
/// next timer tick, not synchronous execution). Output is deterministic for
/// identical input and regenerated fresh every pass.
pub fn assemble(descriptors: &[HintDescriptor], delay: u64) -> Result<String> {
    let params_json = serde_json::to_string(descriptors)?;
    Ok(RUNTIME_JS.render(&RuntimeVars {
        params_json: &params_json,
        delay,
    }))
}
