//! Hint candidate pipeline: chunk selection, file filtering, classification.
//!
//! Pure functions only; each compilation pass calls them in sequence
//! (select -> filter -> classify) over the snapshot and discards the
//! intermediate lists afterwards.

mod classify;
mod filter;
mod select;

pub use classify::{HintDescriptor, classify};
pub use filter::filter_files;
pub use select::select_chunks;
