//! Output handling: the on-disk result tree and the run summary.
//!
//! - `OutputStore`: buffered, atomic writes of the resolved YAML files
//! - `RunSummary`, `OutputWriter`: text or JSON summary of a run

mod store;
mod summary;

pub use store::OutputStore;
pub use summary::{OutputWriter, RunSummary};
