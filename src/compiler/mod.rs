//! The resolution engine.
//!
//! Turns the layered inputs (world inheritance, per-world overrides,
//! suffix-matched global groups) into one finalized group table per
//! world:
//! - `NodeSet`: ordered permission nodes with grant/revoke pairing
//! - `Group`, `GroupPatch`: normalized groups and partial input groups
//! - `world_order`: dependency ordering of worlds
//! - `ParsedGroupName`: structured global group names
//! - `Compiler`: the per-world compilation pipeline

mod diagnostics;
mod group;
mod nodeset;
mod order;
mod pipeline;
mod suffix;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use group::{merge_groups, merge_patches, Group, GroupPatch};
pub use nodeset::NodeSet;
pub use order::world_order;
pub use pipeline::{CompileResult, Compiler, CustomWorld, WorldGroups};
pub use suffix::{ParsedGroupName, SEPARATOR};
