pub mod cli;
pub mod compiler;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use compiler::{
    CompileResult, Compiler, CustomWorld, Diagnostic, Diagnostics, Group, GroupPatch, NodeSet,
    WorldGroups,
};
pub use config::{RootConfig, WorldConfig};
pub use error::{ForgeError, Result};
pub use input::{load_custom_worlds, load_global_groups};
pub use output::{OutputStore, RunSummary};
