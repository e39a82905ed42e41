//! Configuration types and loading.
//!
//! - `RootConfig`: declared worlds plus the group suffix-eligibility table
//! - `WorldConfig`: one world's inheritance, folder and suffix declarations

mod settings;

pub use settings::{RootConfig, WorldConfig};
