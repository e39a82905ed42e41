//! Input collaborators: the global-groups directory and the per-world
//! override directory. Read once at the start of a run, read-only
//! afterwards.

mod customs;
mod globals;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

pub use customs::load_custom_worlds;
pub use globals::load_global_groups;

/// YAML files in a directory, sorted by path for deterministic load
/// order. A missing directory is treated as empty.
fn yaml_files_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "input directory missing, treating as empty");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yml" || ext == "yaml");
        if path.is_file() && is_yaml {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
