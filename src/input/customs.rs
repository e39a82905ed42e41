use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::compiler::{CustomWorld, Diagnostic, Diagnostics};
use crate::config::RootConfig;
use crate::error::Result;

use super::yaml_files_sorted;

/// Load per-world custom override files. The world name is the file
/// stem; files naming undeclared worlds are ignored with a diagnostic.
pub fn load_custom_worlds(
    dir: &Path,
    config: &RootConfig,
    diagnostics: &mut Diagnostics,
) -> Result<BTreeMap<String, CustomWorld>> {
    let mut customs = BTreeMap::new();

    for path in yaml_files_sorted(dir)? {
        let world = match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        if !config.worlds.contains_key(&world) {
            diagnostics.push(Diagnostic::UnknownCustomWorld {
                world,
                file: path.display().to_string(),
            });
            continue;
        }

        let content = fs::read_to_string(&path)?;
        let custom: CustomWorld = serde_yaml_bw::from_str(&content)?;
        debug!(world, groups = custom.groups.len(), "loaded world override");
        customs.insert(world, custom);
    }

    Ok(customs)
}
