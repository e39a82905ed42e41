use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::compiler::{Diagnostic, Diagnostics, Group, GroupPatch};
use crate::error::{ForgeError, Result};

use super::yaml_files_sorted;

/// Load every global group from the plugins directory.
///
/// Files are visited in lexicographic filename order so the
/// first-loaded-wins rule for duplicate names is deterministic. A group
/// without a permissions section is a hard error: it indicates a
/// malformed source, not an expected absence. Permission lists are
/// sorted once at load time; bodies are immutable afterwards.
pub fn load_global_groups(dir: &Path, diagnostics: &mut Diagnostics) -> Result<BTreeMap<String, Group>> {
    let mut groups: BTreeMap<String, Group> = BTreeMap::new();

    for path in yaml_files_sorted(dir)? {
        let file = path.display().to_string();
        let content = fs::read_to_string(&path)?;
        let patches: BTreeMap<String, GroupPatch> = serde_yaml_bw::from_str(&content)?;

        for (name, patch) in patches {
            if groups.contains_key(&name) {
                diagnostics.push(Diagnostic::DuplicateGlobalGroup {
                    group: name,
                    file: file.clone(),
                });
                continue;
            }
            if patch.permissions.is_none() {
                return Err(ForgeError::MissingPermissions { group: name, file });
            }

            let mut group = Group::from_patch(&patch);
            group.permissions.sort();
            groups.insert(name, group);
        }
        debug!(file, "loaded global group file");
    }

    Ok(groups)
}
