use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::compiler::{CompileResult, Group};
use crate::config::RootConfig;
use crate::error::{ForgeError, Result};

const GLOBAL_GROUPS_FILE: &str = "globalgroups.yml";
const WORLD_GROUPS_FILE: &str = "groups.yml";

#[derive(Serialize)]
struct GroupsDoc<'a> {
    groups: &'a BTreeMap<String, Group>,
}

/// Writes the compiled output tree.
///
/// Nothing is written until the whole run has succeeded; each file is
/// then written atomically (temp file plus rename) so a crash never
/// leaves a half-written groups file behind.
pub struct OutputStore {
    out_dir: PathBuf,
}

impl OutputStore {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Write the global-groups file plus one groups file per
    /// non-virtual world. Returns how many worlds were written.
    pub fn write_all(
        &self,
        config: &RootConfig,
        globals: &BTreeMap<String, Group>,
        result: &CompileResult,
    ) -> Result<usize> {
        fs::create_dir_all(&self.out_dir)?;
        self.write_yaml(
            &self.out_dir.join(GLOBAL_GROUPS_FILE),
            &GroupsDoc { groups: globals },
        )?;

        let mut written = 0;
        for (world, world_config) in &config.worlds {
            let Some(folder) = world_config.output_folder(world) else {
                debug!(world, "virtual world, skipping output");
                continue;
            };
            let resolved = result
                .worlds
                .get(world)
                .ok_or_else(|| ForgeError::WorldNotCompiled(world.clone()))?;

            let world_dir = self.out_dir.join(folder);
            fs::create_dir_all(&world_dir)?;
            self.write_yaml(
                &world_dir.join(WORLD_GROUPS_FILE),
                &GroupsDoc {
                    groups: &resolved.groups,
                },
            )?;
            written += 1;
        }

        Ok(written)
    }

    fn write_yaml<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let content = serde_yaml_bw::to_string(value)?;
        let tmp_path = path.with_extension("yml.tmp");
        fs::write(&tmp_path, &content)?;
        fs::rename(&tmp_path, path)?;
        debug!(path = %path.display(), "wrote output file");
        Ok(())
    }
}
