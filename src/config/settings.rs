use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml_bw::Value;

use crate::error::{ForgeError, Result};

/// The root configuration: declared worlds plus the suffix-eligibility
/// table for local groups.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub worlds: BTreeMap<String, WorldConfig>,
    /// Maps a local group name to the base-group tokens it accepts from
    /// global groups. Key presence is what matters; values are free-form.
    pub groups: BTreeMap<String, BTreeMap<String, Value>>,
}

/// One declared world. Immutable input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub inheritance: Vec<String>,
    /// Output folder override. `Some("")` marks the world as virtual:
    /// it resolves (and can be inherited from) but is never written.
    pub folder: Option<String>,
    pub suffixes: Option<Vec<String>>,
}

impl RootConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml_bw::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate structural problems the resolver does not cover.
    /// Inheritance references are deliberately left to the resolver so
    /// cycles and missing worlds report as one unresolvable set.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for name in self.worlds.keys() {
            if name.is_empty() {
                errors.push("world name must not be empty".to_string());
            }
        }
        for (group, tokens) in &self.groups {
            if group.is_empty() {
                errors.push("group name in suffix table must not be empty".to_string());
            }
            if tokens.is_empty() {
                errors.push(format!(
                    "group '{group}' in suffix table lists no base-group tokens"
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ForgeError::Config(errors.join("; ")))
        }
    }

    /// The base-group tokens a local group accepts, or `None` when the
    /// group is not suffix-eligible at all.
    pub fn suffix_tokens(&self, group: &str) -> Option<&BTreeMap<String, Value>> {
        self.groups.get(group)
    }
}

impl WorldConfig {
    /// The output folder for a world, or `None` for virtual worlds.
    pub fn output_folder<'a>(&'a self, world_name: &'a str) -> Option<&'a str> {
        match self.folder.as_deref() {
            None => Some(world_name),
            Some("") => None,
            Some(folder) => Some(folder),
        }
    }
}
