use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::RootConfig;
use crate::error::Result;

use super::group::{merge_groups, merge_patches};
use super::order::world_order;
use super::suffix::ParsedGroupName;
use super::{Diagnostic, Diagnostics, Group, GroupPatch};

/// The resolved group table for one world. Produced exactly once, in
/// dependency order, and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldGroups {
    pub groups: BTreeMap<String, Group>,
}

/// A per-world custom override file body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomWorld {
    pub groups: BTreeMap<String, GroupPatch>,
}

/// Everything a compile run produces, before any output is written.
#[derive(Debug)]
pub struct CompileResult {
    /// Worlds in the order they were compiled.
    pub order: Vec<String>,
    pub worlds: BTreeMap<String, WorldGroups>,
}

/// The resolution engine. Walks worlds in inheritance order and builds
/// each world's group table from inherited worlds, custom overrides and
/// suffix-matched global groups.
pub struct Compiler<'a> {
    config: &'a RootConfig,
}

impl<'a> Compiler<'a> {
    pub fn new(config: &'a RootConfig) -> Self {
        Self { config }
    }

    pub fn compile(
        &self,
        globals: &BTreeMap<String, Group>,
        customs: &BTreeMap<String, CustomWorld>,
        diagnostics: &mut Diagnostics,
    ) -> Result<CompileResult> {
        let order = world_order(&self.config.worlds)?;

        // Parse structured global names once; invalid names warn once
        // per run and never take part in attachment.
        let mut parsed_globals: Vec<(&str, ParsedGroupName)> = Vec::new();
        for name in globals.keys() {
            match ParsedGroupName::parse(name) {
                Some(parsed) => parsed_globals.push((name, parsed)),
                None => diagnostics.push(Diagnostic::InvalidGlobalGroupName {
                    group: name.clone(),
                }),
            }
        }

        let mut resolved: BTreeMap<String, WorldGroups> = BTreeMap::new();

        for world in &order {
            let world_config = &self.config.worlds[world];
            let mut groups: BTreeMap<String, Group> = BTreeMap::new();

            // Inherited worlds first, in declared list order. Their
            // tables are already finalized, so merging copies values
            // rather than aliasing them.
            for inherited in &world_config.inheritance {
                merge_groups(&mut groups, &resolved[inherited].groups);
            }

            if let Some(custom) = customs.get(world) {
                merge_patches(&mut groups, &custom.groups);
            }

            if let Some(suffixes) = &world_config.suffixes {
                self.attach_global_groups(&mut groups, &parsed_globals, suffixes);
            }

            for group in groups.values_mut() {
                group.permissions.sort();
                group.inheritance.sort();
            }

            debug!(world, groups = groups.len(), "world finalized");
            resolved.insert(world.clone(), WorldGroups { groups });
        }

        info!(worlds = order.len(), "compilation finished");
        Ok(CompileResult {
            order,
            worlds: resolved,
        })
    }

    /// Attach eligible global groups as inheritance-edge references.
    ///
    /// Candidates are the suffix-eligible group names from the root
    /// config; a local group is created (normalized empty) on its first
    /// attachment. Only the name is recorded; the group body stays in
    /// the global table and is resolved by whoever consumes the output.
    fn attach_global_groups(
        &self,
        groups: &mut BTreeMap<String, Group>,
        parsed_globals: &[(&str, ParsedGroupName)],
        suffixes: &[String],
    ) {
        for (global_name, parsed) in parsed_globals {
            if !parsed.applies_to(suffixes) {
                continue;
            }
            for (local_name, tokens) in &self.config.groups {
                if !tokens.contains_key(&parsed.base_group) {
                    continue;
                }
                let group = groups.entry(local_name.clone()).or_default();
                if !group.inheritance.contains(global_name) {
                    group.inheritance.push(*global_name);
                }
            }
        }
    }
}
