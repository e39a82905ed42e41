use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::NodeSet;

/// A fully-normalized permission group within one world.
///
/// Every field is present; absent input fields default to empty/false
/// at creation time so merge steps never have to branch on missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub default: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub info: BTreeMap<String, String>,
    pub permissions: NodeSet,
    pub inheritance: NodeSet,
}

/// A partial group as it appears in input YAML.
///
/// Field absence is distinct from an empty value: an absent field leaves
/// the destination untouched when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inheritance: Option<Vec<String>>,
}

impl Group {
    /// Normalize a patch into an owned group: missing fields become
    /// empty/false, declared node lists are copied verbatim (the merge
    /// rule only applies to later patches).
    pub fn from_patch(patch: &GroupPatch) -> Self {
        Self {
            default: patch.default.unwrap_or(false),
            info: patch.info.clone().unwrap_or_default(),
            permissions: NodeSet::from(patch.permissions.clone().unwrap_or_default()),
            inheritance: NodeSet::from(patch.inheritance.clone().unwrap_or_default()),
        }
    }

    /// Apply a patch: declared fields win, absent fields are untouched.
    ///
    /// `default` is last-writer-wins, `info` is a shallow key merge, the
    /// node lists go through the `NodeSet` merge rule.
    pub fn apply(&mut self, patch: &GroupPatch) {
        if let Some(default) = patch.default {
            self.default = default;
        }
        if let Some(info) = &patch.info {
            self.info
                .extend(info.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(permissions) = &patch.permissions {
            self.permissions.merge(permissions.iter().map(String::as_str));
        }
        if let Some(inheritance) = &patch.inheritance {
            self.inheritance.merge(inheritance.iter().map(String::as_str));
        }
    }

    /// Merge another already-normalized group into this one.
    ///
    /// Normalized groups declare every field, so `default` always
    /// overwrites and both node sets always go through the merge rule.
    pub fn merge_from(&mut self, other: &Group) {
        self.default = other.default;
        self.info
            .extend(other.info.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.permissions.merge(other.permissions.iter());
        self.inheritance.merge(other.inheritance.iter());
    }
}

/// Merge a table of normalized groups into a working table.
///
/// Groups not yet present are deep-copied so no world ever aliases
/// another world's resolved group.
pub fn merge_groups(dest: &mut BTreeMap<String, Group>, src: &BTreeMap<String, Group>) {
    for (name, group) in src {
        match dest.entry(name.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().merge_from(group),
            Entry::Vacant(entry) => {
                entry.insert(group.clone());
            }
        }
    }
}

/// Merge a table of patches into a working table, normalizing patches
/// for groups seen for the first time.
pub fn merge_patches(dest: &mut BTreeMap<String, Group>, src: &BTreeMap<String, GroupPatch>) {
    for (name, patch) in src {
        match dest.entry(name.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().apply(patch),
            Entry::Vacant(entry) => {
                entry.insert(Group::from_patch(patch));
            }
        }
    }
}
