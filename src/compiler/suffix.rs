/// Separator used inside structured global group names.
pub const SEPARATOR: char = '_';

/// A global group name split into its structured parts.
///
/// Valid shapes are `plugin_basegroup` (implicit empty world suffix) and
/// `plugin_basegroup_worldsuffix`. Anything else is rejected and the
/// group takes no part in suffix attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGroupName {
    pub plugin: String,
    pub base_group: String,
    pub world_suffix: String,
}

impl ParsedGroupName {
    pub fn parse(name: &str) -> Option<Self> {
        let parts: Vec<&str> = name.split(SEPARATOR).collect();
        match parts.as_slice() {
            [plugin, base_group] => Some(Self {
                plugin: plugin.to_string(),
                base_group: base_group.to_string(),
                world_suffix: String::new(),
            }),
            [plugin, base_group, world_suffix] => Some(Self {
                plugin: plugin.to_string(),
                base_group: base_group.to_string(),
                world_suffix: world_suffix.to_string(),
            }),
            _ => None,
        }
    }

    /// Whether this group is eligible for a world declaring `suffixes`.
    ///
    /// A two-part name carries the empty world suffix, so it only
    /// matches worlds that explicitly list `""`.
    pub fn applies_to(&self, suffixes: &[String]) -> bool {
        suffixes.iter().any(|suffix| *suffix == self.world_suffix)
    }
}
