use serde::{Deserialize, Serialize};

/// Ordered collection of permission node strings.
///
/// A node is either a grant (`"essentials.kit"`) or a revoke
/// (`"-essentials.kit"`). The merge rule keeps grant and revoke for the
/// same base name mutually exclusive: an incoming revoke removes a
/// pre-existing grant instead of coexisting with it, and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeSet(Vec<String>);

impl NodeSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, node: &str) -> bool {
        self.0.iter().any(|n| n == node)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Append a node without applying the merge rule.
    ///
    /// Callers must check `contains` first; this is only meant for
    /// recording inheritance-edge references.
    pub fn push(&mut self, node: impl Into<String>) {
        self.0.push(node.into());
    }

    /// Merge an incoming node sequence into the set.
    ///
    /// Incoming grants and revokes take precedence over what is already
    /// present: a revoke `-x` removes a pre-existing grant `x` (and is
    /// itself only kept when there was nothing to remove), a grant `x`
    /// removes a pre-existing revoke `-x` the same way. Nodes already
    /// present verbatim are skipped, so the operation is idempotent.
    pub fn merge<'a>(&mut self, incoming: impl IntoIterator<Item = &'a str>) {
        for node in incoming {
            if self.contains(node) {
                continue;
            }
            let counterpart = match node.strip_prefix('-') {
                Some(base) => base.to_string(),
                None => format!("-{node}"),
            };
            if let Some(pos) = self.0.iter().position(|n| *n == counterpart) {
                self.0.remove(pos);
            } else {
                self.0.push(node.to_string());
            }
        }
    }

    /// Lexicographic sort, applied once when a group is finalized.
    pub fn sort(&mut self) {
        self.0.sort();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for NodeSet {
    fn from(nodes: Vec<String>) -> Self {
        Self(nodes)
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
