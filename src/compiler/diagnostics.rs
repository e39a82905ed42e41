use std::fmt;

use serde::Serialize;
use tracing::warn;

/// A non-fatal condition observed during a run.
///
/// Diagnostics are collected alongside the result so callers and tests
/// can assert on them structurally instead of parsing log output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A global group name did not split into 2 or 3 parts; the group is
    /// skipped for suffix attachment but still written out.
    InvalidGlobalGroupName { group: String },
    /// Same global group name in two sources; the first one loaded wins.
    DuplicateGlobalGroup { group: String, file: String },
    /// A custom override file names a world the root config never
    /// declared; the file is ignored.
    UnknownCustomWorld { world: String, file: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGlobalGroupName { group } => {
                write!(f, "global group '{group}' has an invalid name and will be ignored")
            }
            Self::DuplicateGlobalGroup { group, file } => {
                write!(f, "global group '{group}' in {file} already defined, ignoring it")
            }
            Self::UnknownCustomWorld { world, file } => {
                write!(f, "override file {file} names undeclared world '{world}', ignoring it")
            }
        }
    }
}

/// Ordered collection of diagnostics for one run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a diagnostic and log it at warn level.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{diagnostic}");
        self.0.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}
