use serde::Serialize;

use crate::cli::{Display, OutputFormat};
use crate::compiler::Diagnostics;
use crate::error::Result;

/// What a run did, for the terminal or a machine consumer.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub world_order: Vec<String>,
    pub global_groups: usize,
    pub worlds_written: usize,
    pub worlds_virtual: usize,
    /// True for `check` runs: everything resolved, nothing written.
    pub dry_run: bool,
    pub diagnostics: Diagnostics,
}

/// Emits the run summary in the configured output format.
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn emit_summary(&self, summary: &RunSummary, display: &Display) -> Result<()> {
        match self.format {
            OutputFormat::Text => display.print_summary(summary),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        }
        Ok(())
    }
}
