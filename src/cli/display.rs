use console::style;

use crate::output::RunSummary;

pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", style("error:").red().bold(), message);
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        println!();
        let title = if summary.dry_run {
            "Check complete"
        } else {
            "Compilation complete"
        };
        println!("{}", style(title).bold().cyan());
        println!("{}", style("═".repeat(40)).dim());

        println!(
            "World order:   {}",
            style(summary.world_order.join(" → ")).white()
        );
        println!("Global groups: {}", summary.global_groups);
        if summary.dry_run {
            println!(
                "Worlds:        {} resolved ({} virtual)",
                summary.world_order.len(),
                summary.worlds_virtual
            );
        } else {
            println!(
                "Worlds:        {} written ({} virtual)",
                summary.worlds_written, summary.worlds_virtual
            );
        }

        if !summary.diagnostics.is_empty() {
            println!();
            println!("{}", style("Warnings:").yellow().bold());
            for diagnostic in summary.diagnostics.iter() {
                println!("  {} {}", style("!").yellow(), diagnostic);
            }
        }
        println!();
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
