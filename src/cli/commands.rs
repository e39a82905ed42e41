use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "permforge")]
#[command(author, version, about = "Compiles layered world permission groups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Output format for the run summary.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile all worlds and write the resolved group files
    Compile {
        #[command(flatten)]
        inputs: InputPaths,

        /// Output directory for the resolved files
        #[arg(long, default_value = "final", env = "PERMFORGE_OUT")]
        out: PathBuf,
    },

    /// Resolve everything and report, without writing any output
    Check {
        #[command(flatten)]
        inputs: InputPaths,
    },
}

#[derive(Args)]
pub struct InputPaths {
    /// Root configuration file
    #[arg(long, default_value = "config.yml", env = "PERMFORGE_CONFIG")]
    pub config: PathBuf,

    /// Directory of plugin-provided global group files
    #[arg(long, default_value = "plugins")]
    pub plugins: PathBuf,

    /// Directory of per-world override files
    #[arg(long, default_value = "worlds")]
    pub worlds: PathBuf,
}
