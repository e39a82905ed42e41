use std::collections::BTreeMap;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use permforge::cli::{Cli, Commands, Display, InputPaths};
use permforge::compiler::{CompileResult, Compiler, Diagnostics, Group};
use permforge::config::RootConfig;
use permforge::error::Result;
use permforge::input::{load_custom_worlds, load_global_groups};
use permforge::output::{OutputStore, OutputWriter, RunSummary};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("permforge=debug")
    } else {
        EnvFilter::new("permforge=warn")
    };

    // Logs go to stderr so `-o json` keeps stdout machine-readable.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let display = Display::new();
    let writer = OutputWriter::new(cli.output);

    match cli.command {
        Commands::Compile { inputs, out } => {
            let run = load_and_compile(&inputs)?;
            let written = OutputStore::new(out).write_all(&run.config, &run.globals, &run.result)?;
            writer.emit_summary(&run.summary(false, written), &display)
        }
        Commands::Check { inputs } => {
            let run = load_and_compile(&inputs)?;
            writer.emit_summary(&run.summary(true, 0), &display)
        }
    }
}

struct CompiledRun {
    config: RootConfig,
    globals: BTreeMap<String, Group>,
    result: CompileResult,
    diagnostics: Diagnostics,
}

impl CompiledRun {
    fn summary(&self, dry_run: bool, worlds_written: usize) -> RunSummary {
        let worlds_virtual = self
            .config
            .worlds
            .iter()
            .filter(|(name, world)| world.output_folder(name).is_none())
            .count();

        RunSummary {
            world_order: self.result.order.clone(),
            global_groups: self.globals.len(),
            worlds_written,
            worlds_virtual,
            dry_run,
            diagnostics: self.diagnostics.clone(),
        }
    }
}

fn load_and_compile(inputs: &InputPaths) -> Result<CompiledRun> {
    let mut diagnostics = Diagnostics::new();

    let config = RootConfig::load(&inputs.config)?;
    let globals = load_global_groups(&inputs.plugins, &mut diagnostics)?;
    let customs = load_custom_worlds(&inputs.worlds, &config, &mut diagnostics)?;

    let result = Compiler::new(&config).compile(&globals, &customs, &mut diagnostics)?;

    Ok(CompiledRun {
        config,
        globals,
        result,
        diagnostics,
    })
}
