use clap::Parser;

mod cli;
mod cmd;
mod edgelist;
mod error;
mod io;

use cli::{Cli, Command};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = dispatch(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Demo { payload } => cmd::demo::run(*payload, cli.format),
        Command::Components { file, max_nodes } => {
            cmd::components::run(file, *max_nodes, cli.max_file_size, cli.format)
        }
        Command::Mst { file } => cmd::mst::run(file, cli.max_file_size, cli.format),
    }
}

/// Routes `log` records from this binary and `dsreg-core` to stderr.
///
/// Warnings are shown by default; each `-v` raises the level by one step.
fn init_logging(verbose: u8, quiet: bool) {
    let result = stderrlog::new()
        .module(module_path!())
        .module("dsreg_core")
        .verbosity(1 + usize::from(verbose))
        .quiet(quiet)
        .init();
    if let Err(e) = result {
        eprintln!("warning: logging unavailable: {e}");
    }
}
