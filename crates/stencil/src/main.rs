//! # stencil
//!
//! Stencil - Tailwind CSS class name checker.
//!
//! Command-line front end for `vize_stencil`: walks source files, lints them
//! in parallel and reports template expressions found in class names.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Detect template expressions in Tailwind CSS class names", long_about = None)]
#[command(version)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint JS/TS/JSX and Vue SFC files (default command)
    #[command(visible_alias = "check")]
    Lint(commands::lint::LintArgs),
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Lint(args)) => commands::lint::run(args),
        None => commands::lint::run(commands::lint::LintArgs::default()),
    }
}
