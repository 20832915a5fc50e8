//! Gantry CLI - a declarative build-target registry and resolver

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("gantry=debug")
    } else {
        EnvFilter::new("gantry=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::List(args) => commands::list::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Plan(args) => commands::plan::execute(args),
        Commands::Add(args) => commands::add::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
