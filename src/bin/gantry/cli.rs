//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use gantry::TargetType;

/// Gantry - a declarative build-target registry and resolver
#[derive(Parser)]
#[command(name = "gantry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create declarative target input for a new project
    Init(InitArgs),

    /// List registered targets in registration order
    List(ListArgs),

    /// Show the resolved module build order for a target
    Show(ShowArgs),

    /// Emit resolved configuration as JSON for a build driver
    Plan(PlanArgs),

    /// Declare a new target in Gantry.toml
    Add(AddArgs),

    /// Validate every declared target
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Project name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Write the compact script format instead of Gantry.toml
    #[arg(long)]
    pub script: bool,

    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only list targets of this type
    #[arg(long = "type")]
    pub target_type: Option<TargetType>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Target to resolve
    pub target: String,
}

#[derive(Args)]
pub struct PlanArgs {
    /// Target to emit a plan for
    #[arg(required_unless_present = "all")]
    pub target: Option<String>,

    /// Emit plans for every registered target
    #[arg(long, conflicts_with = "target")]
    pub all: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Target name
    pub name: String,

    /// Target type
    #[arg(long = "type", default_value = "game")]
    pub target_type: TargetType,

    /// Module the target builds (repeatable; defaults to the target name)
    #[arg(long = "module")]
    pub modules: Vec<String>,
}

#[derive(Args)]
pub struct CheckArgs {}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
