//! `gantry show` command

use anyhow::{bail, Result};

use crate::cli::ShowArgs;
use gantry::core::project::Project;
use gantry::util::diagnostic;

pub fn execute(args: ShowArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let project = Project::locate(&cwd)?;

    let config = match project.registry().resolve(&args.target) {
        Ok(config) => config,
        Err(err) => {
            diagnostic::emit(&err.to_diagnostic(), true);
            bail!("could not resolve target `{}`", args.target);
        }
    };

    println!(
        "Module build order for '{}' ({}):",
        config.name(),
        config.target_type()
    );
    println!();

    for (index, module) in config.module_list().iter().enumerate() {
        println!("  {}. {}", index + 1, module);
    }

    Ok(())
}
