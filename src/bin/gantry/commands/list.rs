//! `gantry list` command

use anyhow::Result;

use crate::cli::ListArgs;
use gantry::core::project::Project;
use gantry::Symbol;

pub fn execute(args: ListArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let project = Project::locate(&cwd)?;
    let registry = project.registry();

    if registry.is_empty() {
        println!("no targets declared");
        return Ok(());
    }

    let mut shown = 0;
    for name in registry.list_targets() {
        let Some(definition) = registry.get(name.as_str()) else {
            continue;
        };

        if let Some(filter) = args.target_type {
            if definition.target_type != filter {
                continue;
            }
        }

        let modules: Vec<&str> = definition.modules.iter().map(Symbol::as_str).collect();
        println!(
            "{} ({}): {}",
            definition.name,
            definition.target_type,
            modules.join(", ")
        );
        shown += 1;
    }

    if shown == 0 {
        if let Some(filter) = args.target_type {
            println!("no {} targets declared", filter);
        }
    }

    Ok(())
}
