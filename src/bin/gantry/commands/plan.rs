//! `gantry plan` command

use anyhow::{bail, Context, Result};

use crate::cli::PlanArgs;
use gantry::core::project::Project;
use gantry::ops::plan::{plan_all, BuildPlan};
use gantry::util::diagnostic;

pub fn execute(args: PlanArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let project = Project::locate(&cwd)?;
    let registry = project.registry();

    let json = if args.all {
        let plans = plan_all(registry)?;
        serde_json::to_string_pretty(&plans)?
    } else {
        let Some(name) = args.target.as_deref() else {
            bail!("a target name or --all is required");
        };

        let config = match registry.resolve(name) {
            Ok(config) => config,
            Err(err) => {
                diagnostic::emit(&err.to_diagnostic(), true);
                bail!("could not resolve target `{}`", name);
            }
        };

        BuildPlan::from_config(&config).to_json()?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("     Wrote plan to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
