//! `gantry add` command

use anyhow::{bail, Result};

use crate::cli::AddArgs;
use gantry::core::project::{find_manifest, ManifestFormat, SCRIPT_NAME};
use gantry::core::target::is_valid_name;
use gantry::ops::edit::{add_target, AddOptions, AddOutcome};

pub fn execute(args: AddArgs) -> Result<()> {
    if !is_valid_name(&args.name) {
        bail!("`{}` is not a valid target name", args.name);
    }

    let cwd = std::env::current_dir()?;
    let (manifest_path, format) = find_manifest(&cwd)?;

    if format == ManifestFormat::Script {
        bail!(
            "`gantry add` edits Gantry.toml, but this project uses {}\n\
             help: Declare the target directly in the script",
            SCRIPT_NAME
        );
    }

    // A target with no explicit modules builds exactly one module named
    // after itself, same as the init scaffold.
    let modules = if args.modules.is_empty() {
        vec![args.name.clone()]
    } else {
        args.modules.clone()
    };

    let opts = AddOptions {
        name: args.name.clone(),
        target_type: args.target_type,
        modules,
    };

    match add_target(&manifest_path, &opts)? {
        AddOutcome::Added => {
            eprintln!("     Added target `{}` ({})", args.name, args.target_type);
        }
        AddOutcome::AlreadyDeclared => {
            bail!(
                "target `{}` is already declared in {}",
                args.name,
                manifest_path.display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use gantry::TargetType;

    /// Helper to parse AddArgs from command-line strings.
    fn parse_add_args(args: &[&str]) -> AddArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            add: AddArgs,
        }
        let cli = TestCli::parse_from(args);
        cli.add
    }

    #[test]
    fn test_add_args_defaults() {
        let args = parse_add_args(&["test", "SGame"]);

        assert_eq!(args.name, "SGame");
        assert_eq!(args.target_type, TargetType::Game);
        assert!(args.modules.is_empty());
    }

    #[test]
    fn test_add_args_with_type_and_modules() {
        let args = parse_add_args(&[
            "test",
            "SGameEditor",
            "--type",
            "editor",
            "--module",
            "SGame",
            "--module",
            "SGameEditor",
        ]);

        assert_eq!(args.name, "SGameEditor");
        assert_eq!(args.target_type, TargetType::Editor);
        assert_eq!(args.modules, vec!["SGame", "SGameEditor"]);
    }
}
