//! `gantry init` command

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::InitArgs;
use gantry::ops::scaffold::{init_project, InitOptions};

pub fn execute(args: InitArgs) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from("."));

    let name = match args.name {
        Some(name) => name,
        None => {
            // Canonicalize so `gantry init` in `.` picks up the directory name.
            let canonical = path.canonicalize().unwrap_or_else(|_| path.clone());
            canonical
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("unnamed")
                .to_string()
        }
    };

    let opts = InitOptions {
        name: name.clone(),
        script: args.script,
    };

    let manifest = init_project(&path, &opts)?;

    let file = manifest
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("manifest");
    eprintln!("     Initialized {} with target `{}`", file, name);

    Ok(())
}
