//! `gantry check` command

use anyhow::{bail, Result};

use crate::cli::CheckArgs;
use gantry::core::project::{find_manifest, load_definitions};
use gantry::ops::check::check_definitions;
use gantry::util::diagnostic;

pub fn execute(_args: CheckArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (manifest_path, format) = find_manifest(&cwd)?;
    let (_, definitions) = load_definitions(&manifest_path, format)?;

    let report = check_definitions(definitions);

    for failure in &report.failures {
        let diag = failure.to_diagnostic().with_location(manifest_path.clone());
        diagnostic::emit(&diag, true);
    }

    if !report.is_clean() {
        bail!(
            "{} of {} target declaration(s) failed validation",
            report.failures.len(),
            report.total()
        );
    }

    println!("checked {} target(s), no problems found", report.total());
    Ok(())
}
