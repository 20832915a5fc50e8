//! Implementation of `gantry init`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::project::{MANIFEST_NAME, SCRIPT_NAME};
use crate::core::target::is_valid_name;

/// Options for scaffolding a project.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Project (and initial target) name
    pub name: String,

    /// Write the compact script format instead of Gantry.toml
    pub script: bool,
}

/// Create declarative input for a new project in `dir`.
///
/// The scaffold declares one game target whose single module is the
/// project name.
pub fn init_project(dir: &Path, opts: &InitOptions) -> Result<PathBuf> {
    if !is_valid_name(&opts.name) {
        bail!("`{}` is not a valid project name", opts.name);
    }

    for existing in [MANIFEST_NAME, SCRIPT_NAME] {
        if dir.join(existing).is_file() {
            bail!("`{}` already exists in {}", existing, dir.display());
        }
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;

    let (file, content) = if opts.script {
        (
            SCRIPT_NAME,
            format!(
                "# {} build targets\ntarget {} type=game modules={}\n",
                opts.name, opts.name, opts.name
            ),
        )
    } else {
        (
            MANIFEST_NAME,
            format!(
                "[project]\nname = \"{0}\"\n\n[targets.{0}]\ntype = \"game\"\nmodules = [\"{0}\"]\n",
                opts.name
            ),
        )
    };

    let path = dir.join(file);
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::project::Project;
    use tempfile::TempDir;

    #[test]
    fn test_init_manifest_scaffold_loads() {
        let tmp = TempDir::new().unwrap();
        let opts = InitOptions {
            name: "SGame".to_string(),
            script: false,
        };

        let path = init_project(tmp.path(), &opts).unwrap();
        assert_eq!(path.file_name().unwrap(), MANIFEST_NAME);

        let project = Project::locate(tmp.path()).unwrap();
        assert_eq!(project.project_name(), Some("SGame"));
        let config = project.registry().resolve("SGame").unwrap();
        assert_eq!(config.module_list().len(), 1);
    }

    #[test]
    fn test_init_script_scaffold_loads() {
        let tmp = TempDir::new().unwrap();
        let opts = InitOptions {
            name: "SGame".to_string(),
            script: true,
        };

        let path = init_project(tmp.path(), &opts).unwrap();
        assert_eq!(path.file_name().unwrap(), SCRIPT_NAME);

        let project = Project::locate(tmp.path()).unwrap();
        assert!(project.registry().contains("SGame"));
    }

    #[test]
    fn test_init_refuses_existing_input() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(MANIFEST_NAME), "").unwrap();

        let opts = InitOptions {
            name: "SGame".to_string(),
            script: true,
        };
        let err = init_project(tmp.path(), &opts).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_init_rejects_invalid_name() {
        let tmp = TempDir::new().unwrap();
        let opts = InitOptions {
            name: "S Game".to_string(),
            script: false,
        };
        let err = init_project(tmp.path(), &opts).unwrap_err();
        assert!(err.to_string().contains("not a valid project name"));
    }
}
