//! Project discovery and loading.
//!
//! Locates the declarative input for the current project (walking up from
//! a starting directory), parses it, and populates a registry from it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::manifest::Manifest;
use crate::core::registry::TargetRegistry;
use crate::core::script;
use crate::core::target::TargetDefinition;

/// Canonical manifest filename.
pub const MANIFEST_NAME: &str = "Gantry.toml";

/// Compact script filename, accepted as an alternative to the manifest.
pub const SCRIPT_NAME: &str = "targets.gantry";

/// Which declarative format a project uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Script,
}

/// Failure locating a project's declarative input.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error(
        "no Gantry.toml or targets.gantry found in `{dir}` or any parent directory\n\
         help: Run `gantry init` to create a new project",
        dir = .dir.display()
    )]
    NotFound { dir: PathBuf },

    #[error(
        "both `{toml}` and `{script}` exist; remove one",
        toml = .toml.display(),
        script = .script.display()
    )]
    Ambiguous { toml: PathBuf, script: PathBuf },
}

/// Look for declarative input in exactly one directory.
///
/// A directory holding both formats is ambiguous rather than silently
/// preferring one.
fn manifest_in(dir: &Path) -> Result<Option<(PathBuf, ManifestFormat)>, ManifestError> {
    let toml_path = dir.join(MANIFEST_NAME);
    let script_path = dir.join(SCRIPT_NAME);

    match (toml_path.is_file(), script_path.is_file()) {
        (true, true) => Err(ManifestError::Ambiguous {
            toml: toml_path,
            script: script_path,
        }),
        (true, false) => Ok(Some((toml_path, ManifestFormat::Toml))),
        (false, true) => Ok(Some((script_path, ManifestFormat::Script))),
        (false, false) => Ok(None),
    }
}

/// Find the project's declarative input starting at `start` and walking
/// up through parent directories.
pub fn find_manifest(start: &Path) -> Result<(PathBuf, ManifestFormat), ManifestError> {
    let mut current = start.to_path_buf();
    loop {
        if let Some(found) = manifest_in(&current)? {
            return Ok(found);
        }
        if !current.pop() {
            return Err(ManifestError::NotFound {
                dir: start.to_path_buf(),
            });
        }
    }
}

/// Parse declarative input into definitions, declaration order preserved.
///
/// Returns the project name (TOML only) alongside the definitions.
pub fn load_definitions(
    path: &Path,
    format: ManifestFormat,
) -> Result<(Option<String>, Vec<TargetDefinition>)> {
    match format {
        ManifestFormat::Toml => {
            let manifest = Manifest::load(path)?;
            Ok((
                manifest.project.map(|p| p.name),
                manifest.targets,
            ))
        }
        ManifestFormat::Script => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read script: {}", path.display()))?;
            let definitions = script::parse(&content, path)?;
            Ok((None, definitions))
        }
    }
}

/// A loaded project: located declarative input plus the populated registry.
#[derive(Debug)]
pub struct Project {
    /// Directory containing the manifest
    root: PathBuf,

    /// Path to the manifest or script
    manifest_path: PathBuf,

    /// Input format in use
    format: ManifestFormat,

    /// Project name from `[project]`, if declared
    project_name: Option<String>,

    /// Registry populated from the declarations
    registry: TargetRegistry,
}

impl Project {
    /// Locate and load the project containing `start`.
    pub fn locate(start: &Path) -> Result<Self> {
        let (manifest_path, format) = find_manifest(start)?;
        Self::load(&manifest_path, format)
    }

    /// Load a project from a known manifest path.
    ///
    /// Registration stops at the first invalid declaration; `gantry check`
    /// reports all of them instead.
    pub fn load(manifest_path: &Path, format: ManifestFormat) -> Result<Self> {
        let (project_name, definitions) = load_definitions(manifest_path, format)?;

        let mut registry = TargetRegistry::new();
        for definition in definitions {
            registry
                .register(definition)
                .with_context(|| format!("invalid target declaration in {}", manifest_path.display()))?;
        }

        let root = manifest_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        tracing::debug!(
            "loaded project at {} with {} target(s)",
            root.display(),
            registry.len()
        );

        Ok(Project {
            root,
            manifest_path: manifest_path.to_path_buf(),
            format,
            project_name,
            registry,
        })
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the declarative input.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Input format in use.
    pub fn format(&self) -> ManifestFormat {
        self.format
    }

    /// Project name from `[project]`, if declared.
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// The populated target registry.
    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }
}
