//! Gantry.toml parsing and schema.
//!
//! The manifest is the canonical declarative input: one `[targets.<name>]`
//! table per build target. Declaration order in the file is the order the
//! targets are handed to the registry.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::target::{TargetDefinition, TargetType};
use crate::util::Symbol;

/// Project metadata from the optional `[project]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMetadata {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default)]
    pub version: Option<String>,

    /// Project description
    #[serde(default)]
    pub description: Option<String>,
}

/// The parsed Gantry.toml manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Project metadata (optional)
    pub project: Option<ProjectMetadata>,

    /// Target definitions, in declaration order
    pub targets: Vec<TargetDefinition>,

    /// The directory containing this manifest
    pub manifest_dir: PathBuf,
}

/// Raw manifest as deserialized from TOML.
///
/// Targets deserialize through `toml::Table` rather than a `HashMap` so the
/// file's declaration order survives into the registry.
#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    project: Option<ProjectMetadata>,

    #[serde(default)]
    targets: toml::Table,
}

/// Raw target from TOML (before processing).
#[derive(Debug, Deserialize)]
struct RawTarget {
    #[serde(rename = "type", default)]
    target_type: TargetType,

    #[serde(default)]
    modules: Vec<String>,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest =
            toml::from_str(content).with_context(|| "failed to parse Gantry.toml")?;

        let manifest_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

        let mut targets = Vec::with_capacity(raw.targets.len());
        for (name, value) in raw.targets {
            let raw_target: RawTarget = value
                .try_into()
                .with_context(|| format!("invalid declaration for target `{}`", name))?;
            targets.push(convert_target(name, raw_target));
        }

        tracing::debug!(
            "parsed {} target declaration(s) from {}",
            targets.len(),
            path.display()
        );

        Ok(Manifest {
            project: raw.project,
            targets,
            manifest_dir,
        })
    }

    /// Get a declared target by name.
    pub fn target(&self, name: &str) -> Option<&TargetDefinition> {
        self.targets.iter().find(|t| t.name.as_str() == name)
    }

    /// Get the project name if a `[project]` section is present.
    pub fn project_name(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.name.as_str())
    }
}

fn convert_target(name: String, raw: RawTarget) -> TargetDefinition {
    TargetDefinition {
        name: Symbol::intern(&name),
        target_type: raw.target_type,
        modules: raw.modules.iter().map(|m| Symbol::intern(m)).collect(),
    }
}
