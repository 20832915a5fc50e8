//! Implementation of `gantry add`.
//!
//! Edits go through `toml_edit` so hand-written formatting and comments in
//! Gantry.toml survive the round trip.

use std::path::Path;

use anyhow::{Context, Result};
use toml_edit::{value, Array, DocumentMut, Item, Table};

use crate::core::target::TargetType;

/// Options for declaring a new target.
#[derive(Debug, Clone)]
pub struct AddOptions {
    /// Target name
    pub name: String,

    /// Target type
    pub target_type: TargetType,

    /// Modules the target builds
    pub modules: Vec<String>,
}

/// Outcome of an add edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The declaration was appended.
    Added,

    /// A target with this name is already declared; the file is untouched.
    AlreadyDeclared,
}

/// Append a target declaration to Gantry.toml, preserving formatting.
pub fn add_target(manifest_path: &Path, opts: &AddOptions) -> Result<AddOutcome> {
    let content = std::fs::read_to_string(manifest_path)
        .with_context(|| format!("failed to read manifest: {}", manifest_path.display()))?;

    let mut doc: DocumentMut = content
        .parse()
        .with_context(|| "failed to parse Gantry.toml")?;

    if !doc.contains_key("targets") {
        doc["targets"] = Item::Table(Table::new());
    }
    let targets = doc["targets"]
        .as_table_mut()
        .context("`targets` is not a table")?;
    // Render only the [targets.<name>] subtables, not a bare [targets].
    targets.set_implicit(true);

    if targets.contains_key(&opts.name) {
        return Ok(AddOutcome::AlreadyDeclared);
    }

    let mut decl = Table::new();
    decl["type"] = value(opts.target_type.as_str());

    let mut modules = Array::new();
    for module in &opts.modules {
        modules.push(module.as_str());
    }
    decl["modules"] = value(modules);

    targets[opts.name.as_str()] = Item::Table(decl);

    std::fs::write(manifest_path, doc.to_string())
        .with_context(|| format!("failed to write manifest: {}", manifest_path.display()))?;

    Ok(AddOutcome::Added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::Manifest;
    use tempfile::TempDir;

    fn write_manifest(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("Gantry.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_add_appends_declaration() {
        let tmp = TempDir::new().unwrap();
        let path = write_manifest(
            &tmp,
            "# project manifest\n[targets.SGame]\ntype = \"game\"\nmodules = [\"SGame\"]\n",
        );

        let opts = AddOptions {
            name: "SGameEditor".to_string(),
            target_type: TargetType::Editor,
            modules: vec!["SGame".to_string(), "SGameEditor".to_string()],
        };
        assert_eq!(add_target(&path, &opts).unwrap(), AddOutcome::Added);

        let content = std::fs::read_to_string(&path).unwrap();
        // The hand-written comment survives the edit.
        assert!(content.contains("# project manifest"));

        let manifest = Manifest::load(&path).unwrap();
        let added = manifest.target("SGameEditor").unwrap();
        assert_eq!(added.target_type, TargetType::Editor);
        assert_eq!(added.modules.len(), 2);
    }

    #[test]
    fn test_add_detects_existing_declaration() {
        let tmp = TempDir::new().unwrap();
        let path = write_manifest(
            &tmp,
            "[targets.SGame]\ntype = \"game\"\nmodules = [\"SGame\"]\n",
        );
        let before = std::fs::read_to_string(&path).unwrap();

        let opts = AddOptions {
            name: "SGame".to_string(),
            target_type: TargetType::Server,
            modules: vec!["SGame".to_string()],
        };
        assert_eq!(add_target(&path, &opts).unwrap(), AddOutcome::AlreadyDeclared);

        // The file is untouched.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_add_to_manifest_without_targets_table() {
        let tmp = TempDir::new().unwrap();
        let path = write_manifest(&tmp, "[project]\nname = \"SGame\"\n");

        let opts = AddOptions {
            name: "SGame".to_string(),
            target_type: TargetType::Game,
            modules: vec!["SGame".to_string()],
        };
        assert_eq!(add_target(&path, &opts).unwrap(), AddOutcome::Added);

        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.target("SGame").is_some());
    }
}
