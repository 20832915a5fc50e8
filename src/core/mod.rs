//! Core data structures for Gantry.
//!
//! This module contains the foundational types:
//! - Target definitions and resolved configurations
//! - The target registry (registration, validation, resolution)
//! - Declarative input parsing (Gantry.toml and target scripts)
//! - Project discovery

pub mod manifest;
pub mod project;
pub mod registry;
pub mod script;
pub mod target;

pub use manifest::Manifest;
pub use project::{find_manifest, ManifestError, ManifestFormat, Project, MANIFEST_NAME, SCRIPT_NAME};
pub use registry::{RegisterError, ResolveError, TargetRegistry};
pub use target::{ResolvedTargetConfig, TargetDefinition, TargetType};
