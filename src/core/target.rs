//! Core target types.
//!
//! This module contains the declarative `TargetDefinition` record and the
//! read-only `ResolvedTargetConfig` view handed to external build drivers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::Symbol;

/// The kind of build a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Standalone playable build
    Game,

    /// Editor host build with authoring tools
    Editor,

    /// Dedicated server build (no local player)
    Server,

    /// Networked client build
    Client,
}

impl Default for TargetType {
    fn default() -> Self {
        TargetType::Game
    }
}

impl TargetType {
    /// Every variant, in declaration order.
    pub const ALL: [TargetType; 4] = [
        TargetType::Game,
        TargetType::Editor,
        TargetType::Server,
        TargetType::Client,
    ];

    /// The lowercase name used in manifests and scripts.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Game => "game",
            TargetType::Editor => "editor",
            TargetType::Server => "server",
            TargetType::Client => "client",
        }
    }

    /// Check if this build runs without a local player.
    pub fn is_headless(&self) -> bool {
        matches!(self, TargetType::Server)
    }

    /// Check if this build carries authoring tooling.
    pub fn is_editor(&self) -> bool {
        matches!(self, TargetType::Editor)
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a target type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target type `{0}`, expected one of: game, editor, server, client")]
pub struct UnknownTargetTypeError(pub String);

impl FromStr for TargetType {
    type Err = UnknownTargetTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "game" => Ok(TargetType::Game),
            "editor" => Ok(TargetType::Editor),
            "server" => Ok(TargetType::Server),
            "client" => Ok(TargetType::Client),
            _ => Err(UnknownTargetTypeError(s.to_string())),
        }
    }
}

/// Check whether a target or module name is usable: non-empty and free of
/// whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

/// A declared build target with its module list.
///
/// This is plain declarative input; nothing is validated until the
/// definition is handed to a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDefinition {
    /// Target name (unique within a registry)
    pub name: Symbol,

    /// What kind of build this target produces
    #[serde(rename = "type", default)]
    pub target_type: TargetType,

    /// Modules the target builds, in declaration order (= build/link order)
    #[serde(default)]
    pub modules: Vec<Symbol>,
}

impl TargetDefinition {
    /// Create a new definition with the given name and type.
    pub fn new(name: impl Into<Symbol>, target_type: TargetType) -> Self {
        TargetDefinition {
            name: name.into(),
            target_type,
            modules: Vec::new(),
        }
    }

    /// Create a new game target.
    pub fn game(name: impl Into<Symbol>) -> Self {
        Self::new(name, TargetType::Game)
    }

    /// Create a new editor target.
    pub fn editor(name: impl Into<Symbol>) -> Self {
        Self::new(name, TargetType::Editor)
    }

    /// Create a new dedicated server target.
    pub fn server(name: impl Into<Symbol>) -> Self {
        Self::new(name, TargetType::Server)
    }

    /// Create a new client target.
    pub fn client(name: impl Into<Symbol>) -> Self {
        Self::new(name, TargetType::Client)
    }

    /// Replace the module list.
    pub fn with_modules(mut self, modules: impl IntoIterator<Item = impl Into<Symbol>>) -> Self {
        self.modules = modules.into_iter().map(|m| m.into()).collect();
        self
    }

    /// Append a single module.
    pub fn with_module(mut self, module: impl Into<Symbol>) -> Self {
        self.modules.push(module.into());
        self
    }
}

/// An immutable, validated view of a registered target.
///
/// Produced only by [`resolve`](crate::core::registry::TargetRegistry::resolve);
/// callers never get mutable access to the stored definition. Repeated
/// resolutions of the same target compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTargetConfig {
    name: Symbol,
    target_type: TargetType,
    module_list: Vec<Symbol>,
}

impl ResolvedTargetConfig {
    pub(crate) fn new(name: Symbol, target_type: TargetType, module_list: Vec<Symbol>) -> Self {
        ResolvedTargetConfig {
            name,
            target_type,
            module_list,
        }
    }

    /// Target name.
    pub fn name(&self) -> Symbol {
        self.name
    }

    /// Target type, copied verbatim from the definition.
    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    /// Modules in build/link order, deduplicated (first occurrence wins).
    pub fn module_list(&self) -> &[Symbol] {
        &self.module_list
    }
}
