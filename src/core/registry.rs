//! Target registry - registration, validation, and resolution.
//!
//! The registry exclusively owns every definition registered with it and
//! hands out only resolved, read-only configurations. Registration is the
//! single validation gate: a definition either passes every check and is
//! stored, or the registry is left exactly as it was.
//!
//! Population happens through `&mut self` and queries through `&self`, so
//! the borrow checker enforces the intended lifecycle: one owner registers
//! sequentially, then any number of readers resolve concurrently against
//! immutable snapshots.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::core::target::{is_valid_name, ResolvedTargetConfig, TargetDefinition};
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::Symbol;

/// Error registering a target definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// Target name is empty or contains whitespace.
    #[error("invalid target name `{name}`")]
    InvalidName { name: String },

    /// A module entry is empty or contains whitespace.
    #[error("target `{target}` declares invalid module name `{module}`")]
    InvalidModule { target: String, module: String },

    /// The definition lists no modules at all.
    #[error("target `{target}` declares no modules")]
    EmptyModuleList { target: String },

    /// Another definition with this name is already stored.
    #[error("target `{target}` is already registered")]
    DuplicateTarget { target: String },
}

impl RegisterError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RegisterError::InvalidName { name } => {
                Diagnostic::error(format!("`{}` is not a valid target name", name))
                    .with_context("target names must be non-empty and contain no whitespace")
                    .with_suggestion(suggestions::FIX_DECLARATION)
            }

            RegisterError::InvalidModule { target, module } => {
                Diagnostic::error(format!(
                    "target `{}` declares invalid module name `{}`",
                    target, module
                ))
                .with_context("module names must be non-empty and contain no whitespace")
                .with_suggestion(suggestions::FIX_DECLARATION)
            }

            RegisterError::EmptyModuleList { target } => {
                Diagnostic::error(format!("target `{}` declares no modules", target))
                    .with_context("every target must build at least one module")
                    .with_suggestion(format!(
                        "Add a modules entry, e.g. modules = [\"{}\"]",
                        target
                    ))
            }

            RegisterError::DuplicateTarget { target } => {
                Diagnostic::error(format!("target `{}` is already registered", target))
                    .with_suggestion("Remove the duplicate declaration".to_string())
            }
        }
    }
}

/// Error resolving a target name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The name was never registered.
    #[error("unknown target `{name}`")]
    UnknownTarget {
        name: String,
        suggestions: Vec<String>,
    },
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::UnknownTarget { name, suggestions: near } => {
                let mut diag = Diagnostic::error(format!("unknown target `{}`", name));

                if !near.is_empty() {
                    diag = diag.with_context(format!("did you mean: {}?", near.join(", ")));
                }

                diag.with_suggestion(suggestions::TARGET_NOT_FOUND)
            }
        }
    }
}

/// Stores target definitions and resolves them on demand.
///
/// Intended lifecycle: populate once per build invocation, then query.
/// Every operation completes synchronously and either fully succeeds or
/// fully fails with the registry unchanged.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    /// Definitions keyed by target name.
    targets: HashMap<Symbol, TargetDefinition>,

    /// Names in successful-registration order.
    order: Vec<Symbol>,
}

impl TargetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        TargetRegistry::default()
    }

    /// Validate and store a definition.
    ///
    /// All checks run before any mutation, so a failed call leaves the
    /// registry exactly as it was.
    pub fn register(&mut self, definition: TargetDefinition) -> Result<(), RegisterError> {
        validate(&definition)?;

        if self.targets.contains_key(&definition.name) {
            return Err(RegisterError::DuplicateTarget {
                target: definition.name.to_string(),
            });
        }

        let distinct: HashSet<Symbol> = definition.modules.iter().copied().collect();
        if distinct.len() != definition.modules.len() {
            tracing::debug!(
                "target `{}` lists duplicate modules; resolution keeps the first occurrence",
                definition.name
            );
        }

        tracing::debug!(
            "registered target `{}` ({}, {} modules)",
            definition.name,
            definition.target_type,
            definition.modules.len()
        );

        self.order.push(definition.name);
        self.targets.insert(definition.name, definition);
        Ok(())
    }

    /// Resolve a registered target into an immutable configuration.
    ///
    /// Module duplicates are removed, first occurrence wins, order is
    /// otherwise preserved. Repeated calls return equal values.
    pub fn resolve(&self, name: &str) -> Result<ResolvedTargetConfig, ResolveError> {
        let Some(definition) = self.targets.get(name) else {
            return Err(ResolveError::UnknownTarget {
                name: name.to_string(),
                suggestions: self.near_misses(name),
            });
        };

        let mut seen = HashSet::with_capacity(definition.modules.len());
        let mut module_list = Vec::with_capacity(definition.modules.len());
        for &module in &definition.modules {
            if seen.insert(module) {
                module_list.push(module);
            }
        }

        Ok(ResolvedTargetConfig::new(
            definition.name,
            definition.target_type,
            module_list,
        ))
    }

    /// Target names in registration order.
    pub fn list_targets(&self) -> &[Symbol] {
        &self.order
    }

    /// Look up a stored definition by name.
    pub fn get(&self, name: &str) -> Option<&TargetDefinition> {
        self.targets.get(name)
    }

    /// Check if a target with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no targets are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered names that look close to `name`, for diagnostics.
    fn near_misses(&self, name: &str) -> Vec<String> {
        let lowered = name.to_lowercase();
        self.order
            .iter()
            .filter(|candidate| {
                let candidate = candidate.as_str().to_lowercase();
                candidate == lowered
                    || candidate.starts_with(&lowered)
                    || lowered.starts_with(&candidate)
            })
            .map(|candidate| candidate.to_string())
            .collect()
    }
}

/// Run every registration-time check against a definition.
fn validate(definition: &TargetDefinition) -> Result<(), RegisterError> {
    if !is_valid_name(definition.name.as_str()) {
        return Err(RegisterError::InvalidName {
            name: definition.name.to_string(),
        });
    }

    if definition.modules.is_empty() {
        return Err(RegisterError::EmptyModuleList {
            target: definition.name.to_string(),
        });
    }

    for module in &definition.modules {
        if !is_valid_name(module.as_str()) {
            return Err(RegisterError::InvalidModule {
                target: definition.name.to_string(),
                module: module.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::{TargetDefinition, TargetType};

    #[test]
    fn test_register_and_resolve() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::game("SGame").with_module("SGame"))
            .unwrap();

        let config = registry.resolve("SGame").unwrap();
        assert_eq!(config.name().as_str(), "SGame");
        assert_eq!(config.target_type(), TargetType::Game);
        assert_eq!(config.module_list(), &[Symbol::intern("SGame")]);
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let mut registry = TargetRegistry::new();
        let err = registry
            .register(TargetDefinition::game("").with_module("SGame"))
            .unwrap_err();
        assert_eq!(err, RegisterError::InvalidName { name: String::new() });
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_whitespace_name() {
        let mut registry = TargetRegistry::new();
        let err = registry
            .register(TargetDefinition::game("S Game").with_module("SGame"))
            .unwrap_err();
        assert!(matches!(err, RegisterError::InvalidName { .. }));
    }

    #[test]
    fn test_register_rejects_empty_module_list() {
        let mut registry = TargetRegistry::new();
        let err = registry.register(TargetDefinition::game("SGame")).unwrap_err();
        assert_eq!(
            err,
            RegisterError::EmptyModuleList {
                target: "SGame".to_string()
            }
        );
        assert!(!registry.contains("SGame"));
    }

    #[test]
    fn test_register_rejects_invalid_module() {
        let mut registry = TargetRegistry::new();
        let err = registry
            .register(TargetDefinition::game("SGame").with_modules(["Core", ""]))
            .unwrap_err();
        assert_eq!(
            err,
            RegisterError::InvalidModule {
                target: "SGame".to_string(),
                module: String::new()
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_duplicate_target() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::game("SGame").with_module("SGame"))
            .unwrap();

        let err = registry
            .register(TargetDefinition::server("SGame").with_module("SGame"))
            .unwrap_err();
        assert_eq!(
            err,
            RegisterError::DuplicateTarget {
                target: "SGame".to_string()
            }
        );

        // The first registration is untouched and listed exactly once.
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("SGame").unwrap().target_type, TargetType::Game);
    }

    #[test]
    fn test_resolve_dedupes_first_occurrence_wins() {
        let mut registry = TargetRegistry::new();
        registry
            .register(
                TargetDefinition::editor("SGameEditor")
                    .with_modules(["SGame", "SGameEditor", "SGame"]),
            )
            .unwrap();

        let config = registry.resolve("SGameEditor").unwrap();
        assert_eq!(
            config.module_list(),
            &[Symbol::intern("SGame"), Symbol::intern("SGameEditor")]
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::client("SGameClient").with_modules(["Core", "Net"]))
            .unwrap();

        let first = registry.resolve("SGameClient").unwrap();
        let second = registry.resolve("SGameClient").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_unknown_target() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::game("SGame").with_module("SGame"))
            .unwrap();

        let err = registry.resolve("Frontend").unwrap_err();
        let ResolveError::UnknownTarget { name, suggestions } = err;
        assert_eq!(name, "Frontend");
        assert!(suggestions.is_empty());

        // A failed resolve leaves the registry untouched.
        assert_eq!(registry.len(), 1);
        assert!(registry.resolve("SGame").is_ok());
    }

    #[test]
    fn test_resolve_suggests_near_misses() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::game("SGame").with_module("SGame"))
            .unwrap();
        registry
            .register(TargetDefinition::editor("SGameEditor").with_module("SGame"))
            .unwrap();

        let err = registry.resolve("sgame").unwrap_err();
        let ResolveError::UnknownTarget { suggestions, .. } = err;
        assert!(suggestions.contains(&"SGame".to_string()));
        assert!(suggestions.contains(&"SGameEditor".to_string()));
    }

    #[test]
    fn test_list_targets_in_registration_order() {
        let mut registry = TargetRegistry::new();
        registry
            .register(TargetDefinition::game("SGame").with_module("SGame"))
            .unwrap();
        // A failed registration must not show up in the listing.
        let _ = registry.register(TargetDefinition::server("Bad"));
        registry
            .register(TargetDefinition::editor("SGameEditor").with_module("SGame"))
            .unwrap();

        let names: Vec<&str> = registry.list_targets().iter().map(Symbol::as_str).collect();
        assert_eq!(names, vec!["SGame", "SGameEditor"]);
    }
}
