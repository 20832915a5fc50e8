//! Implementation of `gantry check`.

use crate::core::registry::{RegisterError, TargetRegistry};
use crate::core::target::TargetDefinition;

/// Result of checking a set of declarations.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Targets that registered cleanly, in declaration order
    pub registered: Vec<String>,

    /// Validation failures, in declaration order
    pub failures: Vec<RegisterError>,
}

impl CheckReport {
    /// Check if every declaration registered cleanly.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of declarations examined.
    pub fn total(&self) -> usize {
        self.registered.len() + self.failures.len()
    }
}

/// Register every definition into a scratch registry, collecting every
/// failure instead of stopping at the first.
pub fn check_definitions(definitions: Vec<TargetDefinition>) -> CheckReport {
    let mut registry = TargetRegistry::new();
    let mut report = CheckReport::default();

    for definition in definitions {
        let name = definition.name;
        match registry.register(definition) {
            Ok(()) => report.registered.push(name.to_string()),
            Err(err) => report.failures.push(err),
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_collects_every_failure() {
        let definitions = vec![
            TargetDefinition::game("SGame").with_module("SGame"),
            TargetDefinition::game("SGame").with_module("SGame"),
            TargetDefinition::server("Dedicated"),
        ];

        let report = check_definitions(definitions);
        assert!(!report.is_clean());
        assert_eq!(report.registered, vec!["SGame"]);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.total(), 3);
    }

    #[test]
    fn test_check_clean_declarations() {
        let definitions = vec![
            TargetDefinition::game("SGame").with_module("SGame"),
            TargetDefinition::editor("SGameEditor").with_modules(["SGame", "SGameEditor"]),
        ];

        let report = check_definitions(definitions);
        assert!(report.is_clean());
        assert_eq!(report.registered.len(), 2);
    }
}
