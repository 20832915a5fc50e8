//! Driver-facing build plans.
//!
//! A plan is the JSON contract an external compiler/linker driver consumes.
//! It carries exactly what resolution produced; how the modules actually
//! get compiled and linked is the driver's business.

use anyhow::Result;
use serde::Serialize;

use crate::core::registry::{ResolveError, TargetRegistry};
use crate::core::target::{ResolvedTargetConfig, TargetType};

/// Schema version stamped into every emitted plan.
pub const PLAN_VERSION: u32 = 1;

/// A resolved target rendered for an external build driver.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// Plan schema version
    pub version: u32,

    /// Target name
    pub target: String,

    /// Target type (lowercase)
    #[serde(rename = "type")]
    pub target_type: TargetType,

    /// Modules in build/link order, deduplicated
    pub modules: Vec<String>,
}

impl BuildPlan {
    /// Build a plan from a resolved configuration.
    pub fn from_config(config: &ResolvedTargetConfig) -> Self {
        BuildPlan {
            version: PLAN_VERSION,
            target: config.name().to_string(),
            target_type: config.target_type(),
            modules: config
                .module_list()
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Plans for every registered target, in registration order.
pub fn plan_all(registry: &TargetRegistry) -> Result<Vec<BuildPlan>, ResolveError> {
    let mut plans = Vec::with_capacity(registry.len());
    for name in registry.list_targets() {
        let config = registry.resolve(name.as_str())?;
        plans.push(BuildPlan::from_config(&config));
    }
    Ok(plans)
}
