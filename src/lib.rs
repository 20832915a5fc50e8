//! Gantry - a declarative build-target registry and resolver
//!
//! This crate provides the core library functionality for Gantry:
//! registering named build targets, validating their declarations, and
//! resolving them into configurations an external build driver consumes.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::project::Project;
pub use crate::core::registry::{RegisterError, ResolveError, TargetRegistry};
pub use crate::core::target::{ResolvedTargetConfig, TargetDefinition, TargetType};
pub use crate::util::Symbol;
