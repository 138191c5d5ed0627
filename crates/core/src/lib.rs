//! Coursegate core data models.
//!
//! This crate defines the course structure (modules, submodules and their
//! content counts), the unlock policy configuration, and the lock decision
//! that the progress layer produces for each module.

#![warn(missing_docs)]

// Core identities
mod id;

// Course structure
mod content;
mod module;

// Policy and outcome
mod policy;
mod decision;

// Ingestion-boundary checks
mod validation;

// Re-exports
pub use id::*;

pub use content::{ContentCounts, ContentKind};
pub use module::{Module, Submodule};
pub use policy::{PeriodUnit, UnlockPolicyConfig, DEFAULT_THRESHOLD_PERCENT};
pub use decision::{LockDecision, LockState};
pub use validation::{validate_modules, ValidationError};

/// Period index type (1-based, e.g. week number).
pub type PeriodNumber = u32;
