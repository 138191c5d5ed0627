//! Module model - a unit of course structure scheduled into a period.

use serde::{Deserialize, Serialize};
use crate::content::ContentCounts;
use crate::id::{ModuleId, SubmoduleId};
use crate::PeriodNumber;

/// A submodule groups content items inside a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submodule {
    /// Unique identifier, serialized as a 26-character ULID string
    pub id: SubmoduleId,

    /// Display title
    pub title: String,

    /// Content item counts
    #[serde(default)]
    pub counts: ContentCounts,
}

impl Submodule {
    /// Create a new submodule.
    pub fn new(title: impl Into<String>, counts: ContentCounts) -> Self {
        Self {
            id: SubmoduleId::new(),
            title: title.into(),
            counts,
        }
    }
}

/// A module is the lockable unit of a course.
///
/// Each module belongs to exactly one period and owns its submodules,
/// which render in the order given.
///
/// Identifiers are ULIDs. Upstream records keyed by other schemes (numeric
/// LMS ids, slugs) are rejected on deserialization and must be mapped to
/// ULIDs before ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Unique identifier, serialized as a 26-character ULID string
    pub id: ModuleId,

    /// Display title
    pub title: String,

    /// Period the module is scheduled in (1-based)
    #[serde(alias = "periodNumber")]
    pub period_number: PeriodNumber,

    /// Student completion, expected in `[0, 100]`
    #[serde(alias = "completionPercentage")]
    pub completion_percentage: f64,

    /// Submodules, in display order
    #[serde(default)]
    pub submodules: Vec<Submodule>,
}

impl Module {
    /// Create a new module with no submodules and zero completion.
    pub fn new(title: impl Into<String>, period_number: PeriodNumber) -> Self {
        Self {
            id: ModuleId::new(),
            title: title.into(),
            period_number,
            completion_percentage: 0.0,
            submodules: Vec::new(),
        }
    }

    /// Set completion percentage.
    pub fn with_completion(mut self, percentage: f64) -> Self {
        self.completion_percentage = percentage;
        self
    }

    /// Append a submodule.
    pub fn with_submodule(mut self, submodule: Submodule) -> Self {
        self.submodules.push(submodule);
        self
    }

    /// Index of the period before this one, if any.
    pub fn previous_period(&self) -> Option<PeriodNumber> {
        if self.period_number <= 1 {
            None
        } else {
            Some(self.period_number - 1)
        }
    }
}
