//! Contract checks for upstream course data.
//!
//! The evaluator trusts its input; these checks run once at the ingestion
//! boundary so malformed records never reach it.

use std::collections::HashSet;
use crate::id::{ModuleId, SubmoduleId};
use crate::module::Module;

/// Contract violations in upstream course data or policy settings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Completion outside `[0, 100]` or not a number
    #[error("module {module_id}: completion percentage {value} is outside 0..=100")]
    CompletionOutOfRange {
        /// Offending module
        module_id: ModuleId,
        /// Value received
        value: f64,
    },

    /// Periods are 1-based
    #[error("module {0}: period number must be at least 1")]
    ZeroPeriod(ModuleId),

    /// Module id seen twice
    #[error("duplicate module id: {0}")]
    DuplicateModule(ModuleId),

    /// Submodule id seen twice in one module
    #[error("module {module_id}: duplicate submodule id {submodule_id}")]
    DuplicateSubmodule {
        /// Owning module
        module_id: ModuleId,
        /// Repeated submodule
        submodule_id: SubmoduleId,
    },

    /// Policy threshold outside `[0, 100]` or not a number
    #[error("unlock threshold {0} is outside 0..=100")]
    ThresholdOutOfRange(f64),
}

/// Check every module against the input contract.
///
/// Returns the first violation found, in module order.
pub fn validate_modules(modules: &[Module]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();

    for module in modules {
        if !seen.insert(module.id) {
            return Err(ValidationError::DuplicateModule(module.id));
        }

        if module.period_number == 0 {
            return Err(ValidationError::ZeroPeriod(module.id));
        }

        let value = module.completion_percentage;
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::CompletionOutOfRange {
                module_id: module.id,
                value,
            });
        }

        let mut sub_seen = HashSet::new();
        for submodule in &module.submodules {
            if !sub_seen.insert(submodule.id) {
                return Err(ValidationError::DuplicateSubmodule {
                    module_id: module.id,
                    submodule_id: submodule.id,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ContentCounts, Submodule};

    #[test]
    fn test_valid_course_passes() {
        let modules = vec![
            Module::new("Basics", 1).with_completion(0.0),
            Module::new("Ownership", 2).with_completion(100.0),
        ];
        assert!(validate_modules(&modules).is_ok());
        assert!(validate_modules(&[]).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_completion() {
        let module = Module::new("Basics", 1).with_completion(120.0);
        let id = module.id;
        assert_eq!(
            validate_modules(&[module]),
            Err(ValidationError::CompletionOutOfRange { module_id: id, value: 120.0 })
        );

        let negative = Module::new("Basics", 1).with_completion(-0.5);
        assert!(validate_modules(&[negative]).is_err());

        let nan = Module::new("Basics", 1).with_completion(f64::NAN);
        assert!(validate_modules(&[nan]).is_err());
    }

    #[test]
    fn test_rejects_zero_period() {
        let module = Module::new("Orientation", 0);
        let id = module.id;
        assert_eq!(validate_modules(&[module]), Err(ValidationError::ZeroPeriod(id)));
    }

    #[test]
    fn test_rejects_duplicate_module() {
        let module = Module::new("Basics", 1);
        let copy = module.clone();
        assert_eq!(
            validate_modules(&[module.clone(), copy]),
            Err(ValidationError::DuplicateModule(module.id))
        );
    }

    #[test]
    fn test_rejects_duplicate_submodule() {
        let submodule = Submodule::new("Intro", ContentCounts::zero());
        let module = Module::new("Basics", 1)
            .with_submodule(submodule.clone())
            .with_submodule(submodule.clone());
        let id = module.id;

        assert_eq!(
            validate_modules(&[module]),
            Err(ValidationError::DuplicateSubmodule {
                module_id: id,
                submodule_id: submodule.id,
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::ThresholdOutOfRange(150.0);
        assert_eq!(err.to_string(), "unlock threshold 150 is outside 0..=100");
    }
}
