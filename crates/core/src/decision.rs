//! Lock decision - the per-module outcome of an unlock evaluation.

use serde::{Deserialize, Serialize};
use crate::id::ModuleId;
use crate::policy::UnlockPolicyConfig;
use crate::PeriodNumber;

/// Why a module is or isn't accessible.
///
/// Exactly one state holds per module per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LockState {
    /// Module is accessible
    Unlocked,

    /// Previous period's completion is below the policy threshold
    LockedByPolicy {
        /// Period the student has to complete
        required_period: PeriodNumber,
        /// Threshold the period has to reach
        required_threshold: f64,
        /// Mean completion the period currently has
        previous_completion: f64,
    },

    /// Module has nothing to interact with
    LockedByEmptyContent,
}

impl LockState {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LockState::Unlocked => "unlocked",
            LockState::LockedByPolicy { .. } => "locked_by_policy",
            LockState::LockedByEmptyContent => "locked_by_empty_content",
        }
    }
}

/// Lock decision for one module. Recomputed on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockDecision {
    /// Module the decision is for
    pub module_id: ModuleId,

    /// Outcome
    pub state: LockState,

    /// Whether the module is not interactive, for any reason
    pub is_locked: bool,

    /// Remediation text, only for policy locks
    pub reason: Option<String>,

    /// Period to complete, only for policy locks
    pub required_period: Option<PeriodNumber>,

    /// Threshold to reach, only for policy locks
    pub required_threshold: Option<f64>,
}

impl LockDecision {
    /// Module is accessible.
    pub fn unlocked(module_id: ModuleId) -> Self {
        Self {
            module_id,
            state: LockState::Unlocked,
            is_locked: false,
            reason: None,
            required_period: None,
            required_threshold: None,
        }
    }

    /// Module has no content. Carries no remediation message.
    pub fn locked_by_empty_content(module_id: ModuleId) -> Self {
        Self {
            module_id,
            state: LockState::LockedByEmptyContent,
            is_locked: true,
            reason: None,
            required_period: None,
            required_threshold: None,
        }
    }

    /// Module is gated by the policy on `required_period`.
    pub fn locked_by_policy(
        module_id: ModuleId,
        policy: &UnlockPolicyConfig,
        required_period: PeriodNumber,
        previous_completion: f64,
    ) -> Self {
        Self {
            module_id,
            state: LockState::LockedByPolicy {
                required_period,
                required_threshold: policy.threshold_percent,
                previous_completion,
            },
            is_locked: true,
            reason: Some(policy.unlock_message(required_period)),
            required_period: Some(required_period),
            required_threshold: Some(policy.threshold_percent),
        }
    }

    /// Whether the module is not interactive, for any reason.
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlocked_has_no_remediation() {
        let decision = LockDecision::unlocked(ModuleId::new());
        assert!(!decision.is_locked());
        assert!(decision.reason.is_none());
        assert!(decision.required_period.is_none());
        assert!(decision.required_threshold.is_none());
    }

    #[test]
    fn test_empty_content_is_locked_without_message() {
        let decision = LockDecision::locked_by_empty_content(ModuleId::new());
        assert!(decision.is_locked());
        assert_eq!(decision.state, LockState::LockedByEmptyContent);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn test_policy_lock_carries_requirements() {
        let policy = UnlockPolicyConfig::enabled(70.0);
        let decision = LockDecision::locked_by_policy(ModuleId::new(), &policy, 1, 40.0);

        assert!(decision.is_locked());
        assert_eq!(decision.required_period, Some(1));
        assert_eq!(decision.required_threshold, Some(70.0));
        assert_eq!(decision.reason.as_deref(), Some("Complete week 1 (≥ 70%) to unlock"));
        match decision.state {
            LockState::LockedByPolicy { previous_completion, .. } => {
                assert_eq!(previous_completion, 40.0)
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_state_serializes_tagged() {
        let json = serde_json::to_value(LockState::LockedByEmptyContent).unwrap();
        assert_eq!(json["state"], "locked_by_empty_content");
        assert_eq!(LockState::Unlocked.as_str(), "unlocked");
    }

    #[test]
    fn test_decision_serializes_is_locked() {
        let policy = UnlockPolicyConfig::enabled(70.0);
        let decisions = [
            (LockDecision::unlocked(ModuleId::new()), false),
            (LockDecision::locked_by_empty_content(ModuleId::new()), true),
            (LockDecision::locked_by_policy(ModuleId::new(), &policy, 2, 10.0), true),
        ];

        for (decision, locked) in decisions {
            let json = serde_json::to_value(&decision).unwrap();
            assert_eq!(json["is_locked"], locked);
            assert_eq!(decision.is_locked(), locked);
            assert_eq!(decision.is_locked, !matches!(decision.state, LockState::Unlocked));
        }
    }
}
