//! Progressive unlock evaluation.
//!
//! A module in period `p` is gated by the mean completion of every module in
//! period `p - 1`. Decisions are recomputed from scratch on each call:
//!
//! ```text
//! no content            → LockedByEmptyContent
//! policy off / p ≤ 1    → Unlocked
//! no modules in p - 1   → Unlocked
//! mean(p - 1) ≥ thresh  → Unlocked
//! otherwise             → LockedByPolicy
//! ```

use coursegate_core::{LockDecision, Module, PeriodNumber, UnlockPolicyConfig};
use tracing::{debug, trace};
use crate::aggregator::ContentAggregator;
use crate::period::{period_completion, PeriodIndex};

/// Decides whether modules are accessible under an unlock policy.
#[derive(Debug, Clone)]
pub struct UnlockPolicyEvaluator {
    policy: UnlockPolicyConfig,
}

impl UnlockPolicyEvaluator {
    /// Create an evaluator for a policy.
    pub fn new(policy: UnlockPolicyConfig) -> Self {
        Self { policy }
    }

    /// The policy in effect.
    pub fn policy(&self) -> &UnlockPolicyConfig {
        &self.policy
    }

    /// Decide the lock state of `module` given the whole course.
    ///
    /// `modules` is the full module list; `module` need not be part of it.
    /// Its own completion never affects its own decision.
    pub fn evaluate(&self, modules: &[Module], module: &Module) -> LockDecision {
        self.decide(module, |period| period_completion(modules, period))
    }

    /// Decide every module of a course, in input order.
    ///
    /// Same results as calling [`evaluate`](Self::evaluate) per module, but
    /// each period's mean is computed once.
    pub fn evaluate_all(&self, modules: &[Module]) -> Vec<LockDecision> {
        let index = PeriodIndex::build(modules);
        modules
            .iter()
            .map(|module| self.decide(module, |period| index.mean(period)))
            .collect()
    }

    /// Mean completion of the period before `period`.
    ///
    /// `None` if `period` is the first one or the previous period is empty.
    pub fn previous_period_completion(
        &self,
        modules: &[Module],
        period: PeriodNumber,
    ) -> Option<f64> {
        if period <= 1 {
            return None;
        }
        period_completion(modules, period - 1)
    }

    fn decide<F>(&self, module: &Module, previous_mean: F) -> LockDecision
    where
        F: Fn(PeriodNumber) -> Option<f64>,
    {
        if !ContentAggregator.has_renderable_content(module) {
            trace!(module = %module.id, "no content, locked");
            return LockDecision::locked_by_empty_content(module.id);
        }

        if !self.policy.enabled {
            return LockDecision::unlocked(module.id);
        }

        let Some(previous_period) = module.previous_period() else {
            return LockDecision::unlocked(module.id);
        };

        // An empty previous period never blocks access.
        let Some(previous) = previous_mean(previous_period) else {
            trace!(module = %module.id, previous_period, "previous period empty");
            return LockDecision::unlocked(module.id);
        };

        if previous >= self.policy.threshold_percent {
            trace!(module = %module.id, previous, "threshold met");
            LockDecision::unlocked(module.id)
        } else {
            debug!(
                module = %module.id,
                period = module.period_number,
                previous,
                threshold = self.policy.threshold_percent,
                "locked by unlock policy"
            );
            LockDecision::locked_by_policy(module.id, &self.policy, previous_period, previous)
        }
    }
}

impl Default for UnlockPolicyEvaluator {
    fn default() -> Self {
        Self::new(UnlockPolicyConfig::default())
    }
}
