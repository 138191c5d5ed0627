//! Course report - the per-module view handed to the presentation layer.

use chrono::{DateTime, Utc};
use coursegate_core::{
    ContentCounts, LockDecision, LockState, Module, ModuleId, PeriodNumber, UnlockPolicyConfig,
};
use serde::Serialize;
use crate::aggregator::ContentAggregator;
use crate::evaluator::UnlockPolicyEvaluator;
use crate::period::PeriodIndex;

/// Everything the presentation layer needs to render one module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleReport {
    /// Module
    pub module_id: ModuleId,

    /// Display title
    pub title: String,

    /// Period the module belongs to
    pub period_number: PeriodNumber,

    /// Items across all submodules
    pub item_count: u64,

    /// Items per kind
    pub breakdown: ContentCounts,

    /// Lock outcome
    pub decision: LockDecision,
}

/// Per-period roll-up.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodReport {
    /// Period
    pub period_number: PeriodNumber,

    /// Modules in the period
    pub module_count: usize,

    /// Unweighted mean completion
    pub mean_completion: f64,

    /// Items across the period's modules
    pub item_count: u64,
}

/// Number of modules per lock state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateCounts {
    /// Accessible modules
    pub unlocked: usize,
    /// Modules gated by the policy
    pub locked_by_policy: usize,
    /// Modules with no content
    pub locked_by_empty_content: usize,
}

impl StateCounts {
    fn record(&mut self, state: &LockState) {
        match state {
            LockState::Unlocked => self.unlocked += 1,
            LockState::LockedByPolicy { .. } => self.locked_by_policy += 1,
            LockState::LockedByEmptyContent => self.locked_by_empty_content += 1,
        }
    }
}

/// A full evaluation pass over a course.
#[derive(Debug, Clone, Serialize)]
pub struct CourseReport {
    /// When the pass ran
    pub generated_at: DateTime<Utc>,

    /// Policy used
    pub policy: UnlockPolicyConfig,

    /// One entry per module, in input order
    pub modules: Vec<ModuleReport>,

    /// One entry per period, ascending
    pub periods: Vec<PeriodReport>,

    /// Outcome tally
    pub states: StateCounts,

    /// Items per kind across the course
    pub content: ContentCounts,
}

impl CourseReport {
    /// Aggregate and evaluate a course.
    pub fn build(modules: &[Module], policy: UnlockPolicyConfig) -> Self {
        let aggregator = ContentAggregator;
        let evaluator = UnlockPolicyEvaluator::new(policy);
        let decisions = evaluator.evaluate_all(modules);

        let mut states = StateCounts::default();
        let module_reports: Vec<ModuleReport> = modules
            .iter()
            .zip(decisions)
            .map(|(module, decision)| {
                states.record(&decision.state);
                let breakdown = aggregator.module_breakdown(module);
                ModuleReport {
                    module_id: module.id,
                    title: module.title.clone(),
                    period_number: module.period_number,
                    item_count: breakdown.total(),
                    breakdown,
                    decision,
                }
            })
            .collect();

        let index = PeriodIndex::build(modules);
        let periods = index
            .iter()
            .filter_map(|(period, summary)| {
                let item_count: u64 = module_reports
                    .iter()
                    .filter(|r| r.period_number == period)
                    .map(|r| r.item_count)
                    .sum();
                Some(PeriodReport {
                    period_number: period,
                    module_count: summary.module_count,
                    mean_completion: summary.mean_completion()?,
                    item_count,
                })
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            policy,
            content: aggregator.course_breakdown(modules),
            modules: module_reports,
            periods,
            states,
        }
    }

    /// Report for a single module.
    pub fn module(&self, id: ModuleId) -> Option<&ModuleReport> {
        self.modules.iter().find(|m| m.module_id == id)
    }
}
