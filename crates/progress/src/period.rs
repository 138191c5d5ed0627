//! Period grouping.
//!
//! Periods are not stored anywhere; they are derived from each module's
//! `period_number` every time a question is asked.

use coursegate_core::{Module, PeriodNumber};
use std::collections::BTreeMap;

/// Modules scheduled in `period`, in input order.
pub fn modules_in_period(
    modules: &[Module],
    period: PeriodNumber,
) -> impl Iterator<Item = &Module> + '_ {
    modules.iter().filter(move |m| m.period_number == period)
}

/// Unweighted mean completion of the modules in `period`.
///
/// `None` when the period has no modules.
pub fn period_completion(modules: &[Module], period: PeriodNumber) -> Option<f64> {
    let mut summary = PeriodSummary::default();
    for module in modules_in_period(modules, period) {
        summary.push(module);
    }
    summary.mean_completion()
}

/// Running totals for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodSummary {
    /// Modules in the period
    pub module_count: usize,

    /// Sum of their completion percentages
    pub completion_sum: f64,
}

impl PeriodSummary {
    fn push(&mut self, module: &Module) {
        self.module_count += 1;
        self.completion_sum += module.completion_percentage;
    }

    /// Mean completion. Every module weighs the same regardless of size.
    pub fn mean_completion(&self) -> Option<f64> {
        if self.module_count == 0 {
            None
        } else {
            Some(self.completion_sum / self.module_count as f64)
        }
    }
}

/// All periods of a course, summarized in one pass.
///
/// Built per evaluation pass and dropped afterwards.
#[derive(Debug, Clone, Default)]
pub struct PeriodIndex {
    periods: BTreeMap<PeriodNumber, PeriodSummary>,
}

impl PeriodIndex {
    /// Group modules by period.
    pub fn build(modules: &[Module]) -> Self {
        let mut periods: BTreeMap<PeriodNumber, PeriodSummary> = BTreeMap::new();
        for module in modules {
            periods.entry(module.period_number).or_default().push(module);
        }
        Self { periods }
    }

    /// Summary for a period, if it has any modules.
    pub fn get(&self, period: PeriodNumber) -> Option<&PeriodSummary> {
        self.periods.get(&period)
    }

    /// Mean completion for a period.
    pub fn mean(&self, period: PeriodNumber) -> Option<f64> {
        self.get(period).and_then(PeriodSummary::mean_completion)
    }

    /// Periods in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (PeriodNumber, &PeriodSummary)> + '_ {
        self.periods.iter().map(|(p, s)| (*p, s))
    }

    /// Number of distinct periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// True when there are no modules at all.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
