//! Progress evaluation
//!
//! Content aggregation, period grouping, and progressive unlock decisions.
//! Everything here is a pure function of its input.

#![warn(missing_docs)]

pub mod aggregator;
pub mod period;
pub mod evaluator;
pub mod report;

pub use aggregator::{ContentAggregator, SubmoduleTotal};
pub use period::{modules_in_period, period_completion, PeriodIndex, PeriodSummary};
pub use evaluator::UnlockPolicyEvaluator;
pub use report::{CourseReport, ModuleReport, PeriodReport, StateCounts};
