//! Content aggregation over the course hierarchy.

use coursegate_core::{ContentCounts, Module, SubmoduleId};
use serde::Serialize;

/// Item count for one submodule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmoduleTotal {
    /// Submodule
    pub submodule_id: SubmoduleId,
    /// Items across all kinds
    pub item_count: u64,
}

/// Counts completable content in modules and submodules.
pub struct ContentAggregator;

impl ContentAggregator {
    /// Total items in a submodule's counts.
    pub fn count_submodule_items(&self, counts: &ContentCounts) -> u64 {
        counts.total()
    }

    /// Total items across all submodules of a module. Zero if it has none.
    pub fn count_module_items(&self, module: &Module) -> u64 {
        module
            .submodules
            .iter()
            .map(|s| self.count_submodule_items(&s.counts))
            .sum()
    }

    /// Whether a module has anything to interact with.
    pub fn has_renderable_content(&self, module: &Module) -> bool {
        self.count_module_items(module) > 0
    }

    /// Per-kind totals for a module.
    pub fn module_breakdown(&self, module: &Module) -> ContentCounts {
        module.submodules.iter().map(|s| &s.counts).sum()
    }

    /// Per-submodule totals, in submodule order.
    pub fn submodule_totals(&self, module: &Module) -> Vec<SubmoduleTotal> {
        module
            .submodules
            .iter()
            .map(|s| SubmoduleTotal {
                submodule_id: s.id,
                item_count: self.count_submodule_items(&s.counts),
            })
            .collect()
    }

    /// Per-kind totals across a course.
    pub fn course_breakdown(&self, modules: &[Module]) -> ContentCounts {
        modules.iter().map(|m| self.module_breakdown(m)).sum()
    }
}

impl Default for ContentAggregator {
    fn default() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegate_core::{ContentKind, Submodule};

    fn counts(video: u32, quiz: u32, article: u32, coding: u32, assignment: u32) -> ContentCounts {
        ContentCounts {
            video,
            quiz,
            article,
            coding_problem: coding,
            assignment,
        }
    }

    #[test]
    fn test_zero_submodule_counts_to_zero() {
        let aggregator = ContentAggregator;
        assert_eq!(aggregator.count_submodule_items(&ContentCounts::zero()), 0);
    }

    #[test]
    fn test_submodule_sums_all_kinds() {
        let aggregator = ContentAggregator;
        assert_eq!(aggregator.count_submodule_items(&counts(1, 2, 3, 4, 5)), 15);
    }

    #[test]
    fn test_module_count_is_sum_of_submodules() {
        let aggregator = ContentAggregator;
        let module = Module::new("Ownership", 1)
            .with_submodule(Submodule::new("Moves", counts(2, 1, 0, 0, 0)))
            .with_submodule(Submodule::new("Borrows", counts(0, 0, 1, 3, 1)))
            .with_submodule(Submodule::new("Recap", ContentCounts::zero()));

        let expected: u64 = module
            .submodules
            .iter()
            .map(|s| aggregator.count_submodule_items(&s.counts))
            .sum();
        assert_eq!(aggregator.count_module_items(&module), expected);
        assert_eq!(aggregator.count_module_items(&module), 8);
    }

    #[test]
    fn test_module_without_submodules() {
        let aggregator = ContentAggregator;
        let module = Module::new("Placeholder", 3);
        assert_eq!(aggregator.count_module_items(&module), 0);
        assert!(!aggregator.has_renderable_content(&module));
    }

    #[test]
    fn test_renderable_iff_nonzero() {
        let aggregator = ContentAggregator;
        let empty = Module::new("Empty", 1)
            .with_submodule(Submodule::new("A", ContentCounts::zero()))
            .with_submodule(Submodule::new("B", ContentCounts::zero()));
        let single = Module::new("Single", 1)
            .with_submodule(Submodule::new("A", ContentCounts::zero().with(ContentKind::Quiz, 1)));

        assert!(!aggregator.has_renderable_content(&empty));
        assert!(aggregator.has_renderable_content(&single));
    }

    #[test]
    fn test_module_breakdown_is_element_wise() {
        let aggregator = ContentAggregator;
        let module = Module::new("Traits", 2)
            .with_submodule(Submodule::new("A", counts(1, 1, 0, 0, 0)))
            .with_submodule(Submodule::new("B", counts(2, 0, 0, 1, 0)));

        let breakdown = aggregator.module_breakdown(&module);
        assert_eq!(breakdown, counts(3, 1, 0, 1, 0));
        assert_eq!(breakdown.total(), aggregator.count_module_items(&module));
    }

    #[test]
    fn test_submodule_totals_keep_order() {
        let aggregator = ContentAggregator;
        let module = Module::new("Traits", 2)
            .with_submodule(Submodule::new("A", counts(1, 1, 0, 0, 0)))
            .with_submodule(Submodule::new("B", counts(0, 0, 0, 0, 0)))
            .with_submodule(Submodule::new("C", counts(0, 0, 4, 0, 0)));

        let totals = aggregator.submodule_totals(&module);
        let items: Vec<u64> = totals.iter().map(|t| t.item_count).collect();
        assert_eq!(items, vec![2, 0, 4]);
        assert_eq!(totals[2].submodule_id, module.submodules[2].id);
    }

    #[test]
    fn test_course_breakdown() {
        let aggregator = ContentAggregator;
        let modules = vec![
            Module::new("One", 1).with_submodule(Submodule::new("A", counts(1, 0, 0, 0, 0))),
            Module::new("Two", 2).with_submodule(Submodule::new("B", counts(0, 2, 0, 0, 1))),
        ];

        assert_eq!(aggregator.course_breakdown(&modules), counts(1, 2, 0, 0, 1));
        assert!(aggregator.course_breakdown(&[]).is_empty());
    }
}
