//! Content counts - how many completable items of each kind a submodule holds.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Kinds of completable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Recorded lecture or clip
    Video,
    /// Graded or practice quiz
    Quiz,
    /// Reading material
    Article,
    /// Coding exercise
    CodingProblem,
    /// Hand-in assignment
    Assignment,
}

impl ContentKind {
    /// All kinds, in display order.
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Video,
        ContentKind::Quiz,
        ContentKind::Article,
        ContentKind::CodingProblem,
        ContentKind::Assignment,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Video => "video",
            ContentKind::Quiz => "quiz",
            ContentKind::Article => "article",
            ContentKind::CodingProblem => "coding_problem",
            ContentKind::Assignment => "assignment",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item counts per content kind.
///
/// Upstream course data omits kinds that don't apply to a submodule, so
/// every field defaults to zero when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentCounts {
    /// Videos
    pub video: u32,

    /// Quizzes
    pub quiz: u32,

    /// Articles
    pub article: u32,

    /// Coding problems
    #[serde(alias = "codingProblem")]
    pub coding_problem: u32,

    /// Assignments
    pub assignment: u32,
}

impl ContentCounts {
    /// Counts with every kind at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Set the count for one kind.
    pub fn with(mut self, kind: ContentKind, count: u32) -> Self {
        *self.get_mut(kind) = count;
        self
    }

    /// Count for a single kind.
    pub fn get(&self, kind: ContentKind) -> u32 {
        match kind {
            ContentKind::Video => self.video,
            ContentKind::Quiz => self.quiz,
            ContentKind::Article => self.article,
            ContentKind::CodingProblem => self.coding_problem,
            ContentKind::Assignment => self.assignment,
        }
    }

    fn get_mut(&mut self, kind: ContentKind) -> &mut u32 {
        match kind {
            ContentKind::Video => &mut self.video,
            ContentKind::Quiz => &mut self.quiz,
            ContentKind::Article => &mut self.article,
            ContentKind::CodingProblem => &mut self.coding_problem,
            ContentKind::Assignment => &mut self.assignment,
        }
    }

    /// Sum across all kinds. Widened to `u64` so large courses can't overflow.
    pub fn total(&self) -> u64 {
        ContentKind::ALL
            .iter()
            .map(|kind| u64::from(self.get(*kind)))
            .sum()
    }

    /// True when no kind has any items.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Add for ContentCounts {
    type Output = ContentCounts;

    fn add(mut self, rhs: ContentCounts) -> ContentCounts {
        self += rhs;
        self
    }
}

impl AddAssign for ContentCounts {
    fn add_assign(&mut self, rhs: ContentCounts) {
        for kind in ContentKind::ALL {
            let slot = self.get_mut(kind);
            *slot = slot.saturating_add(rhs.get(kind));
        }
    }
}

impl Sum for ContentCounts {
    fn sum<I: Iterator<Item = ContentCounts>>(iter: I) -> Self {
        iter.fold(ContentCounts::zero(), Add::add)
    }
}

impl<'a> Sum<&'a ContentCounts> for ContentCounts {
    fn sum<I: Iterator<Item = &'a ContentCounts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
