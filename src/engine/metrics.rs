//! Engine run metrics.
//!
//! Metrics are opt-in: [`Engine::annotate`](crate::Engine::annotate) discards
//! them, [`Engine::annotate_verbose_with`](crate::Engine::annotate_verbose_with)
//! hands them back next to the result.
//!
//! Counters are summed over every position of a run, so for a given input they
//! are the same whether positions were evaluated sequentially or in parallel.

use std::ops::AddAssign;
use std::time::Duration;

use serde::Serialize;

use crate::result::ProcessingResult;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunMetrics {
    /// Wall-clock time of the whole run.
    pub total: Duration,
    /// Characters in the input.
    pub positions: usize,
    /// Rule predicates evaluated.
    pub evaluated: usize,
    /// Predicates that matched.
    pub matched: usize,
    /// Matches accepted by resolution.
    pub accepted: usize,
    /// Matches dropped by a conflict or an already decided category.
    pub suppressed: usize,
}

/// Counters for a single position, folded into [`RunMetrics`].
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PositionCounts {
    pub evaluated: usize,
    pub matched: usize,
    pub accepted: usize,
    pub suppressed: usize,
}

impl AddAssign<PositionCounts> for RunMetrics {
    fn add_assign(&mut self, counts: PositionCounts) {
        self.positions += 1;
        self.evaluated += counts.evaluated;
        self.matched += counts.matched;
        self.accepted += counts.accepted;
        self.suppressed += counts.suppressed;
    }
}

/// Scanner output bundled with timing information.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub result: ProcessingResult,
    pub metrics: RunMetrics,
}
