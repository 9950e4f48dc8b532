//! Breadth-first distance table
//!
//! Distances are edge counts to a single target word. The search may stop once a
//! chosen word is dequeued; the table then keeps a horizon that every unvisited
//! word is known to be at least as far as.

use crate::core::{AdjacencyGraph, WordId};
use std::collections::VecDeque;
use tracing::debug;

/// Edge distances from every reached word to one target
#[derive(Debug, Clone)]
pub struct DistanceTable {
    target: WordId,
    distances: Vec<Option<u32>>,
    horizon: Option<u32>,
}

impl DistanceTable {
    /// Run BFS from `target`, stopping early once `stop_at` is dequeued
    ///
    /// With `stop_at == None` the whole connected component is explored.
    #[must_use]
    pub fn compute(graph: &AdjacencyGraph, target: WordId, stop_at: Option<WordId>) -> Self {
        let mut distances = vec![None; graph.len()];
        let mut queue = VecDeque::new();
        let mut horizon = None;
        let mut visited = 1usize;

        distances[target] = Some(0);
        queue.push_back(target);

        while let Some(current) = queue.pop_front() {
            let distance = distances[current].unwrap_or_default();

            if Some(current) == stop_at {
                // Every word at `distance` or closer is already recorded
                horizon = Some(distance + 1);
                break;
            }

            for &next in graph.neighbors(current) {
                if distances[next].is_none() {
                    distances[next] = Some(distance + 1);
                    queue.push_back(next);
                    visited += 1;
                }
            }
        }

        debug!(
            target = %graph.word(target),
            visited,
            complete = horizon.is_none(),
            "computed distance table"
        );

        Self {
            target,
            distances,
            horizon,
        }
    }

    /// The word all distances point to
    #[inline]
    #[must_use]
    pub const fn target(&self) -> WordId {
        self.target
    }

    /// Exact distance to the target, if this word was reached
    #[inline]
    #[must_use]
    pub fn distance(&self, id: WordId) -> Option<u32> {
        self.distances[id]
    }

    /// Smallest distance the word could have
    ///
    /// Exact for reached words. Unreached words get the horizon of an early-stopped
    /// search, or `None` when the search was complete and the word is unreachable.
    #[inline]
    #[must_use]
    pub fn lower_bound(&self, id: WordId) -> Option<u32> {
        self.distances[id].or(self.horizon)
    }

    /// True if the whole component of the target was explored
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.horizon.is_none()
    }

    /// Number of words with a recorded distance
    #[must_use]
    pub fn reached(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}
