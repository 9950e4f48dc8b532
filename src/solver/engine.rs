//! Bounded ladder enumeration
//!
//! Depth-first search over an explicit frame stack. A neighbour is only entered
//! when the distance table says the end can still be reached within the bound,
//! and words already on the current path are skipped.

use super::cancel::CancellationToken;
use super::distance::DistanceTable;
use super::puzzle::Puzzle;
use crate::core::{AdjacencyGraph, Word, WordId};
use std::fmt;
use tracing::debug;

/// A complete ladder from start to end
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    ladder: Vec<Word>,
}

impl Solution {
    fn from_ids(graph: &AdjacencyGraph, ids: impl Iterator<Item = WordId>) -> Self {
        Self {
            ladder: ids.map(|id| graph.word(id).clone()).collect(),
        }
    }

    /// Words of the ladder, start first
    #[inline]
    #[must_use]
    pub fn ladder(&self) -> &[Word] {
        &self.ladder
    }

    /// Ladder length in words
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // A ladder always holds its start word
    pub fn len(&self) -> usize {
        self.ladder.len()
    }

    #[must_use]
    pub fn start(&self) -> &Word {
        &self.ladder[0]
    }

    #[must_use]
    pub fn end(&self) -> &Word {
        &self.ladder[self.ladder.len() - 1]
    }

    /// Position of the changed letter for each step after the first word
    pub fn changes(&self) -> impl Iterator<Item = usize> + '_ {
        self.ladder.windows(2).map(|pair| {
            pair[0]
                .differing_positions(&pair[1])
                .first()
                .copied()
                .unwrap_or_default()
        })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.ladder.iter().enumerate() {
            if i > 0 {
                write!(f, " ➔ ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}

/// One DFS frame: a word on the current path and the next neighbour to try
struct Frame {
    node: WordId,
    next: usize,
}

/// Outcome of trying to enter a word
enum Entry {
    Cancelled,
    Pruned,
    Solution,
    Expand,
}

/// Enumerates every ladder of a puzzle up to a length bound
///
/// Counters describe the most recent `solve` call only.
pub struct Solver<'p, 'g> {
    puzzle: &'p Puzzle<'g>,
    cancellation: Option<CancellationToken>,
    explored: usize,
    cancelled: bool,
    #[cfg(test)]
    trip_after: Option<usize>,
}

impl<'p, 'g> Solver<'p, 'g> {
    #[must_use]
    pub const fn new(puzzle: &'p Puzzle<'g>) -> Self {
        Self {
            puzzle,
            cancellation: None,
            explored: 0,
            cancelled: false,
            #[cfg(test)]
            trip_after: None,
        }
    }

    /// Check `token` at every frame entry and stop early once it trips
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Words whose entry was attempted during the last `solve`, pruned ones included
    #[inline]
    #[must_use]
    pub const fn explored_count(&self) -> usize {
        self.explored
    }

    /// True if the last `solve` stopped on cancellation; its result is partial
    #[inline]
    #[must_use]
    pub const fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Find every ladder of at most `max_length` words
    ///
    /// Ladders come out in lexicographic depth-first order, so repeated calls
    /// return the same sequence and the same explored count.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::AdjacencyGraph;
    /// use word_ladder::solver::{Puzzle, PuzzleOptions, Solver};
    ///
    /// let graph = AdjacencyGraph::build(["cat", "cot", "cog", "dog", "dot"]).unwrap();
    /// let puzzle = Puzzle::from_text(&graph, "cat", "dog", PuzzleOptions::default()).unwrap();
    ///
    /// let mut solver = Solver::new(&puzzle);
    /// let solutions = solver.solve(4);
    /// assert_eq!(solutions.len(), 2);
    /// assert_eq!(solutions[0].to_string(), "CAT ➔ COT ➔ COG ➔ DOG");
    /// ```
    pub fn solve(&mut self, max_length: usize) -> Vec<Solution> {
        self.explored = 0;
        self.cancelled = false;

        let puzzle = self.puzzle;
        let graph = puzzle.graph();
        let table = puzzle.distances();
        let root = puzzle.start_id();

        let mut solutions = Vec::new();
        let mut on_path = vec![false; graph.len()];
        // A simple path never holds more words than the graph
        let mut stack: Vec<Frame> = Vec::with_capacity(max_length.min(graph.len()));

        match self.enter(root, 1, max_length, table) {
            Entry::Cancelled | Entry::Pruned => {}
            Entry::Solution => solutions.push(Solution::from_ids(graph, std::iter::once(root))),
            Entry::Expand => {
                on_path[root] = true;
                stack.push(Frame { node: root, next: 0 });
            }
        }

        while let Some(frame) = stack.last_mut() {
            let Some(&next) = graph.neighbors(frame.node).get(frame.next) else {
                on_path[frame.node] = false;
                stack.pop();
                continue;
            };
            frame.next += 1;

            if on_path[next] {
                continue;
            }

            match self.enter(next, stack.len() + 1, max_length, table) {
                Entry::Cancelled => break,
                Entry::Pruned => {}
                Entry::Solution => {
                    let ids = stack.iter().map(|f| f.node).chain(std::iter::once(next));
                    solutions.push(Solution::from_ids(graph, ids));
                }
                Entry::Expand => {
                    on_path[next] = true;
                    stack.push(Frame { node: next, next: 0 });
                }
            }
        }

        debug!(
            start = %puzzle.start(),
            end = %puzzle.end(),
            max_length,
            solutions = solutions.len(),
            explored = self.explored,
            cancelled = self.cancelled,
            "enumerated ladders"
        );

        solutions
    }

    /// Try to enter `node` as word number `depth` of the current path
    fn enter(&mut self, node: WordId, depth: usize, max_length: usize, table: &DistanceTable) -> Entry {
        #[cfg(test)]
        if let (Some(limit), Some(token)) = (self.trip_after, &self.cancellation) {
            if self.explored >= limit {
                token.cancel();
            }
        }

        if self
            .cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            self.cancelled = true;
            return Entry::Cancelled;
        }

        self.explored += 1;

        // The end must still be reachable with the words left in the budget
        match table.lower_bound(node) {
            Some(remaining) if depth + remaining as usize <= max_length => {}
            _ => return Entry::Pruned,
        }

        if node == self.puzzle.end_id() {
            Entry::Solution
        } else {
            Entry::Expand
        }
    }
}

#[cfg(test)]
impl Solver<'_, '_> {
    /// Trip the cancellation token once `attempts` entries have been counted
    fn cancel_after(mut self, attempts: usize) -> Self {
        self.trip_after = Some(attempts);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::EMBEDDED;
    use crate::solver::PuzzleOptions;
    use std::collections::HashSet;

    fn scenario_graph() -> AdjacencyGraph {
        AdjacencyGraph::build(["CAT", "COT", "COG", "DOG", "DOT", "CAG"]).unwrap()
    }

    fn puzzle<'g>(graph: &'g AdjacencyGraph, start: &str, end: &str) -> Puzzle<'g> {
        Puzzle::from_text(graph, start, end, PuzzleOptions::default()).unwrap()
    }

    fn texts(solution: &Solution) -> Vec<&str> {
        solution.ladder().iter().map(Word::text).collect()
    }

    fn assert_valid(solution: &Solution, puzzle: &Puzzle<'_>, max_length: usize) {
        let ladder = solution.ladder();
        assert_eq!(solution.start(), puzzle.start());
        assert_eq!(solution.end(), puzzle.end());
        assert!(solution.len() <= max_length, "{solution} exceeds {max_length}");
        assert!(ladder.windows(2).all(|p| p[0].is_adjacent_to(&p[1])), "{solution}");
        let unique: HashSet<&Word> = ladder.iter().collect();
        assert_eq!(unique.len(), ladder.len(), "{solution} repeats a word");
    }

    #[test]
    fn scenario_minimum_ladder() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut solver = Solver::new(&puzzle);

        let solutions = solver.solve(4);

        assert_eq!(puzzle.minimum_ladder_length(), Some(4));
        assert!(!solutions.is_empty());
        assert!(solutions.iter().all(|s| s.len() == 4));
        assert!(
            solutions
                .iter()
                .any(|s| texts(s) == vec!["CAT", "COT", "COG", "DOG"])
        );
    }

    #[test]
    fn scenario_results_are_lexicographic() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut solver = Solver::new(&puzzle);

        let solutions = solver.solve(4);
        let ladders: Vec<Vec<&str>> = solutions.iter().map(texts).collect();

        assert_eq!(
            ladders,
            vec![
                vec!["CAT", "CAG", "COG", "DOG"],
                vec!["CAT", "COT", "COG", "DOG"],
                vec!["CAT", "COT", "DOT", "DOG"],
            ]
        );
    }

    #[test]
    fn bound_below_minimum_is_empty() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut solver = Solver::new(&puzzle);

        assert!(solver.solve(2).is_empty());
        assert!(solver.solve(3).is_empty());
        assert!(solver.solve(0).is_empty());
        assert!(!solver.was_cancelled());
    }

    #[test]
    fn identical_endpoints_give_singleton_ladder() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "cat");
        let mut solver = Solver::new(&puzzle);

        assert_eq!(puzzle.minimum_ladder_length(), Some(1));
        for max_length in [1, 4, 6] {
            let solutions = solver.solve(max_length);
            assert_eq!(solutions.len(), 1);
            assert_eq!(texts(&solutions[0]), vec!["CAT"]);
        }
    }

    #[test]
    fn longer_bound_finds_detours() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut solver = Solver::new(&puzzle);

        let solutions = solver.solve(6);

        for solution in &solutions {
            assert_valid(solution, &puzzle, 6);
        }
        assert!(
            solutions
                .iter()
                .any(|s| texts(s) == vec!["CAT", "CAG", "COG", "COT", "DOT", "DOG"])
        );
        let unique: HashSet<&Solution> = solutions.iter().collect();
        assert_eq!(unique.len(), solutions.len());
    }

    #[test]
    fn explored_count_is_deterministic() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut solver = Solver::new(&puzzle);

        let first = solver.solve(5);
        let first_explored = solver.explored_count();
        let second = solver.solve(5);

        assert_eq!(first, second);
        assert_eq!(solver.explored_count(), first_explored);
        assert!(first_explored > 0);
    }

    #[test]
    fn explored_count_includes_pruned_words() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut solver = Solver::new(&puzzle);

        // Only the root is attempted and it is pruned straight away
        assert!(solver.solve(2).is_empty());
        assert_eq!(solver.explored_count(), 1);
    }

    #[test]
    fn counters_reset_between_calls() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut solver = Solver::new(&puzzle);

        solver.solve(6);
        let wide = solver.explored_count();
        solver.solve(4);

        assert!(solver.explored_count() < wide);
    }

    #[test]
    fn cancelled_solve_is_flagged() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let token = CancellationToken::new();
        token.cancel();
        let mut solver = Solver::new(&puzzle).with_cancellation(token);

        let solutions = solver.solve(6);

        assert!(solutions.is_empty());
        assert!(solver.was_cancelled());
        assert_eq!(solver.explored_count(), 0);
    }

    #[test]
    fn cancellation_mid_search_keeps_found_ladders() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut full = Solver::new(&puzzle);
        let all = full.solve(4);
        assert_eq!(full.explored_count(), 11);

        // CAT, CAG, COG, COT (pruned), DOG: the first ladder is the fifth entry
        let mut solver = Solver::new(&puzzle)
            .with_cancellation(CancellationToken::new())
            .cancel_after(5);
        let partial = solver.solve(4);

        assert!(solver.was_cancelled());
        assert_eq!(solver.explored_count(), 5);
        assert_eq!(partial.len(), 1);
        assert_eq!(texts(&partial[0]), vec!["CAT", "CAG", "COG", "DOG"]);
        assert_eq!(partial[0], all[0]);
    }

    #[test]
    fn unbounded_length_lists_every_simple_ladder() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut solver = Solver::new(&puzzle);

        let unbounded = solver.solve(usize::MAX);

        assert_eq!(unbounded.len(), 4);
        assert_eq!(unbounded, solver.solve(graph.len()));
        for solution in &unbounded {
            assert_valid(solution, &puzzle, graph.len());
        }
    }

    #[test]
    fn uncancelled_token_does_not_interfere() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let mut plain = Solver::new(&puzzle);
        let mut guarded = Solver::new(&puzzle).with_cancellation(CancellationToken::new());

        assert_eq!(plain.solve(5), guarded.solve(5));
        assert_eq!(plain.explored_count(), guarded.explored_count());
        assert!(!guarded.was_cancelled());
    }

    #[test]
    fn unreachable_puzzle_has_no_solutions() {
        let graph = AdjacencyGraph::build(["CAT", "COT", "ELF", "ELK"]).unwrap();
        let puzzle = puzzle(&graph, "cat", "elf");
        let mut solver = Solver::new(&puzzle);

        assert!(solver.solve(10).is_empty());
    }

    #[test]
    fn solution_changes_and_display() {
        let graph = scenario_graph();
        let puzzle = puzzle(&graph, "cat", "dog");
        let solutions = Solver::new(&puzzle).solve(4);
        let cot_path = &solutions[1];

        assert_eq!(cot_path.to_string(), "CAT ➔ COT ➔ COG ➔ DOG");
        assert_eq!(cot_path.changes().collect::<Vec<_>>(), vec![1, 2, 0]);
    }

    fn embedded_graph(length: usize) -> AdjacencyGraph {
        AdjacencyGraph::build(EMBEDDED.iter().filter(|w| w.len() == length)).unwrap()
    }

    #[test]
    fn minimum_length_is_optimal_on_embedded_words() {
        let graph = embedded_graph(4);
        let pairs = [("cold", "warm"), ("head", "tail"), ("card", "warm"), ("wolf", "wood")];

        for (start, end) in pairs {
            let puzzle = puzzle(&graph, start, end);
            let Some(minimum) = puzzle.minimum_ladder_length() else {
                continue;
            };
            let mut solver = Solver::new(&puzzle);

            let at_minimum = solver.solve(minimum);
            assert!(!at_minimum.is_empty(), "{start} -> {end}");
            assert!(at_minimum.iter().all(|s| s.len() == minimum));
            assert!(solver.solve(minimum - 1).is_empty());
        }
    }

    #[test]
    fn solutions_grow_monotonically_with_bound() {
        let graph = embedded_graph(3);
        let puzzle = puzzle(&graph, "cat", "dog");
        let minimum = puzzle.minimum_ladder_length().unwrap();
        let mut solver = Solver::new(&puzzle);

        let mut previous: HashSet<Solution> = HashSet::new();
        for max_length in minimum..=minimum + 2 {
            let solutions = solver.solve(max_length);
            for solution in &solutions {
                assert_valid(solution, &puzzle, max_length);
            }
            let current: HashSet<Solution> = solutions.into_iter().collect();
            assert!(previous.is_subset(&current), "bound {max_length}");
            previous = current;
        }
    }

    #[test]
    fn repeated_solves_match_on_embedded_words() {
        let graph = embedded_graph(3);
        let puzzle = puzzle(&graph, "pig", "hog");
        let mut first = Solver::new(&puzzle);
        let mut second = Solver::new(&puzzle);

        let a = first.solve(5);
        let b = second.solve(5);

        assert_eq!(a, b);
        assert_eq!(first.explored_count(), second.explored_count());
    }
}
