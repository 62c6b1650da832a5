// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The Wild Bond backtracking solver.
//!
//! One course is solved at a time, left to right. At each position the
//! admissible size classes form the domain; the solver tries them in a
//! seeded random order and backtracks on dead ends. The search state is
//! an explicit stack of frames, so termination is enforced by a plain
//! step counter and partial states can be inspected in tests.
//!
//! Admissibility at a position combines four checks:
//!
//! * the brick must fit the remaining width (with room for a successor
//!   unless it closes the course exactly),
//! * its end joint must not sit on a joint of the course below,
//! * it must not extend a run of equal classes past the configured cap,
//! * the first and last brick of the course must be at least a half.
//!
//! Shuffling affects try-order only; every ordering explores the same
//! search space, so correctness never depends on the seed.

use crate::wild::{
    stack::{Frame, SearchStack},
    stats::WildSolverStatistics,
    WildConfig, WildError,
};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use trowel_model::format::{BrickFormat, Millimeter, SizeClass};

/// The size classes the Wild Bond lays. Quarters are excluded: they would
/// be slivers at the ends and could stack four supports under a full.
const PALETTE: [SizeClass; 3] = [SizeClass::Full, SizeClass::ThreeQuarter, SizeClass::Half];

/// A seeded depth-first backtracking solver for Wild Bond courses.
///
/// The solver is stateful across courses of one wall: the RNG stream and
/// the step budget are shared, which is what makes a whole wall
/// deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct WildSolver {
    config: WildConfig,
    rng: ChaCha8Rng,
    stack: SearchStack,
    stats: WildSolverStatistics,
}

impl WildSolver {
    /// Creates a solver seeded from the configuration.
    pub fn new(config: WildConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            rng,
            stack: SearchStack::new(),
            stats: WildSolverStatistics::default(),
        }
    }

    /// Returns the solver configuration.
    #[inline]
    pub fn config(&self) -> &WildConfig {
        &self.config
    }

    /// Returns the statistics accumulated so far.
    #[inline]
    pub fn statistics(&self) -> &WildSolverStatistics {
        &self.stats
    }

    /// Solves one course: a class sequence that tiles `width` exactly and
    /// satisfies the offset, run, and corner constraints against
    /// `below_joints` (the interior joints of the course beneath; empty
    /// for the base course).
    pub fn solve_course(
        &mut self,
        ordinate: usize,
        width: Millimeter,
        format: &BrickFormat,
        below_joints: &FxHashSet<Millimeter>,
    ) -> Result<Vec<SizeClass>, WildError> {
        self.stack.clear();
        let mut chosen: Vec<SizeClass> = Vec::new();
        let root_domain = self.domain_at(0, width, format, below_joints, &chosen);
        self.stack.push(Frame::new(0, root_domain));

        loop {
            let (cursor, choice) = match self.stack.top_mut() {
                None => return Err(WildError::Exhausted { course: ordinate }),
                Some(frame) => (frame.cursor(), frame.next_choice()),
            };

            let class = match choice {
                None => {
                    // Domain exhausted at this position: backtrack.
                    self.stack.pop();
                    chosen.pop();
                    self.stats.on_backtrack();
                    continue;
                }
                Some(class) => class,
            };

            self.stats.on_step();
            if self.stats.steps > self.config.step_limit {
                return Err(WildError::StepLimitExceeded {
                    limit: self.config.step_limit,
                });
            }

            let end = cursor + class.length_in(format);
            chosen.push(class);
            if end == width {
                return Ok(chosen);
            }

            let next_cursor = end + format.head_joint();
            let domain = self.domain_at(next_cursor, width, format, below_joints, &chosen);
            self.stack.push(Frame::new(next_cursor, domain));
            self.stats.on_depth_update(self.stack.depth() as u64);
        }
    }

    /// Builds the shuffled domain for the position at `cursor`, filtered
    /// against the current partial course.
    fn domain_at(
        &mut self,
        cursor: Millimeter,
        width: Millimeter,
        format: &BrickFormat,
        below_joints: &FxHashSet<Millimeter>,
        chosen: &[SizeClass],
    ) -> SmallVec<[SizeClass; 4]> {
        let mut domain: SmallVec<[SizeClass; 4]> = SmallVec::new();
        for class in PALETTE {
            if self.admits(cursor, class, width, format, below_joints, chosen) {
                domain.push(class);
            }
        }
        domain.shuffle(&mut self.rng);
        domain
    }

    fn admits(
        &self,
        cursor: Millimeter,
        class: SizeClass,
        width: Millimeter,
        format: &BrickFormat,
        below_joints: &FxHashSet<Millimeter>,
        chosen: &[SizeClass],
    ) -> bool {
        let end = cursor + class.length_in(format);
        if end > width {
            return false;
        }

        // Run constraint: the trailing run of this class must stay under
        // the cap.
        let run = chosen.iter().rev().take_while(|c| **c == class).count();
        if run >= self.config.max_run {
            return false;
        }

        // Corner constraint at both wall ends.
        if (cursor == 0 || end == width) && class < SizeClass::Half {
            return false;
        }

        if end == width {
            return true;
        }

        // Offset constraint: the joint after this brick must not sit on a
        // joint of the course below.
        if below_joints.contains(&end) {
            return false;
        }

        // The shortest possible successor is a half; anything tighter is
        // a dead end.
        end + format.head_joint() + format.half_length() <= width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(
        seed: u64,
        cells: usize,
        below: &[Millimeter],
    ) -> Result<Vec<SizeClass>, WildError> {
        let format = BrickFormat::standard();
        let width = format.cells_to_width(cells);
        let joints: FxHashSet<Millimeter> = below.iter().copied().collect();
        WildSolver::new(WildConfig::with_seed(seed)).solve_course(0, width, &format, &joints)
    }

    #[test]
    fn test_solution_tiles_width_exactly() {
        let format = BrickFormat::standard();
        let classes = solve(1, 20, &[]).unwrap();
        let total: Millimeter = classes.iter().map(|c| c.length_in(&format)).sum::<i64>()
            + format.head_joint() * (classes.len() as i64 - 1);
        assert_eq!(total, format.cells_to_width(20));
    }

    #[test]
    fn test_same_seed_same_course() {
        assert_eq!(solve(42, 20, &[]).unwrap(), solve(42, 20, &[]).unwrap());
    }

    #[test]
    fn test_run_constraint_holds_across_seeds() {
        let max_run = WildConfig::default().max_run;
        for seed in 0..24 {
            let classes = solve(seed, 36, &[]).unwrap();
            let mut run = 1;
            for pair in classes.windows(2) {
                run = if pair[0] == pair[1] { run + 1 } else { 1 };
                assert!(run <= max_run, "seed {} runs {} of {:?}", seed, run, pair[1]);
            }
        }
    }

    #[test]
    fn test_corner_bricks_are_at_least_half() {
        for seed in 0..24 {
            let classes = solve(seed, 28, &[]).unwrap();
            assert!(*classes.first().unwrap() >= SizeClass::Half);
            assert!(*classes.last().unwrap() >= SizeClass::Half);
        }
    }

    #[test]
    fn test_offset_constraint_respects_below_joints() {
        let format = BrickFormat::standard();
        // Below course F F F (joints at 210 and 430, width 650).
        let classes = solve(5, 12, &[210, 430]).unwrap();
        let mut cursor = 0;
        for class in &classes[..classes.len() - 1] {
            let end = cursor + class.length_in(&format);
            assert_ne!(end, 210);
            assert_ne!(end, 430);
            cursor = end + format.head_joint();
        }
    }

    #[test]
    fn test_exhausted_when_every_tiling_is_blocked() {
        // Six cells (320 mm) admits only F+H, H+F, 3Q+3Q, and H+H+H, whose
        // interior joints all land on 100, 155, or 210.
        let err = solve(3, 6, &[100, 155, 210]).unwrap_err();
        assert_eq!(err, WildError::Exhausted { course: 0 });
    }

    #[test]
    fn test_step_limit_is_enforced() {
        let format = BrickFormat::standard();
        let config = WildConfig {
            seed: 0,
            max_run: 3,
            step_limit: 1,
        };
        // Twelve cells need at least three bricks, so more than one step.
        let err = WildSolver::new(config)
            .solve_course(0, format.cells_to_width(12), &format, &FxHashSet::default())
            .unwrap_err();
        assert_eq!(err, WildError::StepLimitExceeded { limit: 1 });
    }

    #[test]
    fn test_statistics_track_search_effort() {
        let format = BrickFormat::standard();
        let mut solver = WildSolver::new(WildConfig::with_seed(9));
        solver
            .solve_course(0, format.cells_to_width(20), &format, &FxHashSet::default())
            .unwrap();
        let stats = solver.statistics();
        assert!(stats.steps > 0);
        assert!(stats.max_depth > 0);
    }
}
