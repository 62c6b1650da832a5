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

//! Wild Bond (Wildverband).
//!
//! The Wild Bond has no repeating pattern: each course is a fresh choice
//! of fulls, three-quarters, and halfs that tiles the width exactly while
//! keeping every joint off the joints of the course below, limiting runs
//! of equal brick lengths, and keeping slivers away from the wall ends.
//! Those choices come from the backtracking solver in [`solver`].
//!
//! The solver works course by course, bottom up: each solved course fixes
//! the joint set the next course must avoid. Backtracking happens within
//! a course only; if a later course cannot be solved against the course
//! beneath it, generation fails as infeasible and the driver may retry
//! with a different seed.

pub mod solver;
pub(crate) mod stack;
pub mod stats;

use self::solver::WildSolver;
use rustc_hash::FxHashSet;
use trowel_model::format::{BrickFormat, Millimeter, SizeClass};

/// Configuration of the Wild Bond solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WildConfig {
    /// Seed for the domain try-order shuffle. Walls are deterministic per
    /// seed and vary across seeds.
    pub seed: u64,
    /// Maximum number of consecutive bricks of one size class within a
    /// course.
    pub max_run: usize,
    /// Search step budget for one wall. Exceeding it fails generation.
    pub step_limit: u64,
}

impl WildConfig {
    /// Creates a config with the given seed and default constraints.
    #[inline]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

impl Default for WildConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_run: 3,
            step_limit: 100_000,
        }
    }
}

/// The error type for Wild Bond solving. Terminal; the driver decides
/// whether to retry with another seed or a larger budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WildError {
    /// The search space of a course was exhausted without a solution.
    Exhausted { course: usize },
    /// The step budget ran out before the wall was solved.
    StepLimitExceeded { limit: u64 },
}

impl std::fmt::Display for WildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted { course } => {
                write!(f, "Search space exhausted solving course {}", course)
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "Step budget of {} exhausted", limit)
            }
        }
    }
}

impl std::error::Error for WildError {}

/// Returns `true` if a Wild course of `cells` quarter cells is worth
/// attempting: the palette needs room for at least two corner-legal
/// bricks.
pub(crate) fn satisfiable(cells: usize) -> bool {
    cells >= 8
}

/// Solves every course of a wall, bottom up.
pub(crate) fn layout(
    width: Millimeter,
    courses: usize,
    format: &BrickFormat,
    config: WildConfig,
) -> Result<Vec<Vec<SizeClass>>, WildError> {
    let mut solver = WildSolver::new(config);
    let mut below_joints = FxHashSet::default();
    let mut rows = Vec::with_capacity(courses);
    for ordinate in 0..courses {
        let classes = solver.solve_course(ordinate, width, format, &below_joints)?;
        below_joints = interior_joints(&classes, format);
        rows.push(classes);
    }
    Ok(rows)
}

/// Computes the interior joint positions of a class sequence: the end
/// coordinate of every brick except the last.
pub(crate) fn interior_joints(
    classes: &[SizeClass],
    format: &BrickFormat,
) -> FxHashSet<Millimeter> {
    let mut joints = FxHashSet::default();
    let mut cursor = 0;
    for class in &classes[..classes.len().saturating_sub(1)] {
        let end = cursor + class.length_in(format);
        joints.insert(end);
        cursor = end + format.head_joint();
    }
    joints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_joints() {
        let format = BrickFormat::standard();
        let classes = vec![SizeClass::Full, SizeClass::Half, SizeClass::Full];
        let joints = interior_joints(&classes, &format);
        assert!(joints.contains(&210));
        assert!(joints.contains(&320));
        assert_eq!(joints.len(), 2);
    }

    #[test]
    fn test_layout_is_deterministic_per_seed() {
        let format = BrickFormat::standard();
        let width = format.cells_to_width(20);
        let a = layout(width, 3, &format, WildConfig::with_seed(42)).unwrap();
        let b = layout(width, 3, &format, WildConfig::with_seed(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_layout_avoids_joints_of_course_below() {
        let format = BrickFormat::standard();
        let width = format.cells_to_width(20);
        for seed in 0..32 {
            let rows = layout(width, 4, &format, WildConfig::with_seed(seed)).unwrap();
            for pair in rows.windows(2) {
                let below = interior_joints(&pair[0], &format);
                let above = interior_joints(&pair[1], &format);
                assert!(
                    below.is_disjoint(&above),
                    "seed {} shares a joint between adjacent courses",
                    seed
                );
            }
        }
    }

    #[test]
    fn test_layout_rows_tile_exactly() {
        let format = BrickFormat::standard();
        let width = format.cells_to_width(26);
        let rows = layout(width, 5, &format, WildConfig::with_seed(7)).unwrap();
        assert_eq!(rows.len(), 5);
        for row in rows {
            let total: Millimeter = row.iter().map(|c| c.length_in(&format)).sum::<i64>()
                + format.head_joint() * (row.len() as i64 - 1);
            assert_eq!(total, width);
        }
    }
}
