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

//! Bond dispatch and the shared generation pipeline.
//!
//! The bond is a closed tagged variant rather than an open trait hierarchy:
//! the support-graph validation runs identically regardless of which
//! variant produced the courses, and the variant set is fixed by the
//! domain.

use crate::{english_cross, flemish, stretcher, wild, wild::WildConfig, wild::WildError};
use trowel_model::{
    course::Course,
    format::{BrickFormat, Millimeter, SizeClass},
    index::CourseIndex,
    support::SupportError,
    wall::Wall,
};

/// The error type for wall generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BondError {
    /// The wall width is not an integer combination of the variant's brick
    /// sizes plus joints.
    UnsatisfiableBond {
        width: Millimeter,
        bond: &'static str,
    },
    /// The Wild solver exhausted its search space or step budget.
    Infeasible(WildError),
    /// The generated wall violates the support-count invariant. Indicates
    /// a defect in a bond generator.
    InvalidSupport(SupportError),
}

impl std::fmt::Display for BondError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsatisfiableBond { width, bond } => {
                write!(f, "Wall width {} mm cannot be tiled by {}", width, bond)
            }
            Self::Infeasible(e) => write!(f, "Wild solver infeasible: {}", e),
            Self::InvalidSupport(e) => write!(f, "Support validation failed: {}", e),
        }
    }
}

impl std::error::Error for BondError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Infeasible(e) => Some(e),
            Self::InvalidSupport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WildError> for BondError {
    fn from(e: WildError) -> Self {
        Self::Infeasible(e)
    }
}

impl From<SupportError> for BondError {
    fn from(e: SupportError) -> Self {
        Self::InvalidSupport(e)
    }
}

/// The supported masonry bonds.
///
/// A `Bond` is configuration, not runtime state: [`Bond::generate`] is a
/// pure function from wall dimensions to a validated [`Wall`]
/// (deterministic for the closed-form variants, deterministic per seed for
/// Wild).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bond {
    /// Running bond: courses alternate between two offset phases half a
    /// brick apart.
    Stretcher,
    /// Fulls and halfs alternate within each course; offset courses carry
    /// three-quarter corner bricks.
    Flemish,
    /// Stretcher and header courses alternate, with the stretcher phase
    /// shifting half a brick every cycle.
    EnglishCross,
    /// No repeating pattern; per-course layouts come from the seeded
    /// backtracking solver.
    Wild(WildConfig),
}

impl Bond {
    /// Returns the display name of this bond.
    pub fn name(&self) -> &'static str {
        match self {
            Bond::Stretcher => "Stretcher Bond",
            Bond::Flemish => "Flemish Bond",
            Bond::EnglishCross => "English Cross Bond",
            Bond::Wild(_) => "Wild Bond",
        }
    }

    /// Returns the maximum number of supports a brick of this bond can
    /// have. Running offsets give two; three-quarter corners and header
    /// crossings give three.
    pub fn max_supports(&self) -> usize {
        match self {
            Bond::Stretcher => 2,
            Bond::Flemish | Bond::EnglishCross | Bond::Wild(_) => 3,
        }
    }

    /// Returns `true` if a wall of `cells` quarter cells can be tiled by
    /// this bond.
    fn cells_satisfiable(&self, cells: usize) -> bool {
        match self {
            Bond::Stretcher => stretcher::satisfiable(cells),
            Bond::Flemish => flemish::satisfiable(cells),
            Bond::EnglishCross => english_cross::satisfiable(cells),
            Bond::Wild(_) => wild::satisfiable(cells),
        }
    }

    /// Snaps a requested width to the closest width this bond can tile.
    ///
    /// The strict [`Bond::generate`] contract never adjusts dimensions;
    /// drivers that prefer adjustment over failure call this first. Ties
    /// round down.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use trowel_bond::bond::Bond;
    /// # use trowel_model::format::BrickFormat;
    /// let format = BrickFormat::standard();
    /// let legal = Bond::Stretcher.nearest_legal_width(900, &format);
    /// assert_eq!(legal, 870);
    /// assert_eq!(
    ///     Bond::Stretcher.nearest_legal_width(legal, &format),
    ///     legal
    /// );
    /// ```
    pub fn nearest_legal_width(&self, width: Millimeter, format: &BrickFormat) -> Millimeter {
        let pitch = format.cell_pitch();
        let base = ((width + format.head_joint()) + pitch / 2) / pitch;
        let mut best: Option<(Millimeter, Millimeter)> = None;
        // Valid cell counts recur at worst every six cells, so a short
        // outward scan always finds one.
        for delta in -8i64..=8 {
            let cells = base + delta;
            if cells < 1 {
                continue;
            }
            let cells = cells as usize;
            if !self.cells_satisfiable(cells) {
                continue;
            }
            let candidate = format.cells_to_width(cells);
            let distance = (candidate - width).abs();
            let better = match best {
                None => true,
                Some((best_width, best_distance)) => {
                    distance < best_distance
                        || (distance == best_distance && candidate < best_width)
                }
            };
            if better {
                best = Some((candidate, distance));
            }
        }
        best.map(|(w, _)| w).unwrap_or(width)
    }

    /// Generates a wall of the given width and course count.
    ///
    /// Fails with [`BondError::UnsatisfiableBond`] if the width is not
    /// exactly tileable by this variant, [`BondError::Infeasible`] if the
    /// Wild solver gives up, and [`BondError::InvalidSupport`] if the
    /// post-generation structural check rejects the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use trowel_bond::bond::Bond;
    /// # use trowel_model::format::BrickFormat;
    /// let format = BrickFormat::standard();
    /// let wall = Bond::Stretcher.generate(870, 4, &format).unwrap();
    /// assert_eq!(wall.num_courses(), 4);
    /// assert_eq!(wall.num_bricks(), 18);
    /// ```
    pub fn generate(
        &self,
        width: Millimeter,
        course_count: usize,
        format: &BrickFormat,
    ) -> Result<Wall, BondError> {
        let unsatisfiable = || BondError::UnsatisfiableBond {
            width,
            bond: self.name(),
        };
        let cells = format
            .width_in_cells(width)
            .ok_or_else(|| unsatisfiable())?;
        if !self.cells_satisfiable(cells) {
            return Err(unsatisfiable());
        }

        let layouts: Vec<Vec<SizeClass>> = match self {
            Bond::Stretcher => stretcher::layout(cells, course_count),
            Bond::Flemish => flemish::layout(cells, course_count),
            Bond::EnglishCross => english_cross::layout(cells, course_count),
            Bond::Wild(config) => wild::layout(width, course_count, format, config.clone())?,
        };

        let mut courses = Vec::with_capacity(course_count);
        for (ordinate, classes) in layouts.into_iter().enumerate() {
            let mut course = Course::new(CourseIndex::new(ordinate), width, format);
            for class in classes {
                course.push_class(class, format).map_err(|_| unsatisfiable())?;
            }
            if !course.is_exactly_filled() {
                return Err(unsatisfiable());
            }
            courses.push(course);
        }

        let wall = Wall::assemble(
            *format,
            width,
            courses,
            format.quarter_length(),
            self.max_supports(),
        )?;
        Ok(wall)
    }
}

impl std::fmt::Display for Bond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trowel_model::brick::BrickState;

    #[test]
    fn test_generated_bricks_start_unplaced() {
        let format = BrickFormat::standard();
        for bond in [Bond::Stretcher, Bond::Flemish, Bond::EnglishCross] {
            let width = bond.nearest_legal_width(900, &format);
            let wall = bond.generate(width, 4, &format).unwrap();
            for id in wall.brick_ids() {
                assert_eq!(wall.brick(id).state(), BrickState::Unplaced);
            }
        }
    }

    #[test]
    fn test_every_course_fills_width_exactly() {
        let format = BrickFormat::standard();
        for bond in [
            Bond::Stretcher,
            Bond::Flemish,
            Bond::EnglishCross,
            Bond::Wild(WildConfig::default()),
        ] {
            let width = bond.nearest_legal_width(1100, &format);
            let wall = bond.generate(width, 5, &format).unwrap();
            for course in wall.courses() {
                assert!(course.is_exactly_filled(), "{}: {}", bond, course);
                assert_eq!(course.target_width(), width);
            }
        }
    }

    #[test]
    fn test_off_grid_width_is_unsatisfiable() {
        let format = BrickFormat::standard();
        // 500 mm is not on the 55 mm quarter-cell grid.
        let err = Bond::Stretcher.generate(500, 4, &format).unwrap_err();
        assert!(matches!(err, BondError::UnsatisfiableBond { width: 500, .. }));
    }

    #[test]
    fn test_on_grid_but_untileable_width_is_unsatisfiable() {
        let format = BrickFormat::standard();
        // Nine cells (485 mm) is on the grid but odd, so no stretcher
        // course of fulls and halfs can close it.
        assert_eq!(format.width_in_cells(485), Some(9));
        let err = Bond::Stretcher.generate(485, 4, &format).unwrap_err();
        assert!(matches!(err, BondError::UnsatisfiableBond { .. }));
    }

    #[test]
    fn test_nearest_legal_width_round_trip() {
        let format = BrickFormat::standard();
        for bond in [
            Bond::Stretcher,
            Bond::Flemish,
            Bond::EnglishCross,
            Bond::Wild(WildConfig::default()),
        ] {
            let legal = bond.nearest_legal_width(2300, &format);
            // Snapping is idempotent and the result generates cleanly.
            assert_eq!(bond.nearest_legal_width(legal, &format), legal);
            assert!(bond.generate(legal, 3, &format).is_ok(), "{}", bond);
        }
    }

    #[test]
    fn test_flemish_supports_and_corners() {
        let format = BrickFormat::standard();
        let wall = Bond::Flemish.generate(870, 4, &format).unwrap();

        let mut saw_triple = false;
        for id in wall.brick_ids() {
            let count = wall.supports(id).len();
            if id.course.get() == 0 {
                assert_eq!(count, 0);
            } else {
                assert!((1..=3).contains(&count), "{} has {} supports", id, count);
                saw_triple |= count == 3;
            }
        }
        // The three-quarter corners make some bricks bridge three below.
        assert!(saw_triple);

        for course in wall.courses().iter().skip(1).step_by(2) {
            let bricks = course.bricks();
            assert_eq!(bricks[0].class(), SizeClass::ThreeQuarter);
            assert_eq!(bricks[bricks.len() - 1].class(), SizeClass::ThreeQuarter);
        }
    }

    #[test]
    fn test_max_supports_declarations() {
        assert_eq!(Bond::Stretcher.max_supports(), 2);
        assert_eq!(Bond::Flemish.max_supports(), 3);
        assert_eq!(Bond::EnglishCross.max_supports(), 3);
        assert_eq!(Bond::Wild(WildConfig::default()).max_supports(), 3);
    }
}
