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

//! The support relation between bricks of adjacent courses.
//!
//! A brick in course `i` is supported by every brick in course `i - 1`
//! whose span overlaps its own by at least the minimum bearing length.
//! The relation is a derived index: it is computed from geometry alone in
//! one pass after generation and can always be rebuilt. Edges only point
//! from a course to the course directly above, so the graph is acyclic by
//! construction.

use crate::{course::Course, format::Millimeter, index::BrickId};
use smallvec::SmallVec;

/// Support lists stay inline up to four entries; no bond produces more.
type SupportList = SmallVec<[BrickId; 4]>;

/// The error type for structural validation of a generated wall.
///
/// Either case indicates a defect in the bond generator that produced the
/// wall, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportError {
    /// A brick above the base course rests on nothing.
    Unsupported { id: BrickId },
    /// A brick has more supports than its bond declares possible.
    Oversupported {
        id: BrickId,
        count: usize,
        max: usize,
    },
}

impl std::fmt::Display for SupportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { id } => {
                write!(f, "Brick {} is above the base course but has no supports", id)
            }
            Self::Oversupported { id, count, max } => write!(
                f,
                "Brick {} has {} supports, more than the declared maximum of {}",
                id, count, max
            ),
        }
    }
}

impl std::error::Error for SupportError {}

/// The derived support graph of a wall.
///
/// Stores, per brick, the bricks directly beneath it that must be placed
/// first (`supports`) and the reverse relation (`loads`). Brick addresses
/// are flattened course-major for compact storage.
#[derive(Clone, Debug)]
pub struct SupportGraph {
    /// Flat index of the first brick of each course, plus a trailing total.
    offsets: Vec<usize>,
    supports: Vec<SupportList>,
    loads: Vec<SupportList>,
    min_overlap: Millimeter,
}

impl SupportGraph {
    /// Computes the support relation for the given courses.
    ///
    /// Two vertically adjacent bricks are linked when their spans overlap
    /// by at least `min_overlap` millimeters (classically the quarter-brick
    /// length).
    pub fn derive(courses: &[Course], min_overlap: Millimeter) -> Self {
        let mut offsets = Vec::with_capacity(courses.len() + 1);
        let mut total = 0usize;
        for course in courses {
            offsets.push(total);
            total += course.len();
        }
        offsets.push(total);

        let mut supports = vec![SupportList::new(); total];
        let mut loads = vec![SupportList::new(); total];

        for (upper_idx, pair) in courses.windows(2).enumerate() {
            let (below, above) = (&pair[0], &pair[1]);
            for (bi, brick) in above.bricks().iter().enumerate() {
                let above_id = BrickId::new(upper_idx + 1, bi);
                for (si, candidate) in below.bricks().iter().enumerate() {
                    if brick.span().overlap_len(candidate.span()) >= min_overlap {
                        let below_id = BrickId::new(upper_idx, si);
                        supports[offsets[upper_idx + 1] + bi].push(below_id);
                        loads[offsets[upper_idx] + si].push(above_id);
                    }
                }
            }
        }

        Self {
            offsets,
            supports,
            loads,
            min_overlap,
        }
    }

    /// Returns the minimum bearing overlap this graph was derived with.
    #[inline]
    pub fn min_overlap(&self) -> Millimeter {
        self.min_overlap
    }

    /// Returns the total number of bricks indexed.
    #[inline]
    pub fn num_bricks(&self) -> usize {
        self.supports.len()
    }

    /// Returns the course-major flat index of a brick, suitable for bitset
    /// or array storage keyed by brick.
    #[inline]
    pub fn flat_index(&self, id: BrickId) -> usize {
        self.offsets[id.course.get()] + id.brick.get()
    }

    /// Returns the bricks directly beneath `id` that must be placed before
    /// it. Empty for base-course bricks.
    #[inline]
    pub fn supports(&self, id: BrickId) -> &[BrickId] {
        &self.supports[self.flat_index(id)]
    }

    /// Returns the bricks directly above `id` that rest on it.
    #[inline]
    pub fn loads(&self, id: BrickId) -> &[BrickId] {
        &self.loads[self.flat_index(id)]
    }

    /// Validates the support-count invariant: every brick above the base
    /// course has between 1 and `max_supports` supports.
    ///
    /// Runs once after generation, regardless of which bond produced the
    /// wall.
    pub fn validate(&self, courses: &[Course], max_supports: usize) -> Result<(), SupportError> {
        for (ci, course) in courses.iter().enumerate().skip(1) {
            for bi in 0..course.len() {
                let id = BrickId::new(ci, bi);
                let count = self.supports(id).len();
                if count == 0 {
                    return Err(SupportError::Unsupported { id });
                }
                if count > max_supports {
                    return Err(SupportError::Oversupported {
                        id,
                        count,
                        max: max_supports,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        course::Course,
        format::{BrickFormat, SizeClass},
        index::CourseIndex,
    };

    /// Two stretcher courses: `F F` below, `H F H` above (width 430).
    fn stretcher_pair() -> Vec<Course> {
        let format = BrickFormat::standard();
        let mut below = Course::new(CourseIndex::new(0), 430, &format);
        below.push_class(SizeClass::Full, &format).unwrap();
        below.push_class(SizeClass::Full, &format).unwrap();
        let mut above = Course::new(CourseIndex::new(1), 430, &format);
        above.push_class(SizeClass::Half, &format).unwrap();
        above.push_class(SizeClass::Full, &format).unwrap();
        above.push_class(SizeClass::Half, &format).unwrap();
        vec![below, above]
    }

    #[test]
    fn test_derive_links_overlapping_bricks() {
        let courses = stretcher_pair();
        let graph = SupportGraph::derive(&courses, BrickFormat::standard().quarter_length());

        // Base course bricks have no supports.
        assert!(graph.supports(BrickId::new(0, 0)).is_empty());
        assert!(graph.supports(BrickId::new(0, 1)).is_empty());

        // The half at the left end rests on the first full only.
        assert_eq!(graph.supports(BrickId::new(1, 0)), &[BrickId::new(0, 0)]);
        // The middle full bridges both fulls below.
        assert_eq!(
            graph.supports(BrickId::new(1, 1)),
            &[BrickId::new(0, 0), BrickId::new(0, 1)]
        );
        // The right half rests on the second full only.
        assert_eq!(graph.supports(BrickId::new(1, 2)), &[BrickId::new(0, 1)]);

        // Loads mirror supports.
        assert_eq!(
            graph.loads(BrickId::new(0, 0)),
            &[BrickId::new(1, 0), BrickId::new(1, 1)]
        );
    }

    #[test]
    fn test_validate_accepts_running_bond() {
        let courses = stretcher_pair();
        let graph = SupportGraph::derive(&courses, BrickFormat::standard().quarter_length());
        assert!(graph.validate(&courses, 2).is_ok());
    }

    #[test]
    fn test_validate_rejects_too_many_supports() {
        let courses = stretcher_pair();
        let graph = SupportGraph::derive(&courses, BrickFormat::standard().quarter_length());
        // The bridging full has two supports; a declared max of one fails.
        assert_eq!(
            graph.validate(&courses, 1),
            Err(SupportError::Oversupported {
                id: BrickId::new(1, 1),
                count: 2,
                max: 1,
            })
        );
    }

    #[test]
    fn test_validate_rejects_floating_brick() {
        let format = BrickFormat::standard();
        // Below: a single full at the left of a 430-wide course (unfilled on
        // purpose). Above: `H F H`, whose right half floats past the full.
        let mut below = Course::new(CourseIndex::new(0), 430, &format);
        below.push_class(SizeClass::Full, &format).unwrap();
        let mut above = Course::new(CourseIndex::new(1), 430, &format);
        above.push_class(SizeClass::Half, &format).unwrap();
        above.push_class(SizeClass::Full, &format).unwrap();
        above.push_class(SizeClass::Half, &format).unwrap();
        let courses = vec![below, above];

        let graph = SupportGraph::derive(&courses, format.quarter_length());
        assert_eq!(
            graph.validate(&courses, 2),
            Err(SupportError::Unsupported {
                id: BrickId::new(1, 2),
            })
        );
    }

    #[test]
    fn test_overlap_threshold_is_inclusive() {
        let format = BrickFormat::standard();
        // Below: `F F`; above: `3Q ...`. The three-quarter ends at 155,
        // overlapping the first full by exactly 155 and the second by zero.
        let mut below = Course::new(CourseIndex::new(0), 430, &format);
        below.push_class(SizeClass::Full, &format).unwrap();
        below.push_class(SizeClass::Full, &format).unwrap();
        let mut above = Course::new(CourseIndex::new(1), 430, &format);
        above.push_class(SizeClass::ThreeQuarter, &format).unwrap();
        above.push_class(SizeClass::Full, &format).unwrap();
        // Second brick spans [165, 375): overlaps F[0,210) by 45 exactly.
        let courses = vec![below, above];
        let graph = SupportGraph::derive(&courses, format.quarter_length());
        assert_eq!(
            graph.supports(BrickId::new(1, 1)),
            &[BrickId::new(0, 0), BrickId::new(0, 1)]
        );
    }
}
