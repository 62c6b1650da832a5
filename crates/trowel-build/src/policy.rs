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

//! Order policies: deterministic tie-breaking among eligible bricks.
//!
//! The build algorithm computes which bricks are eligible (supports
//! placed, inside the envelope); a policy decides which of them the robot
//! lays next. Every policy must be deterministic so that identical walls
//! and envelopes reproduce identical placement sequences.

use trowel_model::{index::BrickId, wall::Wall};

/// A deterministic choice among eligible bricks.
pub trait OrderPolicy {
    /// Returns the policy name for diagnostics.
    fn name(&self) -> &str;

    /// Returns the next brick to place, or `None` if no brick is
    /// eligible. `is_eligible` is the algorithm's combined support and
    /// envelope check.
    fn pick(&mut self, wall: &Wall, is_eligible: &dyn Fn(BrickId) -> bool) -> Option<BrickId>;
}

impl std::fmt::Debug for dyn OrderPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderPolicy({})", self.name())
    }
}

impl<P: OrderPolicy + ?Sized> OrderPolicy for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn pick(&mut self, wall: &Wall, is_eligible: &dyn Fn(BrickId) -> bool) -> Option<BrickId> {
        (**self).pick(wall, is_eligible)
    }
}

/// The default tie-break: lowest course first, then leftmost.
#[derive(Clone, Copy, Debug, Default)]
pub struct CourseMajor;

impl OrderPolicy for CourseMajor {
    fn name(&self) -> &str {
        "course-major"
    }

    fn pick(&mut self, wall: &Wall, is_eligible: &dyn Fn(BrickId) -> bool) -> Option<BrickId> {
        wall.brick_ids().find(|id| is_eligible(*id))
    }
}

/// Lowest course first, with the scan direction alternating per course:
/// even courses left to right, odd courses right to left. Mirrors how a
/// mason walks a scaffold.
#[derive(Clone, Copy, Debug, Default)]
pub struct Serpentine;

impl OrderPolicy for Serpentine {
    fn name(&self) -> &str {
        "serpentine"
    }

    fn pick(&mut self, wall: &Wall, is_eligible: &dyn Fn(BrickId) -> bool) -> Option<BrickId> {
        for (ci, course) in wall.courses().iter().enumerate() {
            let len = course.len();
            let found = if ci % 2 == 0 {
                (0..len).find(|bi| is_eligible(BrickId::new(ci, *bi)))
            } else {
                (0..len).rev().find(|bi| is_eligible(BrickId::new(ci, *bi)))
            };
            if let Some(bi) = found {
                return Some(BrickId::new(ci, bi));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trowel_model::{
        course::Course,
        format::{BrickFormat, SizeClass},
        index::CourseIndex,
        wall::Wall,
    };

    fn two_course_wall() -> Wall {
        let format = BrickFormat::standard();
        let mut c0 = Course::new(CourseIndex::new(0), 430, &format);
        c0.push_class(SizeClass::Full, &format).unwrap();
        c0.push_class(SizeClass::Full, &format).unwrap();
        let mut c1 = Course::new(CourseIndex::new(1), 430, &format);
        c1.push_class(SizeClass::Half, &format).unwrap();
        c1.push_class(SizeClass::Full, &format).unwrap();
        c1.push_class(SizeClass::Half, &format).unwrap();
        Wall::assemble(format, 430, vec![c0, c1], format.quarter_length(), 2).unwrap()
    }

    #[test]
    fn test_course_major_picks_lowest_then_leftmost() {
        let wall = two_course_wall();
        let mut policy = CourseMajor;
        assert_eq!(
            policy.pick(&wall, &|_| true),
            Some(BrickId::new(0, 0))
        );
        // With the base course masked out, the lowest eligible brick wins.
        assert_eq!(
            policy.pick(&wall, &|id| id.course.get() > 0),
            Some(BrickId::new(1, 0))
        );
    }

    #[test]
    fn test_serpentine_reverses_odd_courses() {
        let wall = two_course_wall();
        let mut policy = Serpentine;
        assert_eq!(
            policy.pick(&wall, &|id| id.course.get() > 0),
            Some(BrickId::new(1, 2))
        );
        // Even courses still scan left to right.
        assert_eq!(policy.pick(&wall, &|_| true), Some(BrickId::new(0, 0)));
    }

    #[test]
    fn test_no_eligible_brick_yields_none() {
        let wall = two_course_wall();
        assert_eq!(CourseMajor.pick(&wall, &|_| false), None);
        assert_eq!(Serpentine.pick(&wall, &|_| false), None);
    }
}
