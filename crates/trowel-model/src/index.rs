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

use trowel_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for course (row) indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct CourseIndexTag;

impl TypedIndexTag for CourseIndexTag {
    const NAME: &'static str = "CourseIndex";
}

/// A typed index for courses, counted from the base of the wall upward.
pub type CourseIndex = TypedIndex<CourseIndexTag>;

/// A tag type for brick indices within a course.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BrickIndexTag;

impl TypedIndexTag for BrickIndexTag {
    const NAME: &'static str = "BrickIndex";
}

/// A typed index for bricks within a single course, counted left to right.
pub type BrickIndex = TypedIndex<BrickIndexTag>;

/// The address of a brick in the wall arena: its course and its position
/// within that course.
///
/// Ordering is course-major, left to right: the same deterministic order
/// the build scheduler uses for tie-breaking.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrickId {
    pub course: CourseIndex,
    pub brick: BrickIndex,
}

impl BrickId {
    /// Creates a new `BrickId` from raw course and brick positions.
    #[inline]
    pub const fn new(course: usize, brick: usize) -> Self {
        Self {
            course: CourseIndex::new(course),
            brick: BrickIndex::new(brick),
        }
    }
}

impl std::fmt::Display for BrickId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}B{}", self.course.get(), self.brick.get())
    }
}

impl std::fmt::Debug for BrickId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BrickId(R{}B{})", self.course.get(), self.brick.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_id_ordering_is_course_major() {
        let a = BrickId::new(0, 5);
        let b = BrickId::new(1, 0);
        let c = BrickId::new(1, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_brick_id_display() {
        assert_eq!(format!("{}", BrickId::new(2, 3)), "R2B3");
    }
}
