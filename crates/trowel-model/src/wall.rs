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

//! The wall: an arena of bricks organized in courses, plus the derived
//! support graph.
//!
//! A `Wall` is assembled once by a bond generator and never structurally
//! mutated afterward. The only mutable aspect is each brick's placement
//! state, flipped through [`Wall::place`] by the build scheduler. Bricks
//! are addressed by [`BrickId`] rather than references, so the support
//! relation can be stored as plain index pairs without ownership cycles.

use crate::{
    brick::Brick,
    course::Course,
    format::{BrickFormat, Millimeter},
    index::{BrickId, CourseIndex},
    support::{SupportError, SupportGraph},
};

/// A wall: courses of bricks and the support relation between them.
#[derive(Clone, Debug)]
pub struct Wall {
    format: BrickFormat,
    width: Millimeter,
    courses: Vec<Course>,
    graph: SupportGraph,
}

impl Wall {
    /// Assembles a wall from generated courses: derives the support graph
    /// and validates the support-count invariant in one pass.
    ///
    /// `max_supports` is the producing bond's declared maximum; the check
    /// itself is bond-independent.
    pub fn assemble(
        format: BrickFormat,
        width: Millimeter,
        courses: Vec<Course>,
        min_overlap: Millimeter,
        max_supports: usize,
    ) -> Result<Self, SupportError> {
        debug_assert!(
            courses.iter().all(|c| c.is_exactly_filled()),
            "called `Wall::assemble` with a course that does not fill the wall width exactly"
        );
        debug_assert!(
            courses
                .iter()
                .enumerate()
                .all(|(i, c)| c.ordinate().get() == i),
            "called `Wall::assemble` with non-sequential course ordinates"
        );

        let graph = SupportGraph::derive(&courses, min_overlap);
        graph.validate(&courses, max_supports)?;
        Ok(Self {
            format,
            width,
            courses,
            graph,
        })
    }

    /// Returns the brick format the wall is built from.
    #[inline]
    pub fn format(&self) -> &BrickFormat {
        &self.format
    }

    /// Returns the wall width in millimeters.
    #[inline]
    pub fn width(&self) -> Millimeter {
        self.width
    }

    /// Returns the number of courses.
    #[inline]
    pub fn num_courses(&self) -> usize {
        self.courses.len()
    }

    /// Returns the total number of bricks.
    #[inline]
    pub fn num_bricks(&self) -> usize {
        self.graph.num_bricks()
    }

    /// Returns the course at the given ordinate.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn course(&self, index: CourseIndex) -> &Course {
        &self.courses[index.get()]
    }

    /// Returns all courses, base first.
    #[inline]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Returns the brick at the given address.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    #[inline]
    pub fn brick(&self, id: BrickId) -> &Brick {
        self.courses[id.course.get()].brick(id.brick)
    }

    /// Returns `true` if the brick at `id` has been placed.
    #[inline]
    pub fn is_placed(&self, id: BrickId) -> bool {
        self.brick(id).is_placed()
    }

    /// Marks the brick at `id` as placed.
    #[inline]
    pub fn place(&mut self, id: BrickId) {
        self.courses[id.course.get()].brick_mut(id.brick).place();
    }

    /// Returns every brick to the unplaced state.
    pub fn reset_states(&mut self) {
        for course in &mut self.courses {
            for bi in 0..course.len() {
                course.brick_mut(crate::index::BrickIndex::new(bi)).reset();
            }
        }
    }

    /// Returns `true` if every brick has been placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.courses
            .iter()
            .all(|c| c.bricks().iter().all(|b| b.is_placed()))
    }

    /// Returns the derived support graph.
    #[inline]
    pub fn support_graph(&self) -> &SupportGraph {
        &self.graph
    }

    /// Returns the supports of the brick at `id` (bricks beneath it that
    /// must be placed first).
    #[inline]
    pub fn supports(&self, id: BrickId) -> &[BrickId] {
        self.graph.supports(id)
    }

    /// Returns the loads of the brick at `id` (bricks above resting on it).
    #[inline]
    pub fn loads(&self, id: BrickId) -> &[BrickId] {
        self.graph.loads(id)
    }

    /// Returns the course-major flat index of a brick.
    #[inline]
    pub fn flat_index(&self, id: BrickId) -> usize {
        self.graph.flat_index(id)
    }

    /// Iterates over every brick address in deterministic course-major,
    /// left-to-right order.
    pub fn brick_ids(&self) -> impl Iterator<Item = BrickId> + '_ {
        self.courses.iter().enumerate().flat_map(|(ci, course)| {
            (0..course.len()).map(move |bi| BrickId::new(ci, bi))
        })
    }
}

impl std::fmt::Display for Wall {
    /// Renders courses top-down, the way the wall stands.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for course in self.courses.iter().rev() {
            writeln!(f, "{:>3}: {}", course.ordinate().get(), course)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::SizeClass;

    /// A 430 mm wide, two-course running-bond wall.
    fn small_wall() -> Wall {
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
    fn test_assemble_and_query() {
        let wall = small_wall();
        assert_eq!(wall.num_courses(), 2);
        assert_eq!(wall.num_bricks(), 5);
        assert_eq!(wall.width(), 430);
        assert_eq!(wall.course(CourseIndex::new(1)).len(), 3);
    }

    #[test]
    fn test_all_bricks_start_unplaced() {
        let wall = small_wall();
        assert!(wall.brick_ids().all(|id| !wall.is_placed(id)));
        assert!(!wall.is_complete());
    }

    #[test]
    fn test_place_and_complete() {
        let mut wall = small_wall();
        let ids: Vec<_> = wall.brick_ids().collect();
        for id in &ids {
            wall.place(*id);
        }
        assert!(wall.is_complete());
        wall.reset_states();
        assert!(!wall.is_complete());
        assert!(wall.brick_ids().all(|id| !wall.is_placed(id)));
    }

    #[test]
    fn test_brick_ids_are_course_major() {
        let wall = small_wall();
        let ids: Vec<_> = wall.brick_ids().collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids[0], BrickId::new(0, 0));
        assert_eq!(ids[4], BrickId::new(1, 2));
    }

    #[test]
    fn test_flat_index_matches_iteration_order() {
        let wall = small_wall();
        for (pos, id) in wall.brick_ids().enumerate() {
            assert_eq!(wall.flat_index(id), pos);
        }
    }
}
