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

use trowel_model::format::Millimeter;
use trowel_core::math::span::Span;

/// The robot's reachable window on the wall: a horizontal extent in
/// millimeters and a vertical extent in courses, anchored at a movable
/// origin.
///
/// The envelope is the only mutable geometry in a build. It starts at the
/// bottom-left corner of the wall and is slid by the build algorithm when
/// no reachable brick is eligible.
///
/// # Examples
///
/// ```rust
/// # use trowel_build::envelope::Envelope;
/// # use trowel_core::math::span::Span;
/// let e = Envelope::new(650, 4);
/// assert!(e.reaches(Span::new(0, 210), 0));
/// assert!(!e.reaches(Span::new(660, 870), 0));
/// assert!(!e.reaches(Span::new(0, 210), 4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Envelope {
    width: Millimeter,
    height_courses: usize,
    x: Millimeter,
    base_course: usize,
}

impl Envelope {
    /// Creates an envelope of the given reach, anchored at the wall's
    /// bottom-left corner.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not positive or `height_courses` is zero.
    pub fn new(width: Millimeter, height_courses: usize) -> Self {
        assert!(width > 0, "Envelope width must be positive");
        assert!(height_courses > 0, "Envelope height must be at least one course");
        Self {
            width,
            height_courses,
            x: 0,
            base_course: 0,
        }
    }

    /// Returns the horizontal reach in millimeters.
    #[inline]
    pub fn width(&self) -> Millimeter {
        self.width
    }

    /// Returns the vertical reach in courses.
    #[inline]
    pub fn height_courses(&self) -> usize {
        self.height_courses
    }

    /// Returns the left edge of the window.
    #[inline]
    pub fn x(&self) -> Millimeter {
        self.x
    }

    /// Returns the lowest course inside the window.
    #[inline]
    pub fn base_course(&self) -> usize {
        self.base_course
    }

    /// Returns the horizontal span the window currently covers.
    #[inline]
    pub fn span(&self) -> Span<Millimeter> {
        Span::new(self.x, self.x + self.width)
    }

    /// Returns `true` if a brick occupying `span` in `course` lies
    /// entirely inside the window. Partial reach does not count: the
    /// gripper needs the whole brick.
    #[inline]
    pub fn reaches(&self, span: Span<Millimeter>, course: usize) -> bool {
        course >= self.base_course
            && course < self.base_course + self.height_courses
            && self.span().contains_span(span)
    }

    /// Moves the window origin.
    #[inline]
    pub fn slide_to(&mut self, x: Millimeter, base_course: usize) {
        self.x = x;
        self.base_course = base_course;
    }
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Envelope(x={}, width={}, courses={}..{})",
            self.x,
            self.width,
            self.base_course,
            self.base_course + self.height_courses
        )
    }
}
