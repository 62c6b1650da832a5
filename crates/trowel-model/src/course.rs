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

//! A course: one horizontal row of bricks.
//!
//! Bricks are laid left to right; each brick after the first starts one
//! head joint after the previous brick's end. A finished course must fill
//! its target width exactly, with no gaps and no overhang.

use crate::{
    brick::Brick,
    format::{BrickFormat, Millimeter, SizeClass},
    index::{BrickIndex, CourseIndex},
};
use trowel_core::math::span::Span;

/// The error type for laying bricks into a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// The brick's end would extend past the course's target width.
    Overflow {
        ordinate: CourseIndex,
        class: SizeClass,
        end: Millimeter,
        target_width: Millimeter,
    },
}

impl std::fmt::Display for CourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow {
                ordinate,
                class,
                end,
                target_width,
            } => write!(
                f,
                "Brick {} in course {} would end at {} mm, past the target width {} mm",
                class,
                ordinate.get(),
                end,
                target_width
            ),
        }
    }
}

impl std::error::Error for CourseError {}

/// One horizontal row of bricks at a fixed vertical level.
#[derive(Clone, Debug)]
pub struct Course {
    ordinate: CourseIndex,
    target_width: Millimeter,
    head_joint: Millimeter,
    bricks: Vec<Brick>,
}

impl Course {
    /// Creates an empty course at the given ordinate.
    #[inline]
    pub fn new(ordinate: CourseIndex, target_width: Millimeter, format: &BrickFormat) -> Self {
        Self {
            ordinate,
            target_width,
            head_joint: format.head_joint(),
            bricks: Vec::new(),
        }
    }

    /// Returns the vertical index of this course, counted from the base.
    #[inline]
    pub fn ordinate(&self) -> CourseIndex {
        self.ordinate
    }

    /// Returns the width this course must fill exactly.
    #[inline]
    pub fn target_width(&self) -> Millimeter {
        self.target_width
    }

    /// Returns the number of bricks laid so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    /// Returns `true` if no bricks have been laid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Returns the occupied width: the end coordinate of the last brick,
    /// or zero for an empty course.
    #[inline]
    pub fn width(&self) -> Millimeter {
        self.bricks.last().map_or(0, |b| b.span().end())
    }

    /// Returns `true` if the course fills its target width exactly.
    #[inline]
    pub fn is_exactly_filled(&self) -> bool {
        self.width() == self.target_width
    }

    /// Returns the brick at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn brick(&self, index: BrickIndex) -> &Brick {
        &self.bricks[index.get()]
    }

    #[inline]
    pub(crate) fn brick_mut(&mut self, index: BrickIndex) -> &mut Brick {
        &mut self.bricks[index.get()]
    }

    /// Returns the bricks of this course, left to right.
    #[inline]
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Returns the interior joint positions of this course: the end
    /// coordinate of every brick except the last. The wall edges are not
    /// joints.
    pub fn joint_positions(&self) -> impl Iterator<Item = Millimeter> + '_ {
        let interior = self.bricks.len().saturating_sub(1);
        self.bricks[..interior].iter().map(|b| b.span().end())
    }

    /// Lays the next brick of the given size class.
    ///
    /// The brick starts at the left wall edge, or one head joint after the
    /// previous brick. Fails if it would extend past the target width.
    pub fn push_class(&mut self, class: SizeClass, format: &BrickFormat) -> Result<(), CourseError> {
        let start = match self.bricks.last() {
            Some(prev) => prev.span().end() + self.head_joint,
            None => 0,
        };
        let end = start + class.length_in(format);
        if end > self.target_width {
            return Err(CourseError::Overflow {
                ordinate: self.ordinate,
                class,
                end,
                target_width: self.target_width,
            });
        }
        self.bricks.push(Brick::new(class, Span::new(start, end)));
        Ok(())
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for brick in &self.bricks {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", brick.class())?;
            first = false;
        }
        Ok(())
    }
}
