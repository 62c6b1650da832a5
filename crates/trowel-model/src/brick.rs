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

use crate::format::{Millimeter, SizeClass};
use trowel_core::math::span::Span;

/// The placement state of a brick. Flipped exactly once, by the build
/// scheduler, when the robot lays the brick.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BrickState {
    #[default]
    Unplaced,
    Placed,
}

/// One brick in a course: a size class, the horizontal span it occupies,
/// and its placement state.
///
/// Geometry is fixed at generation time; only `state` changes afterward,
/// and only through [`crate::wall::Wall::place`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Brick {
    class: SizeClass,
    span: Span<Millimeter>,
    state: BrickState,
}

impl Brick {
    /// Creates a new, unplaced brick occupying `span`.
    #[inline]
    pub fn new(class: SizeClass, span: Span<Millimeter>) -> Self {
        Self {
            class,
            span,
            state: BrickState::Unplaced,
        }
    }

    /// Returns the size class of this brick.
    #[inline]
    pub fn class(&self) -> SizeClass {
        self.class
    }

    /// Returns the horizontal span this brick occupies.
    #[inline]
    pub fn span(&self) -> Span<Millimeter> {
        self.span
    }

    /// Returns the placement state of this brick.
    #[inline]
    pub fn state(&self) -> BrickState {
        self.state
    }

    /// Returns `true` if the brick has been placed.
    #[inline]
    pub fn is_placed(&self) -> bool {
        self.state == BrickState::Placed
    }

    /// Marks the brick as placed. Crate-internal: the wall arena is the
    /// only mutation path.
    #[inline]
    pub(crate) fn place(&mut self) {
        self.state = BrickState::Placed;
    }

    /// Returns the brick to the unplaced state.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.state = BrickState::Unplaced;
    }
}

impl std::fmt::Display for Brick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.class, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_brick_is_unplaced() {
        let b = Brick::new(SizeClass::Full, Span::new(0, 210));
        assert_eq!(b.state(), BrickState::Unplaced);
        assert!(!b.is_placed());
        assert_eq!(b.class(), SizeClass::Full);
        assert_eq!(b.span().len(), 210);
    }

    #[test]
    fn test_place_and_reset() {
        let mut b = Brick::new(SizeClass::Half, Span::new(0, 100));
        b.place();
        assert!(b.is_placed());
        b.reset();
        assert!(!b.is_placed());
    }
}
