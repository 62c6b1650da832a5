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

use num_traits::PrimInt;
use std::cmp::{max, min};

/// A half-open span `[start, end)` along the horizontal axis of a wall.
///
/// Spans measure brick extents in millimeters (or any integer unit). They
/// support the geometric queries the support-graph computation is built on,
/// most importantly [`Span::overlap_len`]: the length of the common region
/// of two spans, which decides whether a brick bears on the brick below it.
///
/// # Invariants
/// `start` must always be less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> Span<T>
where
    T: PrimInt,
{
    /// Creates a new `Span`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use trowel_core::math::span::Span;
    /// let s = Span::new(0, 210);
    /// assert_eq!(s.len(), 210);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid span: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `Span`, returning `None` if `start > end`.
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Returns the inclusive start of the span.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end of the span.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the length of the span.
    #[inline]
    pub fn len(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the span covers no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `point` lies within the span.
    #[inline]
    pub fn contains_point(&self, point: T) -> bool {
        self.start <= point && point < self.end
    }

    /// Returns `true` if `other` lies entirely within this span.
    ///
    /// Touching bounds count as contained; an empty span is contained by
    /// anything that brackets its position.
    #[inline]
    pub fn contains_span(&self, other: Span<T>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two spans share at least one point.
    ///
    /// Spans that merely touch (`[0, 10)` and `[10, 20)`) do not intersect.
    #[inline]
    pub fn intersects(&self, other: Span<T>) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the length of the common region of two spans, or zero if they
    /// are disjoint.
    ///
    /// This is the support test from the structural model: a brick rests on
    /// the brick below it when their spans overlap by at least the minimum
    /// bearing length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use trowel_core::math::span::Span;
    /// let above = Span::new(110, 320);
    /// let below = Span::new(0, 210);
    /// assert_eq!(above.overlap_len(below), 100);
    /// assert_eq!(above.overlap_len(Span::new(330, 540)), 0);
    /// ```
    #[inline]
    pub fn overlap_len(&self, other: Span<T>) -> T {
        let lo = max(self.start, other.start);
        let hi = min(self.end, other.end);
        if lo < hi {
            hi - lo
        } else {
            T::zero()
        }
    }

    /// Returns this span translated by `offset`.
    #[inline]
    pub fn shifted_by(&self, offset: T) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

impl<T> Default for Span<T>
where
    T: PrimInt,
{
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T> std::fmt::Display for Span<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> std::fmt::Debug for Span<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Span[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let s = Span::new(10, 20);
        assert_eq!(s.start(), 10);
        assert_eq!(s.end(), 20);
        assert_eq!(s.len(), 10);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_construction_empty() {
        let s = Span::new(10, 10);
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_try_new() {
        assert!(Span::try_new(5, 10).is_some());
        assert!(Span::try_new(5, 5).is_some());
        assert!(Span::try_new(10, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid span")]
    fn test_new_panic() {
        Span::new(10, 5);
    }

    #[test]
    fn test_contains_point() {
        let s = Span::new(0, 10);
        assert!(s.contains_point(0));
        assert!(s.contains_point(9));
        assert!(!s.contains_point(10));
        assert!(!s.contains_point(-1));
    }

    #[test]
    fn test_contains_span() {
        let s = Span::new(0, 10);
        assert!(s.contains_span(Span::new(0, 10)));
        assert!(s.contains_span(Span::new(2, 8)));
        assert!(!s.contains_span(Span::new(-1, 5)));
        assert!(!s.contains_span(Span::new(5, 11)));
    }

    #[test]
    fn test_intersects() {
        let a = Span::new(0, 10);

        // Disjoint left
        assert!(!a.intersects(Span::new(-5, -1)));
        // Adjacent left (touching) - strictly NO intersection
        assert!(!a.intersects(Span::new(-5, 0)));
        // Overlap left
        assert!(a.intersects(Span::new(-5, 5)));
        // Contained
        assert!(a.intersects(Span::new(2, 8)));
        // Identity
        assert!(a.intersects(a));
        // Adjacent right
        assert!(!a.intersects(Span::new(10, 15)));
    }

    #[test]
    fn test_overlap_len() {
        let a = Span::new(110, 320);
        assert_eq!(a.overlap_len(Span::new(0, 210)), 100);
        assert_eq!(a.overlap_len(Span::new(220, 430)), 100);
        assert_eq!(a.overlap_len(Span::new(330, 540)), 0);
        // Touching spans overlap by zero.
        assert_eq!(a.overlap_len(Span::new(320, 400)), 0);
        // Full containment yields the smaller length.
        assert_eq!(a.overlap_len(Span::new(0, 1000)), 210);
    }

    #[test]
    fn test_shifted_by() {
        let s = Span::new(0, 210).shifted_by(110);
        assert_eq!(s.start(), 110);
        assert_eq!(s.end(), 320);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Span::new(0, 210)), "[0, 210)");
    }
}
