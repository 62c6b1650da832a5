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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! Phantom-typed wrappers around `usize` to prevent mixing indices from
//! different domains (e.g., courses vs. bricks within a course).
//! `TypedIndex<T>` carries a tag type `T: TypedIndexTag` that encodes intent
//! at the type level, while compiling down to a transparent `usize`.
//!
//! A wall is an arena of bricks addressed by (course, brick) pairs; raw
//! `usize` pairs invite accidental swaps that are hard to trace. The tags
//! make those swaps type errors instead.
//!
//! ## Usage
//!
//! ```rust
//! use trowel_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct CourseTag;
//! impl TypedIndexTag for CourseTag { const NAME: &'static str = "CourseIndex"; }
//!
//! type CourseIndex = TypedIndex<CourseTag>;
//! let c = CourseIndex::new(3);
//! assert_eq!(c.get(), 3);
//! assert_eq!(format!("{}", c), "CourseIndex(3)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed index that is associated with a specific tag type `T`.
///
/// This struct wraps a `usize` index and uses a phantom type parameter `T`
/// to provide type safety and prevent mixing indices of different domains.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` with the given `usize` index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Checks if the index is zero.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.index == 0
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline(always)]
    fn from(index: TypedIndex<T>) -> Self {
        index.get()
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct TestTag;

    impl TypedIndexTag for TestTag {
        const NAME: &'static str = "TestIndex";
    }

    type TestIndex = TypedIndex<TestTag>;

    #[test]
    fn test_new_and_get() {
        let i = TestIndex::new(7);
        assert_eq!(i.get(), 7);
        assert!(!i.is_zero());
        assert!(TestIndex::new(0).is_zero());
    }

    #[test]
    fn test_conversions() {
        let i: TestIndex = 5usize.into();
        let raw: usize = i.into();
        assert_eq!(raw, 5);
    }

    #[test]
    fn test_ordering() {
        assert!(TestIndex::new(1) < TestIndex::new(2));
        assert_eq!(TestIndex::new(3), TestIndex::new(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TestIndex::new(4)), "TestIndex(4)");
    }
}
