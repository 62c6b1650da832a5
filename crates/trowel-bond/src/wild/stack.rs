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

use smallvec::SmallVec;
use trowel_model::format::{Millimeter, SizeClass};

/// One decision level of the Wild search: the cursor where the next brick
/// starts, the (already filtered and shuffled) domain of size classes to
/// try there, and how many of them have been tried so far.
///
/// Keeping the search state in explicit frames instead of the call stack
/// makes the bounded-step termination trivial and partial states easy to
/// inspect.
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    cursor: Millimeter,
    domain: SmallVec<[SizeClass; 4]>,
    next: usize,
}

impl Frame {
    #[inline]
    pub fn new(cursor: Millimeter, domain: SmallVec<[SizeClass; 4]>) -> Self {
        Self {
            cursor,
            domain,
            next: 0,
        }
    }

    /// The position (mm) where a brick chosen at this level starts.
    #[inline]
    pub fn cursor(&self) -> Millimeter {
        self.cursor
    }

    /// Returns the next untried size class at this level, advancing the
    /// tried counter.
    #[inline]
    pub fn next_choice(&mut self) -> Option<SizeClass> {
        let choice = self.domain.get(self.next).copied();
        if choice.is_some() {
            self.next += 1;
        }
        choice
    }

    /// Returns `true` if every domain value has been tried.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.domain.len()
    }
}

/// The explicit LIFO stack of search frames, one per brick position of
/// the partial course.
#[derive(Clone, Debug, Default)]
pub(crate) struct SearchStack {
    frames: Vec<Frame>,
}

impl SearchStack {
    #[inline]
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Returns the current search depth (number of open decision levels).
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pops the deepest frame (backtrack).
    #[inline]
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Returns the deepest frame, if any.
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Drops all frames, keeping the allocation for the next course.
    #[inline]
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_frame_yields_domain_in_order() {
        let mut frame = Frame::new(0, smallvec![SizeClass::Full, SizeClass::Half]);
        assert!(!frame.is_exhausted());
        assert_eq!(frame.next_choice(), Some(SizeClass::Full));
        assert_eq!(frame.next_choice(), Some(SizeClass::Half));
        assert!(frame.is_exhausted());
        assert_eq!(frame.next_choice(), None);
    }

    #[test]
    fn test_stack_lifo_and_clear() {
        let mut stack = SearchStack::new();
        assert!(stack.is_empty());
        stack.push(Frame::new(0, smallvec![SizeClass::Full]));
        stack.push(Frame::new(220, smallvec![SizeClass::Half]));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top_mut().unwrap().cursor(), 220);
        assert_eq!(stack.pop().unwrap().cursor(), 220);
        assert_eq!(stack.depth(), 1);
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_empty_domain_frame_is_immediately_exhausted() {
        let mut frame = Frame::new(0, SmallVec::new());
        assert!(frame.is_exhausted());
        assert_eq!(frame.next_choice(), None);
    }
}
