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

//! # Trowel Bond
//!
//! **Course generation for every supported masonry bond.**
//!
//! A bond is a pure function from wall dimensions to wall content: it
//! decides which size classes make up each course and at what offsets, so
//! that every course tiles the wall width exactly and every brick finds
//! enough bearing on the course below.
//!
//! ## Architecture
//!
//! * **`bond`**: The closed [`bond::Bond`] variant set and the shared
//!   generation pipeline (lay out classes, assemble the wall, validate
//!   supports).
//! * **`stretcher`** / **`flemish`** / **`english_cross`**: Closed-form
//!   layouts. These tile or fail; no search is involved.
//! * **`wild`**: The Wild Bond has no repeating pattern. Its per-course
//!   layouts come from a seeded depth-first backtracking solver with an
//!   explicit frame stack and a bounded step budget.
//!
//! All layout arithmetic happens on the quarter-cell grid defined by
//! `trowel_model::format::BrickFormat`, which is what guarantees that any
//! two non-coincident joints of adjacent courses are far enough apart to
//! produce a valid bearing overlap.

pub mod bond;
pub mod english_cross;
pub mod flemish;
pub mod stretcher;
pub mod wild;

pub use bond::{Bond, BondError};
pub use wild::{WildConfig, WildError};
