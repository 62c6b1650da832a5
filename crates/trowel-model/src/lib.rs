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

//! # Trowel Model
//!
//! **The Core Domain Model for the Trowel Masonry Solver.**
//!
//! This crate defines the data structures representing a brick wall under
//! construction. It is the data interchange layer between the bond
//! generators (`trowel-bond`) and the build scheduler (`trowel-build`).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`CourseIndex`, `BrickIndex`) and
//!   the `BrickId` arena address, preventing logical indexing errors.
//! * **`format`**: The immutable brick geometry (`BrickFormat`) and the
//!   `SizeClass` enumeration of cut lengths.
//! * **`brick`** / **`course`**: A `Brick` is a size class plus a horizontal
//!   span and a placement state; a `Course` is one contiguous row of bricks.
//! * **`wall`**: The `Wall` arena aggregating courses and the support graph.
//! * **`support`**: The derived support relation (`SupportGraph`) and its
//!   structural validation.
//!
//! ## Design Philosophy
//!
//! 1. **Fail-Fast**: Constructors validate geometry eagerly so downstream
//!    consumers never see a malformed wall.
//! 2. **Immutability after generation**: Once a wall is assembled, only each
//!    brick's placement state may change; spans and the support relation are
//!    fixed.
//! 3. **Derived relations**: The support graph is an index rebuildable from
//!    geometry alone, never an independent source of truth.

pub mod brick;
pub mod course;
pub mod format;
pub mod index;
pub mod support;
pub mod wall;
