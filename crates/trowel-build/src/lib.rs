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

//! # Trowel Build
//!
//! **The step-driven build-order scheduler.**
//!
//! Given a generated [`trowel_model::wall::Wall`] and a reach envelope,
//! the scheduler computes a physically valid build order: a brick may only
//! be placed once all its supports are placed and it lies inside the
//! robot's current envelope. The driver advances the build one event at a
//! time through [`algorithm::BuildAlgorithm::step`]; the core never runs a
//! loop or a timer of its own.
//!
//! ## Architecture
//!
//! * **`envelope`**: The reachable window and its sliding rules.
//! * **`policy`**: Deterministic tie-breaking among eligible bricks
//!   (course-major by default, serpentine as an alternative).
//! * **`algorithm`**: The `step()` state machine, including envelope
//!   repositioning and the `StuckEnvelope` failure path.
//! * **`event`** / **`stats`**: Step events, build states, and the
//!   monotonic counters accumulated over a run.
//! * **`monitor`**: Observer hooks for drivers that want progress output
//!   without polling the wall.

pub mod algorithm;
pub mod envelope;
pub mod event;
pub mod monitor;
pub mod policy;
pub mod stats;

pub use algorithm::BuildAlgorithm;
pub use envelope::Envelope;
pub use event::{BuildError, BuildState, StepEvent};
pub use policy::{CourseMajor, OrderPolicy, Serpentine};
pub use stats::BuildStatistics;
