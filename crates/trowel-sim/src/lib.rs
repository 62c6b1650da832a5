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

//! # Trowel Sim
//!
//! **The high-level entry point to the Trowel masonry solver.**
//!
//! This crate wires the engine crates together: a [`SimulationConfig`]
//! describes the wall, bond, envelope, and policy; a [`Simulation`]
//! generates and validates the wall, then exposes the step-driven build
//! to the driver. Presentation layers (GUI, CLI, tests) talk to this
//! crate only.
//!
//! ```rust
//! use trowel_sim::{Simulation, SimulationConfig};
//! use trowel_bond::Bond;
//!
//! let config = SimulationConfig::new(Bond::Stretcher, 870, 4);
//! let mut sim = Simulation::new(config).unwrap();
//! let stats = sim.run_to_completion().unwrap();
//! assert_eq!(stats.bricks_placed, 18);
//! assert!(sim.wall().is_complete());
//! ```

pub mod simulation;

pub use simulation::{PolicyKind, Simulation, SimulationConfig, SimulationError};

pub use trowel_bond::{Bond, BondError, WildConfig, WildError};
pub use trowel_build::{
    BuildAlgorithm, BuildError, BuildState, BuildStatistics, Envelope, StepEvent,
};
pub use trowel_model::{format::BrickFormat, wall::Wall};
