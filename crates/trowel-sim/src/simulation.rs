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

use trowel_bond::{Bond, BondError};
use trowel_build::{
    algorithm::BuildAlgorithm,
    envelope::Envelope,
    event::{BuildError, BuildState, StepEvent},
    monitor::BuildMonitor,
    policy::{CourseMajor, OrderPolicy, Serpentine},
    stats::BuildStatistics,
};
use trowel_model::{
    format::{BrickFormat, Millimeter},
    wall::Wall,
};

/// The error type for a simulation: either the wall could not be
/// generated, or the build got stuck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    Bond(BondError),
    Build(BuildError),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bond(e) => write!(f, "Generation failed: {}", e),
            Self::Build(e) => write!(f, "Build failed: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bond(e) => Some(e),
            Self::Build(e) => Some(e),
        }
    }
}

impl From<BondError> for SimulationError {
    fn from(e: BondError) -> Self {
        Self::Bond(e)
    }
}

impl From<BuildError> for SimulationError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}

/// Selects the order policy for a run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PolicyKind {
    /// Lowest course first, then leftmost.
    #[default]
    CourseMajor,
    /// Lowest course first, alternating scan direction per course.
    Serpentine,
}

impl PolicyKind {
    fn instantiate(self) -> Box<dyn OrderPolicy> {
        match self {
            PolicyKind::CourseMajor => Box::new(CourseMajor),
            PolicyKind::Serpentine => Box::new(Serpentine),
        }
    }
}

/// Everything a run needs: wall geometry, bond, envelope reach, and
/// policy. Built with chained `with_*` calls over validated defaults.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub bond: Bond,
    pub width: Millimeter,
    pub courses: usize,
    pub format: BrickFormat,
    pub envelope_width: Millimeter,
    pub envelope_courses: usize,
    pub policy: PolicyKind,
    /// Snap the requested width to the nearest width the bond can tile
    /// before generating, instead of failing on an untileable width.
    pub snap_width: bool,
}

impl SimulationConfig {
    /// Creates a config with the standard brick format, a generous
    /// envelope, and the default policy.
    pub fn new(bond: Bond, width: Millimeter, courses: usize) -> Self {
        Self {
            bond,
            width,
            courses,
            format: BrickFormat::standard(),
            envelope_width: 800,
            envelope_courses: 20,
            policy: PolicyKind::default(),
            snap_width: false,
        }
    }

    /// Sets the robot's reach: horizontal millimeters and vertical
    /// courses.
    pub fn with_envelope(mut self, width: Millimeter, courses: usize) -> Self {
        self.envelope_width = width;
        self.envelope_courses = courses;
        self
    }

    /// Sets the brick format.
    pub fn with_format(mut self, format: BrickFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the order policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Enables width snapping to the nearest legal dimension.
    pub fn with_width_snapping(mut self) -> Self {
        self.snap_width = true;
        self
    }
}

/// A configured simulation: a generated, validated wall plus the build
/// scheduler over it.
///
/// The driver advances the build at its own cadence through
/// [`Simulation::step`], or hands control to one of the run loops. The
/// wall snapshot is queryable at any time, including after a failure.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    build: BuildAlgorithm<Box<dyn OrderPolicy>>,
}

impl Simulation {
    /// Generates the wall and prepares the scheduler.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let width = if config.snap_width {
            config.bond.nearest_legal_width(config.width, &config.format)
        } else {
            config.width
        };
        let wall = config.bond.generate(width, config.courses, &config.format)?;
        let envelope = Envelope::new(config.envelope_width, config.envelope_courses);
        let build = BuildAlgorithm::with_policy(wall, envelope, config.policy.instantiate());
        Ok(Self { config, build })
    }

    /// Returns the configuration this simulation was created from.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the wall snapshot, reflecting all placements so far.
    #[inline]
    pub fn wall(&self) -> &Wall {
        self.build.wall()
    }

    /// Returns the current envelope position.
    #[inline]
    pub fn envelope(&self) -> &Envelope {
        self.build.envelope()
    }

    /// Returns the current build state.
    #[inline]
    pub fn state(&self) -> BuildState {
        self.build.state()
    }

    /// Returns the statistics accumulated so far (partial statistics
    /// after a failure).
    #[inline]
    pub fn statistics(&self) -> &BuildStatistics {
        self.build.statistics()
    }

    /// Advances the build by one event.
    #[inline]
    pub fn step(&mut self) -> Result<StepEvent, SimulationError> {
        Ok(self.build.step()?)
    }

    /// Steps until completion, returning the final statistics.
    pub fn run_to_completion(&mut self) -> Result<&BuildStatistics, SimulationError> {
        loop {
            if let StepEvent::Completed = self.build.step()? {
                return Ok(self.build.statistics());
            }
        }
    }

    /// Steps until completion, reporting every event to `monitor`.
    pub fn run_with_monitor<M>(&mut self, monitor: &mut M) -> Result<&BuildStatistics, SimulationError>
    where
        M: BuildMonitor,
    {
        loop {
            match self.build.step()? {
                StepEvent::Placed { id } => {
                    monitor.on_placed(self.build.wall(), id, self.build.statistics());
                }
                StepEvent::Repositioned { envelope } => {
                    monitor.on_repositioned(&envelope, self.build.statistics());
                }
                StepEvent::Completed => {
                    monitor.on_completed(self.build.statistics());
                    return Ok(self.build.statistics());
                }
            }
        }
    }
}
