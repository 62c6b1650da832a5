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

//! The build scheduler.
//!
//! `BuildAlgorithm` owns the wall for the duration of a run and advances
//! it one event per [`BuildAlgorithm::step`] call: place one brick, slide
//! the envelope once, or report completion. A brick is eligible when all
//! its supports are placed and it lies entirely inside the envelope;
//! among eligible bricks the configured policy breaks ties
//! deterministically.
//!
//! When nothing in the window is eligible, the envelope slides to the
//! lowest-course, leftmost unplaced brick. Because every course below
//! that brick is already complete, the slide unlocks it unless the
//! envelope is too small to contain it at all, in which case the build
//! fails as stuck. The failure is sticky: further `step()` calls return
//! the same error, and the partially built wall stays inspectable.

use crate::{
    envelope::Envelope,
    event::{BuildError, BuildState, StepEvent},
    policy::{CourseMajor, OrderPolicy},
    stats::BuildStatistics,
};
use fixedbitset::FixedBitSet;
use trowel_model::{index::BrickId, wall::Wall};

fn eligible(wall: &Wall, placed: &FixedBitSet, envelope: &Envelope, id: BrickId) -> bool {
    if placed.contains(wall.flat_index(id)) {
        return false;
    }
    if !envelope.reaches(wall.brick(id).span(), id.course.get()) {
        return false;
    }
    wall.supports(id)
        .iter()
        .all(|s| placed.contains(wall.flat_index(*s)))
}

/// The step-driven build scheduler.
///
/// # Examples
///
/// ```rust
/// # use trowel_build::{BuildAlgorithm, Envelope, StepEvent};
/// # use trowel_bond::Bond;
/// # use trowel_model::format::BrickFormat;
/// let format = BrickFormat::standard();
/// let wall = Bond::Stretcher.generate(870, 4, &format).unwrap();
/// let mut build = BuildAlgorithm::new(wall, Envelope::new(870, 4));
/// loop {
///     match build.step().unwrap() {
///         StepEvent::Completed => break,
///         _ => {}
///     }
/// }
/// assert_eq!(build.statistics().bricks_placed, 18);
/// ```
#[derive(Clone, Debug)]
pub struct BuildAlgorithm<P = CourseMajor>
where
    P: OrderPolicy,
{
    wall: Wall,
    envelope: Envelope,
    policy: P,
    placed: FixedBitSet,
    num_placed: usize,
    state: BuildState,
    stats: BuildStatistics,
    last_failure: Option<BuildError>,
}

impl BuildAlgorithm<CourseMajor> {
    /// Creates a scheduler with the default course-major policy.
    pub fn new(wall: Wall, envelope: Envelope) -> Self {
        Self::with_policy(wall, envelope, CourseMajor)
    }
}

impl<P> BuildAlgorithm<P>
where
    P: OrderPolicy,
{
    /// Creates a scheduler with an explicit order policy.
    pub fn with_policy(wall: Wall, envelope: Envelope, policy: P) -> Self {
        let placed = FixedBitSet::with_capacity(wall.num_bricks());
        Self {
            wall,
            envelope,
            policy,
            placed,
            num_placed: 0,
            state: BuildState::NotStarted,
            stats: BuildStatistics::default(),
            last_failure: None,
        }
    }

    /// Returns the wall being built. Placement states reflect progress so
    /// far; partial state is valid whenever the driver stops stepping.
    #[inline]
    pub fn wall(&self) -> &Wall {
        &self.wall
    }

    /// Returns the current envelope position.
    #[inline]
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Returns the current build state.
    #[inline]
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Returns the statistics accumulated so far.
    #[inline]
    pub fn statistics(&self) -> &BuildStatistics {
        &self.stats
    }

    /// Returns the number of bricks placed so far.
    #[inline]
    pub fn num_placed(&self) -> usize {
        self.num_placed
    }

    /// Returns `true` if the brick at `id` could be placed right now.
    #[inline]
    pub fn is_brick_eligible(&self, id: BrickId) -> bool {
        eligible(&self.wall, &self.placed, &self.envelope, id)
    }

    /// Advances the build by exactly one event: one placement, one
    /// envelope reposition, or the completion signal.
    ///
    /// Calling `step()` after completion keeps returning
    /// [`StepEvent::Completed`]; calling it after a failure keeps
    /// returning the same error.
    pub fn step(&mut self) -> Result<StepEvent, BuildError> {
        match self.state {
            BuildState::Completed => return Ok(StepEvent::Completed),
            BuildState::Failed => {
                if let Some(err) = &self.last_failure {
                    return Err(err.clone());
                }
            }
            _ => {}
        }

        if self.num_placed == self.wall.num_bricks() {
            self.state = BuildState::Completed;
            return Ok(StepEvent::Completed);
        }
        self.state = BuildState::InProgress;

        let wall = &self.wall;
        let placed = &self.placed;
        let envelope = self.envelope;
        let picked = self
            .policy
            .pick(wall, &|id| eligible(wall, placed, &envelope, id));

        if let Some(id) = picked {
            let flat = self.wall.flat_index(id);
            self.wall.place(id);
            self.placed.insert(flat);
            self.num_placed += 1;
            self.stats.on_placed();
            return Ok(StepEvent::Placed { id });
        }

        // Nothing reachable is eligible. Unplaced bricks inside the
        // window mean their supports are out of reach.
        if self.window_holds_unplaced() {
            self.stats.on_idle();
        }

        let target = match self.first_unplaced() {
            Some(id) => id,
            None => {
                self.state = BuildState::Completed;
                return Ok(StepEvent::Completed);
            }
        };

        let span = self.wall.brick(target).span();
        let max_x = (self.wall.width() - self.envelope.width()).max(0);
        let x = span.start().clamp(0, max_x);
        let base = target.course.get();
        if x == self.envelope.x() && base == self.envelope.base_course() {
            return self.fail(target);
        }
        self.envelope.slide_to(x, base);
        self.stats.on_reposition();

        let wall = &self.wall;
        let placed = &self.placed;
        let envelope = self.envelope;
        let unlocked = wall
            .brick_ids()
            .any(|id| eligible(wall, placed, &envelope, id));
        if !unlocked {
            return self.fail(target);
        }
        Ok(StepEvent::Repositioned {
            envelope: self.envelope,
        })
    }

    fn fail(&mut self, blocked: BrickId) -> Result<StepEvent, BuildError> {
        let err = BuildError::StuckEnvelope { blocked };
        self.state = BuildState::Failed;
        self.last_failure = Some(err.clone());
        Err(err)
    }

    /// The lowest-course, leftmost unplaced brick: the reposition target.
    fn first_unplaced(&self) -> Option<BrickId> {
        self.wall
            .brick_ids()
            .find(|id| !self.placed.contains(self.wall.flat_index(*id)))
    }

    fn window_holds_unplaced(&self) -> bool {
        self.wall.brick_ids().any(|id| {
            !self.placed.contains(self.wall.flat_index(id))
                && self
                    .envelope
                    .reaches(self.wall.brick(id).span(), id.course.get())
        })
    }
}
