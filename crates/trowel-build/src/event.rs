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

use crate::envelope::Envelope;
use trowel_model::index::BrickId;

/// The lifecycle of one build run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BuildState {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

impl std::fmt::Display for BuildState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildState::NotStarted => write!(f, "NotStarted"),
            BuildState::InProgress => write!(f, "InProgress"),
            BuildState::Completed => write!(f, "Completed"),
            BuildState::Failed => write!(f, "Failed"),
        }
    }
}

/// What one call to `step()` did: exactly one brick placement, one
/// envelope reposition, or the completion signal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepEvent {
    /// The brick at `id` was placed.
    Placed { id: BrickId },
    /// No reachable brick was eligible; the envelope slid to the lowest
    /// unfinished region.
    Repositioned { envelope: Envelope },
    /// Every brick is placed.
    Completed,
}

impl std::fmt::Display for StepEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepEvent::Placed { id } => write!(f, "Placed({})", id),
            StepEvent::Repositioned { envelope } => write!(f, "Repositioned({})", envelope),
            StepEvent::Completed => write!(f, "Completed"),
        }
    }
}

/// The error type for a build run. Terminal: the driver decides whether
/// to retry with a larger envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Repositioning the envelope cannot unlock any further brick: the
    /// envelope is smaller than some brick's footprint, or the support
    /// graph is malformed.
    StuckEnvelope { blocked: BrickId },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StuckEnvelope { blocked } => {
                write!(f, "Envelope cannot unlock brick {}; build is stuck", blocked)
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(format!("{}", BuildState::NotStarted), "NotStarted");
        assert_eq!(format!("{}", BuildState::Failed), "Failed");
    }

    #[test]
    fn test_event_display() {
        let event = StepEvent::Placed {
            id: BrickId::new(1, 2),
        };
        assert_eq!(format!("{}", event), "Placed(R1B2)");
    }

    #[test]
    fn test_error_display_names_blocked_brick() {
        let err = BuildError::StuckEnvelope {
            blocked: BrickId::new(0, 3),
        };
        assert!(format!("{}", err).contains("R0B3"));
    }
}
