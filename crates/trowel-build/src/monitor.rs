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

//! Observer hooks for build progress.
//!
//! The core performs no I/O; drivers that want progress output register a
//! monitor with their run loop instead of polling the wall after every
//! step.

use crate::{envelope::Envelope, stats::BuildStatistics};
use trowel_model::{index::BrickId, wall::Wall};

/// Observer of build progress, driven by the run loop (never by `step()`
/// itself).
pub trait BuildMonitor {
    /// Returns the monitor name for diagnostics.
    fn name(&self) -> &str;
    /// Called after a brick is placed.
    fn on_placed(&mut self, wall: &Wall, id: BrickId, stats: &BuildStatistics);
    /// Called after the envelope is repositioned.
    fn on_repositioned(&mut self, envelope: &Envelope, stats: &BuildStatistics);
    /// Called once when the build completes.
    fn on_completed(&mut self, stats: &BuildStatistics);
}

impl std::fmt::Debug for dyn BuildMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BuildMonitor({})", self.name())
    }
}

/// A monitor that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpMonitor;

impl BuildMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "no-op"
    }

    fn on_placed(&mut self, _wall: &Wall, _id: BrickId, _stats: &BuildStatistics) {}

    fn on_repositioned(&mut self, _envelope: &Envelope, _stats: &BuildStatistics) {}

    fn on_completed(&mut self, _stats: &BuildStatistics) {}
}

/// A monitor that prints a progress table to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogMonitor {
    header_printed: bool,
}

impl LogMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn print_header(&mut self) {
        if self.header_printed {
            return;
        }
        println!(
            "{:<8} | {:<8} | {:<14} | {:<12} | {:<5}",
            "Placed", "Brick", "Span", "Repositions", "Idle"
        );
        println!("{}", "-".repeat(58));
        self.header_printed = true;
    }
}

impl BuildMonitor for LogMonitor {
    fn name(&self) -> &str {
        "log"
    }

    fn on_placed(&mut self, wall: &Wall, id: BrickId, stats: &BuildStatistics) {
        self.print_header();
        println!(
            "{:<8} | {:<8} | {:<14} | {:<12} | {:<5}",
            stats.bricks_placed,
            format!("{}", id),
            format!("{}", wall.brick(id).span()),
            stats.repositions,
            stats.idle_steps
        );
    }

    fn on_repositioned(&mut self, envelope: &Envelope, stats: &BuildStatistics) {
        self.print_header();
        println!(
            "{:<8} | move to {} (reposition {})",
            stats.bricks_placed, envelope, stats.repositions
        );
    }

    fn on_completed(&mut self, stats: &BuildStatistics) {
        println!("{}", stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitor_names() {
        assert_eq!(NoOpMonitor.name(), "no-op");
        assert_eq!(LogMonitor::new().name(), "log");
    }
}
