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

/// Statistics collected while the Wild solver searches.
///
/// Counters accumulate across all courses of one wall; the step count is
/// the quantity bounded by `WildConfig::step_limit`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WildSolverStatistics {
    /// Total expansion attempts (one per size class tried at a position).
    pub steps: u64,
    /// Total decision levels abandoned after domain exhaustion.
    pub backtracks: u64,
    /// The deepest decision level reached.
    pub max_depth: u64,
}

impl WildSolverStatistics {
    #[inline]
    pub fn on_step(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }
}

impl std::fmt::Display for WildSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Wild Solver Statistics:")?;
        writeln!(f, "  Steps: {}", self.steps)?;
        writeln!(f, "  Backtracks: {}", self.backtracks)?;
        writeln!(f, "  Max Depth: {}", self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = WildSolverStatistics::default();
        stats.on_step();
        stats.on_step();
        stats.on_backtrack();
        stats.on_depth_update(3);
        stats.on_depth_update(2);
        assert_eq!(stats.steps, 2);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_display_lists_counters() {
        let stats = WildSolverStatistics {
            steps: 10,
            backtracks: 2,
            max_depth: 5,
        };
        let text = format!("{}", stats);
        assert!(text.contains("Steps: 10"));
        assert!(text.contains("Backtracks: 2"));
        assert!(text.contains("Max Depth: 5"));
    }
}
