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

/// Statistics accumulated monotonically over one build run.
///
/// Owned by the build algorithm and discarded with it; a fresh run starts
/// from zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildStatistics {
    /// Total bricks placed.
    pub bricks_placed: u64,
    /// Envelope repositions performed.
    pub repositions: u64,
    /// Steps where the window held unplaced bricks but none was eligible.
    /// Nonzero values indicate a support-graph or envelope
    /// misconfiguration.
    pub idle_steps: u64,
}

impl BuildStatistics {
    #[inline]
    pub fn on_placed(&mut self) {
        self.bricks_placed = self.bricks_placed.saturating_add(1);
    }

    #[inline]
    pub fn on_reposition(&mut self) {
        self.repositions = self.repositions.saturating_add(1);
    }

    #[inline]
    pub fn on_idle(&mut self) {
        self.idle_steps = self.idle_steps.saturating_add(1);
    }
}

impl std::fmt::Display for BuildStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Build Statistics:")?;
        writeln!(f, "  Bricks Placed: {}", self.bricks_placed)?;
        writeln!(f, "  Repositions: {}", self.repositions)?;
        writeln!(f, "  Idle Steps: {}", self.idle_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let mut stats = BuildStatistics::default();
        stats.on_placed();
        stats.on_placed();
        stats.on_reposition();
        assert_eq!(stats.bricks_placed, 2);
        assert_eq!(stats.repositions, 1);
        assert_eq!(stats.idle_steps, 0);
    }

    #[test]
    fn test_display_lists_counters() {
        let mut stats = BuildStatistics::default();
        stats.on_placed();
        let text = format!("{}", stats);
        assert!(text.contains("Bricks Placed: 1"));
        assert!(text.contains("Repositions: 0"));
    }
}
