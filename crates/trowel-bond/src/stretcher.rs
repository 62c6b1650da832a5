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

//! Stretcher (running) bond.
//!
//! Courses alternate between two phases: even courses lead with a full
//! brick, odd courses with a half, shifting every joint by half a brick
//! module. A trailing half closes the course when the width demands it.

use trowel_model::format::SizeClass;

/// Returns `true` if a course of `cells` quarter cells can be tiled with
/// fulls and halfs in both phases. Needs an even cell count and at least
/// a full plus a half.
pub(crate) fn satisfiable(cells: usize) -> bool {
    cells % 2 == 0 && cells >= 6
}

/// Lays out `courses` rows of `cells` quarter cells.
///
/// Callers must have checked [`satisfiable`] first.
pub(crate) fn layout(cells: usize, courses: usize) -> Vec<Vec<SizeClass>> {
    debug_assert!(satisfiable(cells));
    (0..courses)
        .map(|ordinate| {
            let mut row = Vec::new();
            let mut remaining = cells;
            if ordinate % 2 == 1 {
                row.push(SizeClass::Half);
                remaining -= 2;
            }
            while remaining >= 4 {
                row.push(SizeClass::Full);
                remaining -= 4;
            }
            if remaining == 2 {
                row.push(SizeClass::Half);
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use SizeClass::{Full, Half};

    #[test]
    fn test_satisfiable() {
        assert!(satisfiable(6));
        assert!(satisfiable(16));
        assert!(!satisfiable(9));
        assert!(!satisfiable(4));
    }

    #[test]
    fn test_phases_alternate() {
        // Sixteen cells: four full bricks (eight half-brick units).
        let rows = layout(16, 4);
        assert_eq!(rows[0], vec![Full, Full, Full, Full]);
        assert_eq!(rows[1], vec![Half, Full, Full, Full, Half]);
        assert_eq!(rows[2], rows[0]);
        assert_eq!(rows[3], rows[1]);
    }

    #[test]
    fn test_trailing_half_closes_odd_module_widths() {
        // Ten cells: two and a half bricks.
        let rows = layout(10, 2);
        assert_eq!(rows[0], vec![Full, Full, Half]);
        assert_eq!(rows[1], vec![Half, Full, Full]);
        for row in rows {
            assert_eq!(row.iter().map(|c| c.cells()).sum::<usize>(), 10);
        }
    }
}
