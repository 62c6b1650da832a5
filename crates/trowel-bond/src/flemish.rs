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

//! Flemish bond.
//!
//! Within a course, full stretchers and half-length headers alternate.
//! Even courses run `F H F H ... F`; odd courses carry three-quarter
//! corner bricks (`3Q F H F ... F 3Q`), which shifts every interior joint
//! off the joints of the course below. The corner three-quarters are what
//! push the support count to three where the patterns cross.
//!
//! On the quarter-cell grid one `F H` pair is six cells and the closing
//! full is four, so a course tiles exactly when `cells = 6k + 4, k >= 1`.
//! The offset course `3Q F (H F)^(k-1) 3Q` covers the same count:
//! `3 + 4 + 6(k - 1) + 3 = 6k + 4`.

use trowel_model::format::SizeClass;

/// Returns `true` if `cells` fits the Flemish module `6k + 4` with at
/// least one full-half pair.
pub(crate) fn satisfiable(cells: usize) -> bool {
    cells >= 10 && cells % 6 == 4
}

/// Lays out `courses` rows of `cells` quarter cells.
///
/// Callers must have checked [`satisfiable`] first.
pub(crate) fn layout(cells: usize, courses: usize) -> Vec<Vec<SizeClass>> {
    debug_assert!(satisfiable(cells));
    let pairs = (cells - 4) / 6;
    (0..courses)
        .map(|ordinate| {
            let mut row = Vec::new();
            if ordinate % 2 == 0 {
                // F H F H ... F
                for _ in 0..pairs {
                    row.push(SizeClass::Full);
                    row.push(SizeClass::Half);
                }
                row.push(SizeClass::Full);
            } else {
                // 3Q F H F H ... F 3Q
                row.push(SizeClass::ThreeQuarter);
                row.push(SizeClass::Full);
                for _ in 0..pairs - 1 {
                    row.push(SizeClass::Half);
                    row.push(SizeClass::Full);
                }
                row.push(SizeClass::ThreeQuarter);
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use SizeClass::{Full, Half, ThreeQuarter};

    #[test]
    fn test_satisfiable() {
        assert!(satisfiable(10));
        assert!(satisfiable(16));
        assert!(satisfiable(22));
        assert!(!satisfiable(12));
        assert!(!satisfiable(4));
    }

    #[test]
    fn test_courses_alternate_and_tile() {
        let rows = layout(16, 2);
        assert_eq!(rows[0], vec![Full, Half, Full, Half, Full]);
        assert_eq!(rows[1], vec![ThreeQuarter, Full, Half, Full, ThreeQuarter]);
        for row in &rows {
            assert_eq!(row.iter().map(|c| c.cells()).sum::<usize>(), 16);
        }
    }

    #[test]
    fn test_corner_bricks_are_three_quarters() {
        let rows = layout(22, 4);
        for row in rows.iter().skip(1).step_by(2) {
            assert_eq!(*row.first().unwrap(), ThreeQuarter);
            assert_eq!(*row.last().unwrap(), ThreeQuarter);
        }
    }

    #[test]
    fn test_no_joint_coincides_between_adjacent_courses() {
        let rows = layout(22, 2);
        let joints = |row: &[SizeClass]| -> Vec<usize> {
            let mut out = Vec::new();
            let mut cursor = 0;
            for class in &row[..row.len() - 1] {
                cursor += class.cells();
                out.push(cursor);
            }
            out
        };
        let below = joints(&rows[0]);
        let above = joints(&rows[1]);
        for j in &above {
            assert!(!below.contains(j), "joint at cell {} repeats", j);
        }
    }

    #[test]
    fn test_minimal_width_degenerates_cleanly() {
        // Ten cells: one pair plus the closing full; the offset course is
        // just 3Q F 3Q.
        let rows = layout(10, 2);
        assert_eq!(rows[0], vec![Full, Half, Full]);
        assert_eq!(rows[1], vec![ThreeQuarter, Full, ThreeQuarter]);
    }
}
