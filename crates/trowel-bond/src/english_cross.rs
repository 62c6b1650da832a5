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

//! English cross bond.
//!
//! A four-course cycle: a stretcher course of fulls, a header course of
//! halfs with three-quarter closers at both ends, a stretcher course
//! shifted half a brick (half bricks at both ends), and another header
//! course. The half-brick shift between the two stretcher phases is what
//! distinguishes the cross bond from plain English bond.
//!
//! Header course joints sit on odd cell positions, stretcher joints on
//! even ones, so no joint repeats between adjacent courses.

use trowel_model::format::SizeClass;

/// Returns `true` if `cells` fits both stretcher phases and the header
/// course: a multiple of four, at least two fulls wide.
pub(crate) fn satisfiable(cells: usize) -> bool {
    cells % 4 == 0 && cells >= 8
}

/// Lays out `courses` rows of `cells` quarter cells.
///
/// Callers must have checked [`satisfiable`] first.
pub(crate) fn layout(cells: usize, courses: usize) -> Vec<Vec<SizeClass>> {
    debug_assert!(satisfiable(cells));
    (0..courses)
        .map(|ordinate| match ordinate % 4 {
            0 => std::iter::repeat(SizeClass::Full).take(cells / 4).collect(),
            2 => {
                // Half-shifted stretcher phase: H F ... F H.
                let mut row = vec![SizeClass::Half];
                row.extend(std::iter::repeat(SizeClass::Full).take((cells - 4) / 4));
                row.push(SizeClass::Half);
                row
            }
            _ => {
                // Header course: 3Q H H ... H 3Q.
                let mut row = vec![SizeClass::ThreeQuarter];
                row.extend(std::iter::repeat(SizeClass::Half).take((cells - 6) / 2));
                row.push(SizeClass::ThreeQuarter);
                row
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use SizeClass::{Full, Half, ThreeQuarter};

    #[test]
    fn test_satisfiable() {
        assert!(satisfiable(8));
        assert!(satisfiable(16));
        assert!(!satisfiable(10));
        assert!(!satisfiable(4));
    }

    #[test]
    fn test_four_course_cycle() {
        let rows = layout(8, 5);
        assert_eq!(rows[0], vec![Full, Full]);
        assert_eq!(rows[1], vec![ThreeQuarter, Half, ThreeQuarter]);
        assert_eq!(rows[2], vec![Half, Full, Half]);
        assert_eq!(rows[3], rows[1]);
        assert_eq!(rows[4], rows[0]);
        for row in &rows {
            assert_eq!(row.iter().map(|c| c.cells()).sum::<usize>(), 8);
        }
    }

    #[test]
    fn test_stretcher_phases_are_offset_by_half_a_brick() {
        let rows = layout(16, 3);
        let joints = |row: &[SizeClass]| -> Vec<usize> {
            let mut out = Vec::new();
            let mut cursor = 0;
            for class in &row[..row.len() - 1] {
                cursor += class.cells();
                out.push(cursor);
            }
            out
        };
        // Phase joints: {4, 8, 12} vs {2, 6, 10, 14}; every joint of the
        // shifted phase is two cells (one half-brick) off the first.
        assert_eq!(joints(&rows[0]), vec![4, 8, 12]);
        assert_eq!(joints(&rows[2]), vec![2, 6, 10, 14]);
    }
}
