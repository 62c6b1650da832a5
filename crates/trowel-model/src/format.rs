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

//! Brick geometry and the size-class system.
//!
//! All horizontal layout in the workspace happens on a quarter-brick grid:
//! a full brick is two headers plus a head joint long, a half brick equals
//! the depth (which is what lets half bricks close a corner), and every cut
//! length is a whole number of quarter cells. The `BrickFormat` validates
//! these divisibility requirements eagerly so the generators and the Wild
//! solver can rely on exact integer arithmetic.

/// Millimeter quantity used throughout the model.
pub type Millimeter = i64;

/// The error type for brick format construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A dimension or joint width was zero or negative.
    NonPositiveDimension,
    /// `length - head_joint` is odd, so no exact half-brick exists.
    IndivisibleHalf,
    /// `half - head_joint` is odd, so no exact quarter-brick exists.
    IndivisibleQuarter,
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveDimension => {
                write!(f, "Brick dimensions and joints must be positive")
            }
            Self::IndivisibleHalf => {
                write!(f, "Brick length minus head joint must be even to cut half bricks")
            }
            Self::IndivisibleQuarter => {
                write!(f, "Half brick minus head joint must be even to cut quarter bricks")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// The immutable geometric description of the brick a wall is built from.
///
/// All derived cut lengths follow from `length` and `head_joint`:
///
/// * `half = (length - head_joint) / 2`: two halves and a joint make a
///   full, and the half equals the brick depth so headers close corners.
/// * `quarter = (half - head_joint) / 2`: likewise two quarters and a
///   joint make a half.
/// * `three_quarter = half + head_joint + quarter`.
/// * `cell_pitch = quarter + head_joint`: the quantization grid every
///   layout sits on; a brick of `n` cells is `n * cell_pitch - head_joint`
///   long.
///
/// # Examples
///
/// ```rust
/// # use trowel_model::format::BrickFormat;
/// let f = BrickFormat::standard();
/// assert_eq!(f.length(), 210);
/// assert_eq!(f.half_length(), 100);
/// assert_eq!(f.quarter_length(), 45);
/// assert_eq!(f.three_quarter_length(), 155);
/// assert_eq!(f.cell_pitch(), 55);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BrickFormat {
    length: Millimeter,
    depth: Millimeter,
    height: Millimeter,
    head_joint: Millimeter,
}

impl BrickFormat {
    /// The standard waal format: 210 x 100 x 50 mm with a 10 mm head joint.
    #[inline]
    pub const fn standard() -> Self {
        Self {
            length: 210,
            depth: 100,
            height: 50,
            head_joint: 10,
        }
    }

    /// Creates a validated `BrickFormat`.
    ///
    /// Fails if any dimension is non-positive or if the half/quarter cut
    /// lengths would not be whole millimeters.
    pub fn try_new(
        length: Millimeter,
        depth: Millimeter,
        height: Millimeter,
        head_joint: Millimeter,
    ) -> Result<Self, FormatError> {
        if length <= 0 || depth <= 0 || height <= 0 || head_joint <= 0 {
            return Err(FormatError::NonPositiveDimension);
        }
        if (length - head_joint) % 2 != 0 {
            return Err(FormatError::IndivisibleHalf);
        }
        let half = (length - head_joint) / 2;
        if (half - head_joint) % 2 != 0 {
            return Err(FormatError::IndivisibleQuarter);
        }
        Ok(Self {
            length,
            depth,
            height,
            head_joint,
        })
    }

    /// Returns the stretcher length of a full brick.
    #[inline]
    pub const fn length(&self) -> Millimeter {
        self.length
    }

    /// Returns the brick depth (header width).
    #[inline]
    pub const fn depth(&self) -> Millimeter {
        self.depth
    }

    /// Returns the brick height.
    #[inline]
    pub const fn height(&self) -> Millimeter {
        self.height
    }

    /// Returns the head joint width between adjacent bricks in a course.
    #[inline]
    pub const fn head_joint(&self) -> Millimeter {
        self.head_joint
    }

    /// Returns the half-brick cut length.
    #[inline]
    pub const fn half_length(&self) -> Millimeter {
        (self.length - self.head_joint) / 2
    }

    /// Returns the quarter-brick cut length.
    #[inline]
    pub const fn quarter_length(&self) -> Millimeter {
        (self.half_length() - self.head_joint) / 2
    }

    /// Returns the three-quarter cut length.
    #[inline]
    pub const fn three_quarter_length(&self) -> Millimeter {
        self.half_length() + self.head_joint + self.quarter_length()
    }

    /// Returns the quarter-cell pitch of the layout grid.
    #[inline]
    pub const fn cell_pitch(&self) -> Millimeter {
        self.quarter_length() + self.head_joint
    }

    /// Returns the length of the given size class in this format.
    #[inline]
    pub const fn length_of(&self, class: SizeClass) -> Millimeter {
        match class {
            SizeClass::Quarter => self.quarter_length(),
            SizeClass::Half => self.half_length(),
            SizeClass::ThreeQuarter => self.three_quarter_length(),
            SizeClass::Full => self.length,
        }
    }

    /// Converts a wall width to its quarter-cell count, or `None` if the
    /// width does not sit on the layout grid.
    ///
    /// A width of `c` cells measures `c * cell_pitch - head_joint`.
    #[inline]
    pub fn width_in_cells(&self, width: Millimeter) -> Option<usize> {
        let pitch = self.cell_pitch();
        if width <= 0 || (width + self.head_joint) % pitch != 0 {
            return None;
        }
        Some(((width + self.head_joint) / pitch) as usize)
    }

    /// Converts a quarter-cell count back to a wall width.
    #[inline]
    pub fn cells_to_width(&self, cells: usize) -> Millimeter {
        cells as Millimeter * self.cell_pitch() - self.head_joint
    }
}

impl Default for BrickFormat {
    fn default() -> Self {
        Self::standard()
    }
}

/// The cut lengths a bond may lay. Ordered by length, so the Wild solver's
/// corner rule is a plain `>= SizeClass::Half` comparison.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SizeClass {
    Quarter,
    Half,
    ThreeQuarter,
    Full,
}

impl SizeClass {
    /// Returns the number of quarter cells this class occupies on the
    /// layout grid.
    #[inline]
    pub const fn cells(&self) -> usize {
        match self {
            SizeClass::Quarter => 1,
            SizeClass::Half => 2,
            SizeClass::ThreeQuarter => 3,
            SizeClass::Full => 4,
        }
    }

    /// Returns the cut length of this class in the given format.
    #[inline]
    pub const fn length_in(&self, format: &BrickFormat) -> Millimeter {
        format.length_of(*self)
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeClass::Quarter => write!(f, "Q"),
            SizeClass::Half => write!(f, "H"),
            SizeClass::ThreeQuarter => write!(f, "3Q"),
            SizeClass::Full => write!(f, "F"),
        }
    }
}
