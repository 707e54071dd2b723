//! Pixel addressing
//!
//! Maps 2D coordinates onto the linear index of the LED on the wire.
//!
//! Row-major matrix, each row starts at `y * width`:
//!
//! ```text
//!  0  1  2  3
//!  4  5  6  7
//!  8  9 10 11
//! ```
//!
//! Serpentine matrix, odd rows run backwards:
//!
//! ```text
//!  0  1  2  3
//!  7  6  5  4
//!  8  9 10 11
//! ```

/// Wiring of a matrix panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every row runs in the same direction
    RowMajor,
    /// Alternate rows run in reverse direction
    Serpentine,
}

impl Layout {
    /// Resolve `(x, y)` to a linear index
    ///
    /// Returns `None` if `x` is outside the row or the index overflows.
    /// The result is not checked against the strip length.
    pub const fn index(self, x: usize, y: usize, width: usize) -> Option<usize> {
        match self {
            Self::RowMajor => matrix_index(x, y, width),
            Self::Serpentine => serpentine_index(x, y, width),
        }
    }
}

/// Row-major index: `y * width + x`
pub const fn matrix_index(x: usize, y: usize, width: usize) -> Option<usize> {
    if x >= width {
        return None;
    }
    row_start(y, width, x)
}

/// Serpentine index: `y * width + x` on even rows, mirrored on odd rows
pub const fn serpentine_index(x: usize, y: usize, width: usize) -> Option<usize> {
    if x >= width {
        return None;
    }
    let column = if y.is_multiple_of(2) { x } else { width - 1 - x };
    row_start(y, width, column)
}

const fn row_start(y: usize, width: usize, column: usize) -> Option<usize> {
    match y.checked_mul(width) {
        Some(start) => start.checked_add(column),
        None => None,
    }
}
