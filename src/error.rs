use core::fmt;

/// Driver error
///
/// `E` is the error type of the pattern output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The strip has no LEDs
    Empty,
    /// The strip is longer than the buffer capacity
    Capacity { len: usize, max: usize },
    /// Timing override can not be decoded by a chip
    InvalidTiming,
    /// Address resolves outside of the strip
    OutOfBounds { index: usize, len: usize },
    /// Matrix coordinates do not map onto the strip
    InvalidPosition { x: usize, y: usize },
    /// Color sequence does not match the strip length
    LengthMismatch { expected: usize, actual: usize },
    /// A frame is still being sent
    Busy,
    /// The pattern output failed
    Output(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "strip has no LEDs"),
            Self::Capacity { len, max } => {
                write!(f, "strip of {len} LEDs exceeds capacity of {max}")
            }
            Self::InvalidTiming => write!(f, "invalid chip timing"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for {len} LEDs")
            }
            Self::InvalidPosition { x, y } => {
                write!(f, "position ({x}, {y}) is outside of the matrix")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} colors, got {actual}")
            }
            Self::Busy => write!(f, "transmission in progress"),
            Self::Output(err) => write!(f, "output error: {err:?}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
