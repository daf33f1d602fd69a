//! Error type for the drawing library

use std::error;
use std::fmt;

/// Errors reported at the drawing API boundary
///
/// Degenerate geometry (zero width, tiny radius, empty angle span) is not an
/// error; those calls return an empty result rectangle instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A point list was shorter than the primitive requires
    TooFewPoints { expected: usize, found: usize },
    /// Bytes per pixel outside the supported 1..=4 range
    UnsupportedDepth(usize),
    /// Row pitch smaller than `width * bytes_per_pixel`
    BadPitch { pitch: usize, min: usize },
    /// Provided pixel memory too small for `height * pitch`
    BadBuffer { len: usize, min: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TooFewPoints { expected, found } => {
                write!(f, "points argument must contain {} or more points, got {}", expected, found)
            }
            Error::UnsupportedDepth(n) => {
                write!(f, "unsupported pixel depth ({} bytes per pixel) for drawing", n)
            }
            Error::BadPitch { pitch, min } => {
                write!(f, "row pitch {} is smaller than the minimum {}", pitch, min)
            }
            Error::BadBuffer { len, min } => {
                write!(f, "pixel memory of {} bytes is smaller than the required {}", len, min)
            }
        }
    }
}

impl error::Error for Error {}
