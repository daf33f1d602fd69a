//! Scan-conversion of 2D primitives into raw pixel buffers.
//!
//! Every drawing call takes the same shape of inputs and produces the same
//! shape of output:
//!
//! ```text
//!   buf  = PixelBuffer::new(w, h, PixelFormat::...)
//!   clip = region writes are restricted to (clamped to the buffer)
//!   color = u32 already packed in the buffer's format
//!   line/aaline/circle/aacircle/ellipse/arc/polygon/rect(...)
//!     -> Rect bounding exactly the pixels that changed
//! ```
//!
//! Pixels are written through the access layer in `pixel`, which dispatches
//! on the buffer's storage width (1..=4 bytes) and folds every successful
//! write into a `DrawnArea`. Degenerate geometry (zero width, tiny radius,
//! empty angle span) is not an error: those calls return a zero-size
//! rectangle anchored at the primitive's first coordinate.

pub mod bbox;
pub mod buffer;
pub mod clip;
pub mod color;
pub mod error;
pub mod format;
pub mod pixel;
pub mod ppm;

pub mod aacircle;
pub mod aaline;
pub mod arc;
pub mod circle;
pub mod ellipse;
pub mod line;
pub mod poly;
pub mod rect;

pub use crate::bbox::DrawnArea;
pub use crate::buffer::PixelBuffer;
pub use crate::clip::{ClipRect, Rect};
pub use crate::color::Rgba8;
pub use crate::error::Error;
pub use crate::format::{Bpp, PixelFormat};

pub use crate::aacircle::aacircle;
pub use crate::aaline::{aaline, aalines};
pub use crate::arc::arc;
pub use crate::circle::{circle, Quadrants};
pub use crate::ellipse::ellipse;
pub use crate::line::{line, lines};
pub use crate::poly::polygon;
pub use crate::rect::{rect, CornerRadii};
