//! Pure geometric primitives and pixel buffers for dndlist.

pub mod bitmap;
pub mod geometry;

pub use bitmap::Bitmap;
pub use geometry::{Point, Rect, Size};
