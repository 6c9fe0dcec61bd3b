//! Geometry in logical pixels.
//!
//! Origin top-left, +X right, +Y down. List rows are laid out along +Y.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
