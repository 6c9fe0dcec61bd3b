//! List windowing.
//!
//! Computes which rows of a uniform-height list intersect a scrolled
//! container, so a renderer only instantiates that slice. The math lives in
//! [`compute_window`]; [`VirtualScroll`] holds the viewport state that feeds
//! it, and [`GroupedItems`] flattens a categorised list into windowable rows.

mod group;
mod scroll;
mod viewport;
mod window;

pub use group::{GroupRow, GroupedItems, Identified, ItemGroup};
pub use scroll::VirtualScroll;
pub use viewport::{Viewport, ViewportError};
pub use window::{compute_window, total_extent, ItemWindow, MIN_ITEM_HEIGHT};
