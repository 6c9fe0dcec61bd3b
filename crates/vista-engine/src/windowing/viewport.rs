use std::fmt;

use super::window::{sanitize, MIN_ITEM_HEIGHT};

/// Scroll geometry of a list container.
///
/// All fields are kept clamped: offsets and heights are finite and
/// non-negative, `item_height` is at least [`MIN_ITEM_HEIGHT`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub(crate) scroll_offset: f32,
    pub(crate) container_height: f32,
    pub(crate) item_height: f32,
    pub(crate) overscan: usize,
}

impl Viewport {
    /// Builds a viewport, clamping malformed measurements.
    pub fn new(item_height: f32, container_height: f32) -> Self {
        Self {
            scroll_offset: 0.0,
            container_height: finite_or_zero(container_height),
            item_height: finite_item_height(item_height),
            overscan: 0,
        }
    }

    /// Builds a viewport, rejecting measurements the window math cannot use.
    pub fn try_new(item_height: f32, container_height: f32) -> Result<Self, ViewportError> {
        if !item_height.is_finite() || item_height <= 0.0 {
            return Err(ViewportError::ItemHeight(item_height));
        }
        if !container_height.is_finite() || container_height < 0.0 {
            return Err(ViewportError::ContainerHeight(container_height));
        }
        Ok(Self::new(item_height, container_height))
    }

    pub fn overscan(mut self, rows: usize) -> Self {
        self.overscan = rows;
        self
    }

    pub fn scroll_to(mut self, offset: f32) -> Self {
        self.scroll_offset = finite_or_zero(offset);
        self
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[inline]
    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    #[inline]
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    #[inline]
    pub fn overscan_rows(&self) -> usize {
        self.overscan
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn finite_item_height(v: f32) -> f32 {
    if v.is_finite() { sanitize(v, MIN_ITEM_HEIGHT) } else { MIN_ITEM_HEIGHT }
}

/// A viewport measurement that cannot be windowed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    /// Item height was zero, negative or not finite.
    ItemHeight(f32),
    /// Container height was negative or not finite.
    ContainerHeight(f32),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemHeight(v) => write!(f, "item height must be positive and finite, got {v}"),
            Self::ContainerHeight(v) => {
                write!(f, "container height must be non-negative and finite, got {v}")
            }
        }
    }
}

impl std::error::Error for ViewportError {}
