use std::ops::Range;

/// Smallest item height the window math will divide by.
pub const MIN_ITEM_HEIGHT: f32 = 1.0;

/// A contiguous run of list indices to render.
///
/// Always in bounds for the `item_count` it was computed against. The empty
/// window has no start or end index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemWindow {
    range: Range<usize>,
}

impl ItemWindow {
    #[inline]
    pub const fn empty() -> Self {
        Self { range: 0..0 }
    }

    /// Inclusive constructor. `end < start` yields the empty window.
    #[inline]
    pub fn inclusive(start: usize, end: usize) -> Self {
        if end < start {
            Self::empty()
        } else {
            Self { range: start..end + 1 }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// First index, or `None` for the empty window.
    #[inline]
    pub fn start_index(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.range.start)
    }

    /// Last index (inclusive), or `None` for the empty window.
    #[inline]
    pub fn end_index(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.range.end - 1)
    }

    /// Half-open index range, convenient for slicing.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }
}

/// Coerces a measurement into a finite value no smaller than `min`.
#[inline]
pub(crate) fn sanitize(v: f32, min: f32) -> f32 {
    if v.is_nan() { min } else { v.max(min) }
}

/// Absolute top offset of `index` in a list of uniform `item_height`.
#[inline]
pub(crate) fn item_offset(index: usize, item_height: f32) -> f32 {
    index as f32 * sanitize(item_height, MIN_ITEM_HEIGHT)
}

/// Height of the whole list; callers size the scrollable content with it so
/// the native scrollbar stays accurate.
#[inline]
pub fn total_extent(item_count: usize, item_height: f32) -> f32 {
    item_count as f32 * sanitize(item_height, MIN_ITEM_HEIGHT)
}

/// Indices of `item_count` uniform rows to render for a container scrolled
/// to `scroll_offset`, padded by `overscan` rows on each side.
///
/// Pure: the same inputs always give the same window. Malformed inputs are
/// clamped rather than rejected: an item height below [`MIN_ITEM_HEIGHT`]
/// (or NaN) becomes `MIN_ITEM_HEIGHT`, negative or NaN offsets and heights
/// become zero. An offset past the end of the list pins the start to the
/// last row so the window is never inverted.
pub fn compute_window(
    item_count: usize,
    item_height: f32,
    container_height: f32,
    scroll_offset: f32,
    overscan: usize,
) -> ItemWindow {
    if item_count == 0 {
        return ItemWindow::empty();
    }

    let item_height = sanitize(item_height, MIN_ITEM_HEIGHT);
    let container_height = sanitize(container_height, 0.0);
    let scroll_offset = sanitize(scroll_offset, 0.0);
    let last = item_count - 1;

    // `as usize` saturates, so an infinite offset lands on usize::MAX.
    let first_visible = (scroll_offset / item_height).floor() as usize;
    let visible_count = (container_height / item_height).ceil() as usize;

    let start = first_visible.saturating_sub(overscan).min(last);
    let end = start
        .saturating_add(visible_count)
        .saturating_add(overscan.saturating_mul(2))
        .min(last);

    ItemWindow::inclusive(start, end)
}
