use super::viewport::Viewport;
use super::window::{compute_window, item_offset, total_extent, ItemWindow};

/// Viewport state plus the window it currently yields.
///
/// The window only changes in response to an observed scroll
/// ([`on_scroll`](Self::on_scroll)) or container resize
/// ([`on_resize`](Self::on_resize)); reading it is free.
#[derive(Debug, Clone)]
pub struct VirtualScroll {
    item_count: usize,
    viewport: Viewport,
    window: ItemWindow,
}

impl VirtualScroll {
    pub fn new(item_count: usize, viewport: Viewport) -> Self {
        let mut this = Self { item_count, viewport, window: ItemWindow::empty() };
        this.viewport.scroll_offset = this.viewport.scroll_offset.min(this.max_offset());
        this.recompute();
        this
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn window(&self) -> &ItemWindow {
        &self.window
    }

    /// Height of the whole list.
    #[inline]
    pub fn total_extent(&self) -> f32 {
        total_extent(self.item_count, self.viewport.item_height)
    }

    /// Largest offset that still fills the container.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        (self.total_extent() - self.viewport.container_height).max(0.0)
    }

    /// Absolute top offset of `index`.
    #[inline]
    pub fn item_offset(&self, index: usize) -> f32 {
        item_offset(index, self.viewport.item_height)
    }

    /// Records a new scroll offset, clamped to `[0, max_offset]`.
    ///
    /// Returns `true` if the rendered window changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let offset = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, self.max_offset()) };
        self.viewport.scroll_offset = offset;
        self.recompute()
    }

    /// Records a new container height. Returns `true` if the window changed.
    pub fn on_resize(&mut self, container_height: f32) -> bool {
        self.viewport.container_height =
            if container_height.is_finite() { container_height.max(0.0) } else { 0.0 };
        let offset = self.viewport.scroll_offset;
        self.on_scroll(offset)
    }

    /// Scrolls the minimum distance that puts `index` fully inside the
    /// container. Out-of-range indices are ignored.
    pub fn scroll_into_view(&mut self, index: usize) -> bool {
        if index >= self.item_count {
            return false;
        }
        let top = self.item_offset(index);
        let bottom = top + self.viewport.item_height;
        let offset = self.viewport.scroll_offset;
        let view_bottom = offset + self.viewport.container_height;

        if top < offset {
            self.on_scroll(top)
        } else if bottom > view_bottom {
            self.on_scroll(bottom - self.viewport.container_height)
        } else {
            false
        }
    }

    /// The rows a renderer should instantiate, each with its absolute offset.
    ///
    /// `items` is expected to hold `item_count` records; extra records are
    /// never yielded and missing ones are skipped.
    pub fn visible_items<'a, T>(
        &self,
        items: &'a [T],
    ) -> impl Iterator<Item = (usize, f32, &'a T)> {
        let height = self.viewport.item_height;
        let range = self.window.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        items[start..end]
            .iter()
            .enumerate()
            .map(move |(i, item)| (start + i, item_offset(start + i, height), item))
    }

    fn recompute(&mut self) -> bool {
        let next = compute_window(
            self.item_count,
            self.viewport.item_height,
            self.viewport.container_height,
            self.viewport.scroll_offset,
            self.viewport.overscan,
        );
        if next == self.window {
            return false;
        }
        log::trace!(
            "window {:?} -> {:?} at offset {}",
            self.window.range(),
            next.range(),
            self.viewport.scroll_offset
        );
        self.window = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(count: usize) -> VirtualScroll {
        VirtualScroll::new(count, Viewport::new(70.0, 400.0).overscan(3))
    }

    #[test]
    fn initial_window_matches_free_function() {
        let vs = list(100);
        assert_eq!(vs.window(), &compute_window(100, 70.0, 400.0, 0.0, 3));
        assert_eq!(vs.total_extent(), 7000.0);
        assert_eq!(vs.max_offset(), 6600.0);
    }

    #[test]
    fn on_scroll_recomputes_and_reports_change() {
        let mut vs = list(100);
        assert!(vs.on_scroll(700.0));
        assert_eq!(vs.window().start_index(), Some(7));
        assert_eq!(vs.window().end_index(), Some(19));
        // Same offset again: nothing changes.
        assert!(!vs.on_scroll(700.0));
        // Within the same row: window is stable.
        assert!(!vs.on_scroll(710.0));
    }

    #[test]
    fn on_scroll_clamps_to_content() {
        let mut vs = list(100);
        vs.on_scroll(1e9);
        assert_eq!(vs.viewport().scroll_offset(), 6600.0);
        assert_eq!(vs.window().end_index(), Some(99));
        vs.on_scroll(-40.0);
        assert_eq!(vs.viewport().scroll_offset(), 0.0);
        vs.on_scroll(f32::NAN);
        assert_eq!(vs.viewport().scroll_offset(), 0.0);
    }

    #[test]
    fn short_list_cannot_scroll() {
        let mut vs = list(3);
        assert_eq!(vs.max_offset(), 0.0);
        assert!(!vs.on_scroll(500.0));
        assert_eq!(vs.window().range(), 0..3);
    }

    #[test]
    fn resize_grows_window() {
        let mut vs = list(100);
        assert!(vs.on_resize(800.0));
        // ceil(800/70) = 12, plus 6 overscan.
        assert_eq!(vs.window().end_index(), Some(18));
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut vs = list(10);
        vs.on_scroll(300.0);
        vs.on_resize(700.0);
        assert_eq!(vs.viewport().scroll_offset(), 0.0);
    }

    #[test]
    fn scroll_into_view_moves_minimally() {
        let mut vs = list(100);
        // Row 10 spans 700..770; bottom-align it.
        assert!(vs.scroll_into_view(10));
        assert_eq!(vs.viewport().scroll_offset(), 370.0);
        // Already visible: no movement.
        assert!(!vs.scroll_into_view(8));
        assert_eq!(vs.viewport().scroll_offset(), 370.0);
        // Above the view: top-align.
        vs.scroll_into_view(2);
        assert_eq!(vs.viewport().scroll_offset(), 140.0);
        assert!(!vs.scroll_into_view(100));
    }

    #[test]
    fn visible_items_carry_offsets() {
        let items: Vec<u32> = (0..100).collect();
        let mut vs = list(100);
        vs.on_scroll(700.0);
        let rows: Vec<_> = vs.visible_items(&items).collect();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0], (7, 490.0, &7));
        assert_eq!(rows.last().copied(), Some((19, 1330.0, &19)));
    }

    #[test]
    fn visible_items_tolerates_short_slice() {
        let items = [1u8, 2, 3];
        let vs = list(100);
        assert_eq!(vs.visible_items(&items).count(), 3);
    }
}
