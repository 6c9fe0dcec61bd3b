use vista_engine::coords::{Rect, Vec2};
use vista_engine::windowing::{Viewport, VirtualScroll};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

use super::nav::key_scroll_delta;
use super::scrollbar::{scrollbar_rects, BAR_WIDTH};

pub(crate) const TEXT_SIZE: f32 = 15.0;
pub(crate) const TEXT_INSET: f32 = 16.0;

/// A scrollable list that only paints the rows inside its window.
///
/// Every row is `item_height` tall. The list owns its records and a
/// [`VirtualScroll`]; wheel, arrow, page and home/end input all become
/// scroll offsets fed to [`VirtualScroll::on_scroll`].
///
/// The wheel scrolls whichever list is under the cursor. Keys only reach
/// a focused list; a click inside focuses it and a click elsewhere blurs it.
///
/// # Example
/// ```rust,ignore
/// let viewport = Viewport::new(70.0, 400.0).overscan(3);
/// VirtualList::new(buildings, viewport, |b: &Building| b.name.clone())
///     .on_select(|i, b| log::info!("picked #{i}: {}", b.name))
/// ```
pub struct VirtualList<T> {
    items: Vec<T>,
    scroll: VirtualScroll,
    height: f32,
    label: Box<dyn Fn(&T) -> String>,
    /// Pixels per wheel-delta unit.
    wheel_step: f32,
    show_scrollbar: bool,
    selected: Option<usize>,
    focused: bool,
    on_scroll: Option<Box<dyn FnMut(f32)>>,
    on_select: Option<Box<dyn FnMut(usize, &T)>>,
}

impl<T: 'static> VirtualList<T> {
    pub fn new(items: Vec<T>, viewport: Viewport, label: impl Fn(&T) -> String + 'static) -> Self {
        let scroll = VirtualScroll::new(items.len(), viewport);
        Self {
            items,
            scroll,
            height: viewport.container_height(),
            label: Box::new(label),
            wheel_step: 40.0,
            show_scrollbar: true,
            selected: None,
            focused: false,
            on_scroll: None,
            on_select: None,
        }
    }

    pub fn wheel_step(mut self, v: f32) -> Self {
        self.wheel_step = v;
        self
    }

    pub fn show_scrollbar(mut self, v: bool) -> Self {
        self.show_scrollbar = v;
        self
    }

    pub fn focused(mut self, v: bool) -> Self {
        self.focused = v;
        self
    }

    /// Called with the new offset whenever it changes.
    pub fn on_scroll(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    /// Called when a row is clicked.
    pub fn on_select(mut self, f: impl FnMut(usize, &T) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn scroll(&self) -> &VirtualScroll {
        &self.scroll
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Scrolls so `index` is fully visible.
    pub fn reveal(&mut self, index: usize) {
        let before = self.scroll.viewport().scroll_offset();
        self.scroll.scroll_into_view(index);
        self.notify_if_moved(before);
    }

    fn apply_scroll(&mut self, delta: f32) {
        let before = self.scroll.viewport().scroll_offset();
        self.scroll.on_scroll(before + delta);
        self.notify_if_moved(before);
    }

    fn notify_if_moved(&mut self, before: f32) {
        let now = self.scroll.viewport().scroll_offset();
        if now != before {
            if let Some(f) = &mut self.on_scroll {
                f(now);
            }
        }
    }

    /// Index of the row under `pos`, if any.
    fn hit_row(&self, pos: Vec2, rect: Rect) -> Option<usize> {
        if !rect.contains(pos) {
            return None;
        }
        let vp = self.scroll.viewport();
        let y = (pos - rect.origin).y + vp.scroll_offset();
        let index = (y / vp.item_height()).floor() as usize;
        (index < self.items.len()).then_some(index)
    }
}

impl<T: 'static> Widget for VirtualList<T> {
    /// Asks for the container height it was built with.
    fn measure(&self, available: Vec2) -> Vec2 {
        Vec2::new(available.x, self.height.min(available.y))
    }

    fn layout(&mut self, rect: Rect) {
        if rect.size.y != self.scroll.viewport().container_height() {
            let before = self.scroll.viewport().scroll_offset();
            self.scroll.on_resize(rect.size.y);
            self.notify_if_moved(before);
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let vp = self.scroll.viewport();
        let offset = vp.scroll_offset();
        let row_h = vp.item_height();
        let bar = if self.show_scrollbar {
            scrollbar_rects(rect, self.scroll.total_extent(), offset)
        } else {
            None
        };
        let content_w = if bar.is_some() { rect.size.x - BAR_WIDTH } else { rect.size.x };
        let content = Rect::new(rect.origin.x, rect.origin.y, content_w, rect.size.y);
        let palette = painter.palette;

        painter.push_clip(rect);
        for (i, top, item) in self.scroll.visible_items(&self.items) {
            let row = content.row(top - offset, row_h);
            let bg = if self.selected == Some(i) {
                palette.row_selected
            } else if i % 2 == 1 {
                palette.row_alt
            } else {
                palette.row
            };
            painter.fill_rect(row, bg);
            let text_y = row.origin.y + (row_h - TEXT_SIZE) * 0.5;
            painter.text(
                (self.label)(item),
                Vec2::new(row.origin.x + TEXT_INSET, text_y),
                TEXT_SIZE,
                palette.text,
            );
        }
        painter.pop_clip();

        if let Some((track, thumb)) = bar {
            painter.fill_rect(track, palette.scrollbar_track);
            painter.fill_rect(thumb, palette.scrollbar_thumb);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::ScrollWheel { pos, delta } if rect.contains(*pos) => {
                self.apply_scroll(*delta * self.wheel_step);
                EventResult::Consumed
            }

            UiEvent::Click { pos } => {
                self.focused = rect.contains(*pos);
                if !self.focused {
                    return EventResult::Ignored;
                }
                if let Some(index) = self.hit_row(*pos, rect) {
                    self.selected = Some(index);
                    if let Some(f) = &mut self.on_select {
                        f(index, &self.items[index]);
                    }
                }
                EventResult::Consumed
            }

            UiEvent::KeyPress { key } if self.focused => {
                match key_scroll_delta(*key, self.scroll.viewport()) {
                    Some(delta) => {
                        self.apply_scroll(delta);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }

            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::draw::DrawList;
    use crate::event::Key;
    use crate::palette::Palette;

    const RECT: Rect = Rect::new(0.0, 0.0, 300.0, 400.0);

    fn list(n: usize) -> VirtualList<String> {
        let items = (0..n).map(|i| format!("Building {i}")).collect();
        let viewport = Viewport::new(70.0, 400.0).overscan(3);
        let mut l = VirtualList::new(items, viewport, |s: &String| s.clone());
        l.layout(RECT);
        l
    }

    fn painted(l: &VirtualList<String>) -> Vec<String> {
        let mut dl = DrawList::new();
        let mut p = Painter::new(&mut dl, Palette::DARK, Vec2::zero());
        l.paint(&mut p, RECT);
        dl.texts().map(str::to_string).collect()
    }

    #[test]
    fn paints_only_the_window() {
        let l = list(100);
        let texts = painted(&l);
        assert_eq!(texts.len(), 13);
        assert_eq!(texts[0], "Building 0");
        assert_eq!(texts[12], "Building 12");
    }

    #[test]
    fn rows_sit_at_absolute_offset_minus_scroll() {
        let mut l = list(100);
        l.apply_scroll(700.0);
        let mut dl = DrawList::new();
        let mut p = Painter::new(&mut dl, Palette::DARK, Vec2::zero());
        l.paint(&mut p, RECT);

        let first_row = dl.items().iter().find_map(|item| match item.cmd {
            crate::draw::DrawCmd::Rect { rect, .. } => Some(rect),
            _ => None,
        });
        // Row 7 lives at 490; scrolled by 700 it starts 210 above the top.
        assert_eq!(first_row.map(|r| r.origin.y), Some(-210.0));
        assert_eq!(dl.texts().next(), Some("Building 7"));
    }

    #[test]
    fn wheel_scrolls_only_when_hovered() {
        let offsets = Rc::new(RefCell::new(Vec::new()));
        let o = offsets.clone();
        let mut l = list(100).wheel_step(70.0).on_scroll(move |v| o.borrow_mut().push(v));

        let inside = UiEvent::ScrollWheel { pos: Vec2::new(10.0, 10.0), delta: 10.0 };
        let outside = UiEvent::ScrollWheel { pos: Vec2::new(10.0, 500.0), delta: 10.0 };
        assert_eq!(l.on_event(&outside, RECT), EventResult::Ignored);
        assert_eq!(l.on_event(&inside, RECT), EventResult::Consumed);

        assert_eq!(l.scroll().window().start_index(), Some(7));
        assert_eq!(*offsets.borrow(), [700.0]);
    }

    #[test]
    fn keys_scroll_and_clamp() {
        let mut l = list(100).focused(true);
        l.on_event(&UiEvent::KeyPress { key: Key::End }, RECT);
        assert_eq!(l.scroll().viewport().scroll_offset(), 6600.0);
        assert_eq!(l.scroll().window().end_index(), Some(99));

        l.on_event(&UiEvent::KeyPress { key: Key::ArrowUp }, RECT);
        assert_eq!(l.scroll().viewport().scroll_offset(), 6530.0);

        l.on_event(&UiEvent::KeyPress { key: Key::Home }, RECT);
        assert_eq!(l.scroll().viewport().scroll_offset(), 0.0);

        let r = l.on_event(&UiEvent::KeyPress { key: Key::Enter }, RECT);
        assert_eq!(r, EventResult::Ignored);
    }

    #[test]
    fn keys_need_focus() {
        let mut l = list(100);
        let end = UiEvent::KeyPress { key: Key::End };
        assert_eq!(l.on_event(&end, RECT), EventResult::Ignored);
        assert_eq!(l.scroll().viewport().scroll_offset(), 0.0);

        l.on_event(&UiEvent::Click { pos: Vec2::new(20.0, 20.0) }, RECT);
        assert!(l.is_focused());
        assert_eq!(l.on_event(&end, RECT), EventResult::Consumed);
        assert_eq!(l.scroll().viewport().scroll_offset(), 6600.0);

        l.on_event(&UiEvent::Click { pos: Vec2::new(20.0, 450.0) }, RECT);
        assert!(!l.is_focused());
        assert_eq!(l.on_event(&UiEvent::KeyPress { key: Key::Home }, RECT), EventResult::Ignored);
    }

    #[test]
    fn click_selects_row_under_cursor() {
        let picked = Rc::new(RefCell::new(None));
        let p = picked.clone();
        let mut l =
            list(100).on_select(move |i, s: &String| *p.borrow_mut() = Some((i, s.clone())));
        l.apply_scroll(700.0);

        // 100px into the viewport at offset 700 is y = 800 → row 11.
        let r = l.on_event(&UiEvent::Click { pos: Vec2::new(20.0, 100.0) }, RECT);
        assert_eq!(r, EventResult::Consumed);
        assert_eq!(l.selected(), Some(11));
        assert_eq!(*picked.borrow(), Some((11, "Building 11".to_string())));
    }

    #[test]
    fn click_below_last_row_focuses_without_selecting() {
        let mut l = list(2);
        let r = l.on_event(&UiEvent::Click { pos: Vec2::new(20.0, 300.0) }, RECT);
        assert_eq!(r, EventResult::Consumed);
        assert!(l.is_focused());
        assert_eq!(l.selected(), None);
    }

    #[test]
    fn layout_resizes_the_window() {
        let mut l = list(100);
        l.layout(Rect::new(0.0, 0.0, 300.0, 800.0));
        assert_eq!(l.scroll().viewport().container_height(), 800.0);
        assert_eq!(l.scroll().window().end_index(), Some(18));
    }

    #[test]
    fn reveal_scrolls_to_row() {
        let mut l = list(100);
        l.reveal(50);
        assert!(l.scroll().window().contains(50));
        assert_eq!(l.scroll().viewport().scroll_offset(), 51.0 * 70.0 - 400.0);
    }

    #[test]
    fn empty_list_paints_nothing() {
        let l = list(0);
        assert!(painted(&l).is_empty());
    }
}
