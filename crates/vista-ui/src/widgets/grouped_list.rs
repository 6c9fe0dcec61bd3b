use vista_engine::coords::{Rect, Vec2};
use vista_engine::windowing::{GroupRow, GroupedItems, Identified, Viewport, VirtualScroll};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

use super::nav::key_scroll_delta;
use super::virtual_list::{TEXT_INSET, TEXT_SIZE};

/// A categorised list with collapsible sections.
///
/// Section headers and items share one row height, so the flattened rows
/// are windowed exactly like a [`VirtualList`](super::virtual_list::VirtualList)
/// and take the same wheel and keyboard input. Clicking a header expands or
/// collapses its section.
pub struct GroupedList<T: Identified> {
    groups: GroupedItems<T>,
    scroll: VirtualScroll,
    height: f32,
    label: Box<dyn Fn(&T) -> String>,
    wheel_step: f32,
    focused: bool,
    on_scroll: Option<Box<dyn FnMut(f32)>>,
    on_toggle: Option<Box<dyn FnMut(&str, bool)>>,
}

impl<T: Identified + 'static> GroupedList<T> {
    pub fn new(
        groups: GroupedItems<T>,
        viewport: Viewport,
        label: impl Fn(&T) -> String + 'static,
    ) -> Self {
        let scroll = VirtualScroll::new(groups.row_count(), viewport);
        Self {
            groups,
            scroll,
            height: viewport.container_height(),
            label: Box::new(label),
            wheel_step: 40.0,
            focused: false,
            on_scroll: None,
            on_toggle: None,
        }
    }

    pub fn wheel_step(mut self, v: f32) -> Self {
        self.wheel_step = v;
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

    /// Called with the section key and its new expanded state.
    pub fn on_toggle(mut self, f: impl FnMut(&str, bool) + 'static) -> Self {
        self.on_toggle = Some(Box::new(f));
        self
    }

    pub fn groups(&self) -> &GroupedItems<T> {
        &self.groups
    }

    pub fn scroll(&self) -> &VirtualScroll {
        &self.scroll
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Flips a section and rebuilds the row window around the new count,
    /// keeping the offset where the shorter list still allows it.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let expanded = self.groups.toggle(key)?;
        let viewport = *self.scroll.viewport();
        self.scroll = VirtualScroll::new(self.groups.row_count(), viewport);
        log::debug!("section {key:?} expanded={expanded}, {} rows", self.groups.row_count());
        if let Some(f) = &mut self.on_toggle {
            f(key, expanded);
        }
        self.notify_if_moved(viewport.scroll_offset());
        Some(expanded)
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

    fn row_at(&self, pos: Vec2, rect: Rect) -> Option<GroupRow<'_, T>> {
        if !rect.contains(pos) {
            return None;
        }
        let vp = self.scroll.viewport();
        let y = (pos - rect.origin).y + vp.scroll_offset();
        self.groups.row((y / vp.item_height()).floor() as usize)
    }
}

impl<T: Identified + 'static> Widget for GroupedList<T> {
    /// Asks for the container height it was built with, so it can share a
    /// column with widgets below it.
    fn measure(&self, available: Vec2) -> Vec2 {
        Vec2::new(available.x, self.height.min(available.y))
    }

    fn layout(&mut self, rect: Rect) {
        if rect.size.y != self.scroll.viewport().container_height() {
            self.scroll.on_resize(rect.size.y);
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let vp = self.scroll.viewport();
        let (offset, row_h) = (vp.scroll_offset(), vp.item_height());
        let window = self.scroll.window().range();
        let palette = painter.palette;

        painter.push_clip(rect);
        for (i, row) in window.clone().zip(self.groups.rows_from(window.start)) {
            let band = rect.row(self.scroll.item_offset(i) - offset, row_h);
            let text_y = band.origin.y + (row_h - TEXT_SIZE) * 0.5;
            let text_origin = Vec2::new(band.origin.x + TEXT_INSET, text_y);
            match row {
                GroupRow::Header { key, len, expanded, .. } => {
                    painter.fill_rect(band, palette.header);
                    let marker = if expanded { "▾" } else { "▸" };
                    let title = format!("{marker} {key} ({len})");
                    painter.text(title, text_origin, TEXT_SIZE, palette.text);
                }
                GroupRow::Item { index, item, .. } => {
                    let fill = if index % 2 == 1 { palette.row_alt } else { palette.row };
                    painter.fill_rect(band, fill);
                    let indented = text_origin + Vec2::new(TEXT_INSET, 0.0);
                    painter.text((self.label)(item), indented, TEXT_SIZE, palette.muted_text);
                }
            }
        }
        painter.pop_clip();
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::ScrollWheel { pos, delta } if rect.contains(*pos) => {
                self.apply_scroll(*delta * self.wheel_step);
                EventResult::Consumed
            }
            UiEvent::Click { pos } => {
                self.focused = rect.contains(*pos);
                let key = match self.row_at(*pos, rect) {
                    Some(GroupRow::Header { key, .. }) => key.to_string(),
                    Some(GroupRow::Item { .. }) => return EventResult::Consumed,
                    None if self.focused => return EventResult::Consumed,
                    None => return EventResult::Ignored,
                };
                self.toggle(&key);
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

    struct Stop {
        id: u32,
        area: &'static str,
        name: String,
    }

    impl Identified for Stop {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn stops() -> Vec<Stop> {
        (0..40)
            .map(|id| Stop {
                id,
                area: ["North", "South", "East"][id as usize % 3],
                name: format!("Stop {id}"),
            })
            .collect()
    }

    fn list(active: Option<u32>) -> GroupedList<Stop> {
        let groups = GroupedItems::new(stops(), |s| s.area, active.as_ref());
        let viewport = Viewport::new(40.0, 400.0).overscan(1);
        let mut l = GroupedList::new(groups, viewport, |s: &Stop| s.name.clone());
        l.layout(RECT);
        l
    }

    fn painted(l: &GroupedList<Stop>) -> Vec<String> {
        let mut dl = DrawList::new();
        let mut p = Painter::new(&mut dl, Palette::LIGHT, Vec2::zero());
        l.paint(&mut p, RECT);
        dl.texts().map(str::to_string).collect()
    }

    #[test]
    fn collapsed_sections_paint_headers_only() {
        let l = list(None);
        assert_eq!(painted(&l), ["▸ North (14)", "▸ South (13)", "▸ East (13)"]);
    }

    #[test]
    fn active_item_section_starts_open() {
        let l = list(Some(4));
        let texts = painted(&l);
        assert_eq!(texts[0], "▸ North (14)");
        assert_eq!(texts[1], "▾ South (13)");
        assert_eq!(texts[2], "Stop 1");
        assert_eq!(l.scroll().item_count(), 3 + 13);
    }

    #[test]
    fn clicking_header_toggles_and_rewindows() {
        let toggled = Rc::new(RefCell::new(Vec::new()));
        let t = toggled.clone();
        let mut l =
            list(None).on_toggle(move |k, open| t.borrow_mut().push((k.to_string(), open)));

        // Second row is the South header.
        let r = l.on_event(&UiEvent::Click { pos: Vec2::new(10.0, 50.0) }, RECT);
        assert_eq!(r, EventResult::Consumed);
        assert!(l.groups().is_expanded("South"));
        assert_eq!(l.scroll().item_count(), 16);
        assert_eq!(*toggled.borrow(), [("South".to_string(), true)]);

        l.on_event(&UiEvent::Click { pos: Vec2::new(10.0, 50.0) }, RECT);
        assert!(!l.groups().is_expanded("South"));
        assert_eq!(l.scroll().item_count(), 3);
    }

    #[test]
    fn window_limits_painted_rows() {
        let mut l = list(None);
        for key in ["North", "South", "East"] {
            l.toggle(key);
        }
        assert_eq!(l.scroll().item_count(), 43);
        // ceil(400 / 40) = 10 visible, + 2 overscan.
        assert_eq!(painted(&l).len(), 13);

        let offset = 20.0 * 40.0;
        l.on_event(&UiEvent::ScrollWheel { pos: Vec2::new(5.0, 5.0), delta: offset / 40.0 }, RECT);
        assert_eq!(l.scroll().window().start_index(), Some(19));
    }

    #[test]
    fn toggle_keeps_offset_when_possible() {
        let mut l = list(None);
        for key in ["North", "South", "East"] {
            l.toggle(key);
        }
        l.on_event(&UiEvent::ScrollWheel { pos: Vec2::new(5.0, 5.0), delta: 10.0 }, RECT);
        assert_eq!(l.scroll().viewport().scroll_offset(), 400.0);
        l.toggle("East");
        assert_eq!(l.scroll().viewport().scroll_offset(), 400.0);
        // Collapsing everything leaves nothing to scroll.
        l.toggle("North");
        l.toggle("South");
        assert_eq!(l.scroll().viewport().scroll_offset(), 0.0);
    }

    #[test]
    fn keys_scroll_only_while_focused() {
        let offsets = Rc::new(RefCell::new(Vec::new()));
        let o = offsets.clone();
        let mut l = list(None).on_scroll(move |v| o.borrow_mut().push(v));
        for key in ["North", "South", "East"] {
            l.toggle(key);
        }

        let end = UiEvent::KeyPress { key: Key::End };
        assert_eq!(l.on_event(&end, RECT), EventResult::Ignored);
        assert_eq!(l.scroll().viewport().scroll_offset(), 0.0);

        // A click on an item row focuses without toggling anything.
        l.on_event(&UiEvent::Click { pos: Vec2::new(10.0, 60.0) }, RECT);
        assert!(l.is_focused());
        assert!(l.groups().is_expanded("North"));

        assert_eq!(l.on_event(&end, RECT), EventResult::Consumed);
        assert_eq!(l.scroll().viewport().scroll_offset(), 43.0 * 40.0 - 400.0);
        l.on_event(&UiEvent::KeyPress { key: Key::PageUp }, RECT);
        assert_eq!(l.scroll().viewport().scroll_offset(), 1320.0 - 360.0);
        assert_eq!(*offsets.borrow(), [1320.0, 960.0]);

        l.on_event(&UiEvent::Click { pos: Vec2::new(10.0, 500.0) }, RECT);
        assert!(!l.is_focused());
    }

    #[test]
    fn windowed_paint_matches_flattened_rows() {
        let mut l = list(Some(4));
        l.toggle("North");
        l.on_event(&UiEvent::ScrollWheel { pos: Vec2::new(5.0, 5.0), delta: 15.0 }, RECT);
        // Offset 600 is row 15; one overscan row puts the window at 14.
        assert_eq!(l.scroll().window().start_index(), Some(14));
        let texts = painted(&l);
        assert_eq!(texts[0], "Stop 39");
        assert_eq!(texts[1], "▾ South (13)");
        assert_eq!(texts[2], "Stop 1");
    }
}
