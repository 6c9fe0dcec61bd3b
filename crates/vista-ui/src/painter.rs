use vista_engine::coords::{Rect, Vec2};
use vista_engine::paint::Color;

use crate::draw::{DrawCmd, DrawList};
use crate::palette::Palette;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    /// Colours of the theme resolved for this frame.
    pub palette: Palette,
    /// Cursor position in logical pixels.
    pub mouse_pos: Vec2,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, palette: Palette, mouse_pos: Vec2) -> Self {
        Self { draw_list, palette, mouse_pos }
    }

    #[inline]
    pub fn is_hovered(&self, rect: Rect) -> bool {
        rect.contains(self.mouse_pos)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.draw_list.push(DrawCmd::Rect { rect, color });
    }

    /// Text with its top-left corner at `origin`.
    pub fn text(&mut self, text: impl Into<String>, origin: Vec2, size: f32, color: Color) {
        self.draw_list.push(DrawCmd::Text { origin, text: text.into(), size, color });
    }

    /// Begins a clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }
}
