use vista_engine::coords::{Rect, Vec2};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Stacks children top to bottom.
///
/// Each child gets the height it measures, cut to what is left below the
/// children before it.
pub struct Column {
    children: Vec<Element>,
    gap: f32,
}

impl Column {
    pub fn new() -> Self {
        Self { children: Vec::new(), gap: 0.0 }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn gap(mut self, v: f32) -> Self {
        self.gap = v.max(0.0);
        self
    }

    fn child_rects(&self, rect: Rect) -> Vec<Rect> {
        let mut y = rect.origin.y;
        self.children
            .iter()
            .map(|child| {
                let remaining = (rect.bottom() - y).max(0.0);
                let h = child.measure(Vec2::new(rect.size.x, remaining)).y.min(remaining);
                let r = Rect::new(rect.origin.x, y, rect.size.x, h);
                y += h + self.gap;
                r
            })
            .collect()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, available: Vec2) -> Vec2 {
        let mut h = 0.0;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                h += self.gap;
            }
            let remaining = (available.y - h).max(0.0);
            h += child.measure(Vec2::new(available.x, remaining)).y.min(remaining);
        }
        Vec2::new(available.x, h)
    }

    fn layout(&mut self, rect: Rect) {
        let rects = self.child_rects(rect);
        for (child, r) in self.children.iter_mut().zip(rects) {
            child.layout(r);
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        for (child, r) in self.children.iter().zip(self.child_rects(rect)) {
            child.paint(painter, r);
        }
    }

    /// Clicks reach every child so the ones not under the cursor can drop
    /// focus; other events stop at the first child that consumes them.
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        let rects = self.child_rects(rect);
        let broadcast = matches!(event, UiEvent::Click { .. });
        let mut result = EventResult::Ignored;
        for (child, r) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, r).is_consumed() {
                result = EventResult::Consumed;
                if !broadcast {
                    break;
                }
            }
        }
        result
    }
}
