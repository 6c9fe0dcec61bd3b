use vista_engine::coords::{Rect, Vec2};
use vista_engine::paint::Color;

/// A primitive for the platform renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect { rect: Rect, color: Color },
    Text { origin: Vec2, text: String, size: f32, color: Color },
}

/// A command plus the clip it was recorded under.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// `None` draws everywhere.
    pub clip: Option<Rect>,
}

/// Commands recorded for one frame, in paint order.
///
/// Clips nest: [`push_clip`](Self::push_clip) intersects with the enclosing
/// clip, and a clip with no overlap becomes zero-sized so the renderer
/// drops what is drawn under it.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    clip_stack: Vec<Rect>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the list, keeping its allocation.
    pub fn clear(&mut self) {
        self.items.clear();
        self.clip_stack.clear();
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        let clip = self.clip_stack.last().copied();
        self.items.push(DrawItem { cmd, clip });
    }

    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            Some(parent) => parent.intersect(rect).unwrap_or_default(),
        };
        self.clip_stack.push(effective);
    }

    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip without push_clip");
        self.clip_stack.pop();
    }

    /// Text strings in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| match &item.cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            DrawCmd::Rect { .. } => None,
        })
    }
}
