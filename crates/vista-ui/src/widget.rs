use vista_engine::coords::{Rect, Vec2};

use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// The trait every UI component implements.
///
/// A frame calls [`layout`](Self::layout), then routes events through
/// [`on_event`](Self::on_event), then [`paint`](Self::paint)s, always with
/// the same rect for a given widget.
pub trait Widget: 'static {
    /// Size wanted inside `available`. Must be deterministic.
    fn measure(&self, available: Vec2) -> Vec2;

    /// Observes the rect assigned for this frame. Containers forward to
    /// their children.
    fn layout(&mut self, _rect: Rect) {}

    /// Draw inside `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}

/// A type-erased widget, the child type of containers.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, available: Vec2) -> Vec2 {
        self.0.measure(available)
    }

    #[inline]
    pub fn layout(&mut self, rect: Rect) {
        self.0.layout(rect)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.0.on_event(event, rect)
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
