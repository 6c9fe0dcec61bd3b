use vista_engine::coords::Vec2;

/// Keys the widgets react to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
    Enter,
    Space,
}

/// Input events routed through the widget tree.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Primary button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Wheel / trackpad scroll with the cursor at `pos`.
    ///
    /// `delta` > 0 reveals content below.
    ScrollWheel { pos: Vec2, delta: f32 },
    /// Named key pressed. Only the focused widget acts on it.
    KeyPress { key: Key },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; stop routing.
    Consumed,
    /// Not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
