use vista_engine::windowing::Viewport;

use crate::event::Key;

/// Scroll distance a navigation key asks for, or `None` for keys that do
/// not scroll. Home and End are infinite and rely on the scroll clamp.
pub(crate) fn key_scroll_delta(key: Key, viewport: &Viewport) -> Option<f32> {
    let row = viewport.item_height();
    let page = viewport.container_height() * 0.9;
    match key {
        Key::ArrowDown => Some(row),
        Key::ArrowUp => Some(-row),
        Key::PageDown => Some(page),
        Key::PageUp => Some(-page),
        Key::Home => Some(f32::NEG_INFINITY),
        Key::End => Some(f32::INFINITY),
        Key::Enter | Key::Space => None,
    }
}
