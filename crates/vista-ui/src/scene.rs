use vista_engine::coords::{Rect, Vec2};
use vista_engine::theme::{ResolvedTheme, ThemeContext};

use crate::draw::DrawList;
use crate::event::{Key, UiEvent};
use crate::painter::Painter;
use crate::palette::Palette;
use crate::widget::Element;

/// Input gathered by the platform for one frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    pub mouse_pos: Vec2,
    /// True for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
    pub keys_pressed: Vec<Key>,
    /// Accumulated wheel delta this frame (positive = scroll down).
    pub scroll_delta: f32,
}

/// Drives frames of a widget tree and owns the draw list they produce.
///
/// The palette follows the attached [`ThemeContext`]; without one the
/// scene paints dark, matching the resolver's default.
#[derive(Default)]
pub struct UiScene {
    pub draw_list: DrawList,
    theme: Option<ThemeContext>,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, ctx: ThemeContext) -> Self {
        self.theme = Some(ctx);
        self
    }

    /// Lays out `root` over the whole viewport, routes this frame's input,
    /// then paints.
    ///
    /// Input is routed before painting so a click that toggles the theme is
    /// painted in the new palette on the same frame.
    pub fn frame(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> &DrawList {
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        root.layout(rect);

        for event in Self::events(input) {
            root.on_event(&event, rect);
        }

        let resolved = self
            .theme
            .as_ref()
            .map_or(ResolvedTheme::Dark, ThemeContext::resolved);
        let palette = Palette::for_theme(resolved);

        self.draw_list.clear();
        let mut painter = Painter::new(&mut self.draw_list, palette, input.mouse_pos);
        painter.fill_rect(rect, palette.background);
        root.paint(&mut painter, rect);

        &self.draw_list
    }

    fn events(input: &UiInput) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if input.scroll_delta != 0.0 {
            events.push(UiEvent::ScrollWheel { pos: input.mouse_pos, delta: input.scroll_delta });
        }
        events.extend(input.keys_pressed.iter().map(|&key| UiEvent::KeyPress { key }));
        if input.mouse_clicked {
            events.push(UiEvent::Click { pos: input.mouse_pos });
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCmd;
    use crate::widget::Widget;

    struct Probe;

    impl Widget for Probe {
        fn measure(&self, available: Vec2) -> Vec2 {
            available
        }

        fn paint(&self, painter: &mut Painter, rect: Rect) {
            painter.text("probe", rect.origin, 14.0, painter.palette.text);
        }
    }

    #[test]
    fn frame_paints_background_then_root() {
        let mut scene = UiScene::new();
        let mut root = Element::new(Probe);
        let dl = scene.frame(&mut root, Vec2::new(320.0, 200.0), &UiInput::default());

        assert_eq!(dl.items().len(), 2);
        let background = Rect::new(0.0, 0.0, 320.0, 200.0);
        assert_eq!(
            dl.items()[0].cmd,
            DrawCmd::Rect { rect: background, color: Palette::DARK.background }
        );
        assert_eq!(dl.texts().collect::<Vec<_>>(), ["probe"]);
    }

    #[test]
    fn frames_do_not_accumulate() {
        let mut scene = UiScene::new();
        let mut root = Element::new(Probe);
        scene.frame(&mut root, Vec2::new(10.0, 10.0), &UiInput::default());
        let dl = scene.frame(&mut root, Vec2::new(10.0, 10.0), &UiInput::default());
        assert_eq!(dl.items().len(), 2);
    }

    #[test]
    fn events_are_ordered_scroll_keys_click() {
        let input = UiInput {
            mouse_pos: Vec2::new(1.0, 2.0),
            mouse_clicked: true,
            keys_pressed: vec![Key::Home],
            scroll_delta: 1.5,
        };
        let events = UiScene::events(&input);
        assert!(matches!(events[0], UiEvent::ScrollWheel { delta, .. } if delta == 1.5));
        assert!(matches!(events[1], UiEvent::KeyPress { key: Key::Home }));
        assert!(matches!(events[2], UiEvent::Click { .. }));
    }
}
