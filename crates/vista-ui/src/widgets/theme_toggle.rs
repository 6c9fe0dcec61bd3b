use vista_engine::coords::{Rect, Vec2};
use vista_engine::theme::{ThemeContext, ThemeMode, ThemeSnapshot};

use crate::event::{EventResult, Key, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

use super::virtual_list::{TEXT_INSET, TEXT_SIZE};

/// A button that steps the theme mode through its cycle.
///
/// Holds a [`ThemeContext`] clone; the label is read from the context on
/// every paint, so it always shows the current mode. A click cycles and
/// focuses the button; Enter and Space cycle again only while it keeps focus.
pub struct ThemeToggle {
    theme: ThemeContext,
    height: f32,
    focused: bool,
    on_change: Option<Box<dyn FnMut(ThemeSnapshot)>>,
}

impl ThemeToggle {
    pub fn new(theme: ThemeContext) -> Self {
        Self { theme, height: 44.0, focused: false, on_change: None }
    }

    pub fn height(mut self, v: f32) -> Self {
        self.height = v;
        self
    }

    pub fn focused(mut self, v: bool) -> Self {
        self.focused = v;
        self
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn on_change(mut self, f: impl FnMut(ThemeSnapshot) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn label(snapshot: ThemeSnapshot) -> String {
        let mode = match snapshot.mode {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        };
        format!("Theme: {mode} ({})", snapshot.resolved)
    }

    fn activate(&mut self) {
        let snapshot = self.theme.toggle();
        log::debug!("theme toggled to {} ({})", snapshot.mode, snapshot.resolved);
        if let Some(f) = &mut self.on_change {
            f(snapshot);
        }
    }
}

impl Widget for ThemeToggle {
    fn measure(&self, available: Vec2) -> Vec2 {
        Vec2::new(available.x, self.height.min(available.y))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let palette = painter.palette;
        let fill = if painter.is_hovered(rect) { palette.row_selected } else { palette.accent };
        painter.fill_rect(rect, fill);
        let text_y = rect.origin.y + (rect.size.y - TEXT_SIZE) * 0.5;
        let origin = Vec2::new(rect.origin.x + TEXT_INSET, text_y);
        painter.text(Self::label(self.theme.snapshot()), origin, TEXT_SIZE, palette.background);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { pos } => {
                self.focused = rect.contains(*pos);
                if !self.focused {
                    return EventResult::Ignored;
                }
                self.activate();
                EventResult::Consumed
            }
            UiEvent::KeyPress { key: Key::Enter | Key::Space } if self.focused => {
                self.activate();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use vista_engine::paint::Color;
    use vista_engine::signal::{FixedPreference, MediaQuery};
    use vista_engine::storage::MemoryStore;
    use vista_engine::theme::{DocumentSurface, ResolvedTheme, DEFAULT_STORAGE_KEY};
    use vista_engine::windowing::Viewport;

    use super::*;
    use crate::draw::{DrawCmd, DrawList};
    use crate::palette::Palette;
    use crate::scene::{UiInput, UiScene};
    use crate::widget::Element;
    use crate::widgets::column::Column;
    use crate::widgets::virtual_list::VirtualList;

    const RECT: Rect = Rect::new(0.0, 0.0, 200.0, 44.0);

    fn context(prefers_dark: Option<bool>) -> (ThemeContext, DocumentSurface) {
        let surface = DocumentSurface::new(Color::rgb(255, 255, 255), Color::rgb(11, 17, 32));
        let (ctx, _sub) = ThemeContext::load(
            Box::new(MemoryStore::new()),
            Box::new(surface.clone()),
            &FixedPreference(prefers_dark),
            DEFAULT_STORAGE_KEY,
        );
        (ctx, surface)
    }

    fn label_of(t: &ThemeToggle) -> String {
        let mut dl = DrawList::new();
        let mut p = Painter::new(&mut dl, Palette::DARK, Vec2::new(-1.0, -1.0));
        t.paint(&mut p, RECT);
        dl.texts().next().map(str::to_string).unwrap_or_default()
    }

    // ── cycling ────────────────────────────────────────────────────────────

    #[test]
    fn clicks_walk_the_cycle() {
        let (ctx, surface) = context(Some(false));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let mut t =
            ThemeToggle::new(ctx.clone()).on_change(move |snap| s.borrow_mut().push(snap.mode));

        assert_eq!(label_of(&t), "Theme: Dark (dark)");
        let click = UiEvent::Click { pos: Vec2::new(10.0, 10.0) };
        for _ in 0..3 {
            assert_eq!(t.on_event(&click, RECT), EventResult::Consumed);
        }
        assert_eq!(*seen.borrow(), [ThemeMode::Light, ThemeMode::System, ThemeMode::Dark]);
        assert_eq!(ctx.mode(), ThemeMode::Dark);
        assert!(surface.has_class("dark"));
    }

    #[test]
    fn system_label_tracks_the_platform() {
        let surface = DocumentSurface::new(Color::rgb(255, 255, 255), Color::rgb(0, 0, 0));
        let query = MediaQuery::new(Some(false));
        let store = Box::new(MemoryStore::new());
        let (ctx, _sub) = ThemeContext::load(store, Box::new(surface), &query, DEFAULT_STORAGE_KEY);
        ctx.set_mode(ThemeMode::System);
        let t = ThemeToggle::new(ctx);
        assert_eq!(label_of(&t), "Theme: System (light)");

        query.set_prefers_dark(Some(true));
        assert_eq!(label_of(&t), "Theme: System (dark)");
    }

    #[test]
    fn clicks_outside_are_ignored() {
        let (ctx, _) = context(None);
        let mut t = ThemeToggle::new(ctx.clone());
        let r = t.on_event(&UiEvent::Click { pos: Vec2::new(10.0, 60.0) }, RECT);
        assert_eq!(r, EventResult::Ignored);
        assert_eq!(ctx.mode(), ThemeMode::Dark);
    }

    #[test]
    fn keys_activate_only_while_focused() {
        let (ctx, _) = context(None);
        let mut t = ThemeToggle::new(ctx.clone());
        let enter = UiEvent::KeyPress { key: Key::Enter };
        assert_eq!(t.on_event(&enter, RECT), EventResult::Ignored);
        assert_eq!(ctx.mode(), ThemeMode::Dark);

        t.on_event(&UiEvent::Click { pos: Vec2::new(10.0, 10.0) }, RECT);
        assert!(t.is_focused());
        assert_eq!(ctx.mode(), ThemeMode::Light);
        assert_eq!(t.on_event(&enter, RECT), EventResult::Consumed);
        assert_eq!(ctx.mode(), ThemeMode::System);

        t.on_event(&UiEvent::Click { pos: Vec2::new(10.0, 90.0) }, RECT);
        assert!(!t.is_focused());
        let space = UiEvent::KeyPress { key: Key::Space };
        assert_eq!(t.on_event(&space, RECT), EventResult::Ignored);
        assert_eq!(ctx.mode(), ThemeMode::System);
    }

    // ── scene ──────────────────────────────────────────────────────────────

    #[test]
    fn toggled_frame_paints_in_new_palette() {
        let (ctx, _) = context(Some(true));
        let mut root = Element::new(ThemeToggle::new(ctx.clone()));
        let mut scene = UiScene::new().theme(ctx.clone());
        let input =
            UiInput { mouse_pos: Vec2::new(5.0, 5.0), mouse_clicked: true, ..UiInput::default() };

        let dl = scene.frame(&mut root, Vec2::new(200.0, 300.0), &input);
        assert_eq!(ctx.resolved(), ResolvedTheme::Light);
        let background = Rect::new(0.0, 0.0, 200.0, 300.0);
        assert_eq!(
            dl.items()[0].cmd,
            DrawCmd::Rect { rect: background, color: Palette::LIGHT.background }
        );
        assert_eq!(dl.texts().collect::<Vec<_>>(), ["Theme: Light (light)"]);
    }

    #[test]
    fn space_over_a_sibling_list_leaves_theme_alone() {
        let (ctx, _) = context(Some(false));
        let names: Vec<String> = (0..50).map(|i| format!("Hall {i}")).collect();
        let list = VirtualList::new(names, Viewport::new(70.0, 400.0), |s: &String| s.clone());
        let mut root: Element =
            Column::new().child(ThemeToggle::new(ctx.clone())).child(list).into();
        let mut scene = UiScene::new().theme(ctx.clone());
        let size = Vec2::new(200.0, 444.0);

        let space = UiInput {
            mouse_pos: Vec2::new(20.0, 300.0),
            keys_pressed: vec![Key::Space],
            ..UiInput::default()
        };
        scene.frame(&mut root, size, &space);
        assert_eq!(ctx.mode(), ThemeMode::Dark);

        // Focus moves to the toggle with a click, then away to the list.
        let click = |y| UiInput {
            mouse_pos: Vec2::new(20.0, y),
            mouse_clicked: true,
            ..UiInput::default()
        };
        scene.frame(&mut root, size, &click(10.0));
        assert_eq!(ctx.mode(), ThemeMode::Light);
        scene.frame(&mut root, size, &space);
        assert_eq!(ctx.mode(), ThemeMode::System);
        scene.frame(&mut root, size, &click(300.0));
        scene.frame(&mut root, size, &space);
        assert_eq!(ctx.mode(), ThemeMode::System);
    }
}
