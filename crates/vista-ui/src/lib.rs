//! Vista UI: a headless retained widget tree over `vista-engine`.
//!
//! Widgets lay themselves out, react to [`UiEvent`](event::UiEvent)s and
//! paint into a [`DrawList`](draw::DrawList) that a platform renderer
//! consumes. Colours come from the [`Palette`](palette::Palette) of the
//! current resolved theme, read once per frame.
//!
//! ```rust,ignore
//! use vista_ui::prelude::*;
//!
//! let mut root: Element = Column::new()
//!     .child(ThemeToggle::new(theme.clone()))
//!     .child(VirtualList::new(buildings, viewport, |b: &Building| b.name.clone()))
//!     .into();
//!
//! let mut scene = UiScene::new().theme(theme);
//! let draw_list = scene.frame(&mut root, Vec2::new(360.0, 640.0), &input);
//! ```

pub mod draw;
pub mod event;
pub mod painter;
pub mod palette;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build a screen.
pub mod prelude {
    pub use crate::draw::{DrawCmd, DrawItem, DrawList};
    pub use crate::event::{EventResult, Key, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::palette::Palette;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        column::Column,
        grouped_list::GroupedList,
        theme_toggle::ThemeToggle,
        virtual_list::VirtualList,
    };

    pub use vista_engine::coords::{Rect, Vec2};
    pub use vista_engine::paint::Color;
    pub use vista_engine::theme::{ResolvedTheme, ThemeContext, ThemeMode};
    pub use vista_engine::windowing::Viewport;
}
