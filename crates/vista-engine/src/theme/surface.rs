use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::paint::Color;

use super::ResolvedTheme;

/// Where a resolved theme is applied.
///
/// Implementations must not call back into the resolver that drives them.
pub trait ThemeSurface {
    fn apply(&mut self, theme: ResolvedTheme);
}

impl<F: FnMut(ResolvedTheme)> ThemeSurface for F {
    fn apply(&mut self, theme: ResolvedTheme) {
        (self)(theme)
    }
}

#[derive(Debug, Default)]
struct Document {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    meta: BTreeMap<String, String>,
}

/// Headless model of a document root: its class list, root attributes and
/// `<meta>` entries. Clones share the same document.
#[derive(Debug, Clone)]
pub struct DocumentSurface {
    doc: Rc<RefCell<Document>>,
    light_meta: Color,
    dark_meta: Color,
}

impl DocumentSurface {
    pub const THEME_COLOR: &'static str = "theme-color";
    pub const DATA_THEME: &'static str = "data-theme";
    pub const COLOR_SCHEME: &'static str = "color-scheme";

    /// `light_meta` / `dark_meta` become the `theme-color` meta value.
    pub fn new(light_meta: Color, dark_meta: Color) -> Self {
        Self { doc: Rc::default(), light_meta, dark_meta }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.doc.borrow().classes.contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.doc.borrow().classes.iter().cloned().collect()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.doc.borrow().attributes.get(name).cloned()
    }

    pub fn meta(&self, name: &str) -> Option<String> {
        self.doc.borrow().meta.get(name).cloned()
    }

    /// Adds an unrelated root class, as page code might.
    pub fn add_class(&self, class: impl Into<String>) {
        self.doc.borrow_mut().classes.insert(class.into());
    }
}

impl ThemeSurface for DocumentSurface {
    fn apply(&mut self, theme: ResolvedTheme) {
        let meta = if theme.is_dark() { self.dark_meta } else { self.light_meta };
        let mut doc = self.doc.borrow_mut();

        for t in [ResolvedTheme::Light, ResolvedTheme::Dark] {
            doc.classes.remove(t.as_str());
        }
        doc.classes.insert(theme.as_str().to_string());
        doc.attributes.insert(Self::DATA_THEME.into(), theme.as_str().into());
        doc.attributes.insert(Self::COLOR_SCHEME.into(), theme.as_str().into());
        doc.meta.insert(Self::THEME_COLOR.into(), meta.to_hex());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> DocumentSurface {
        DocumentSurface::new(Color::rgb(255, 255, 255), Color::rgb(0x0b, 0x11, 0x20))
    }

    #[test]
    fn apply_swaps_marker_class_and_meta() {
        let mut s = surface();
        s.add_class("tour");

        s.apply(ResolvedTheme::Dark);
        assert!(s.has_class("dark"));
        assert_eq!(s.meta("theme-color").as_deref(), Some("#0b1120"));

        s.apply(ResolvedTheme::Light);
        assert_eq!(s.classes(), ["light", "tour"]);
        assert_eq!(s.attribute("data-theme").as_deref(), Some("light"));
        assert_eq!(s.attribute("color-scheme").as_deref(), Some("light"));
        assert_eq!(s.meta("theme-color").as_deref(), Some("#ffffff"));
    }

    #[test]
    fn closures_are_surfaces() {
        let mut seen = Vec::new();
        {
            let mut f = |t: ResolvedTheme| seen.push(t);
            ThemeSurface::apply(&mut f, ResolvedTheme::Light);
        }
        assert_eq!(seen, [ResolvedTheme::Light]);
    }
}
