use vista_engine::paint::Color;
use vista_engine::theme::ResolvedTheme;

/// Colours for one resolved theme.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub row: Color,
    pub row_alt: Color,
    pub row_selected: Color,
    pub header: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
    pub scrollbar_track: Color,
    pub scrollbar_thumb: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::rgb(0xff, 0xff, 0xff),
        row: Color::rgb(0xff, 0xff, 0xff),
        row_alt: Color::rgb(0xf4, 0xf6, 0xfa),
        row_selected: Color::rgb(0xdb, 0xe8, 0xff),
        header: Color::rgb(0xe2, 0xe8, 0xf0),
        text: Color::rgb(0x0f, 0x17, 0x2a),
        muted_text: Color::rgb(0x64, 0x74, 0x8b),
        accent: Color::rgb(0x25, 0x63, 0xeb),
        scrollbar_track: Color::rgba(0x00, 0x00, 0x00, 0x14),
        scrollbar_thumb: Color::rgba(0x00, 0x00, 0x00, 0x66),
    };

    pub const DARK: Palette = Palette {
        background: Color::rgb(0x0b, 0x11, 0x20),
        row: Color::rgb(0x11, 0x18, 0x27),
        row_alt: Color::rgb(0x16, 0x1e, 0x2e),
        row_selected: Color::rgb(0x1e, 0x3a, 0x8a),
        header: Color::rgb(0x1f, 0x29, 0x37),
        text: Color::rgb(0xe5, 0xe7, 0xeb),
        muted_text: Color::rgb(0x9c, 0xa3, 0xaf),
        accent: Color::rgb(0x60, 0xa5, 0xfa),
        scrollbar_track: Color::rgba(0xff, 0xff, 0xff, 0x14),
        scrollbar_thumb: Color::rgba(0xff, 0xff, 0xff, 0x66),
    };

    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::LIGHT,
            ResolvedTheme::Dark => Self::DARK,
        }
    }
}
