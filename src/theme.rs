//! Light and dark palettes. The shell owns the flag; only rendering reads it.

use ratzilla::ratatui::style::Color;

/// Colors used by the renderer for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    /// App bar background.
    pub primary: Color,
    pub on_primary: Color,
    /// Transaction panel background.
    pub secondary: Color,
    pub accent: Color,
    pub gauge: Color,
    pub highlight: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(0xFF, 0xF8, 0xF1),
    text: Color::Rgb(0x1F, 0x1B, 0x16),
    muted: Color::Rgb(0x6E, 0x64, 0x5A),
    primary: Color::Rgb(0x6D, 0x4C, 0x41),
    on_primary: Color::Rgb(0xFF, 0xFF, 0xFF),
    secondary: Color::Rgb(0xF2, 0xDF, 0xD1),
    accent: Color::Rgb(0xC2, 0x18, 0x5B),
    gauge: Color::Rgb(0x8D, 0x6E, 0x63),
    highlight: Color::Rgb(0xE6, 0x51, 0x00),
};

const DARK: Palette = Palette {
    background: Color::Rgb(0x1A, 0x12, 0x0E),
    text: Color::Rgb(0xEE, 0xE0, 0xD8),
    muted: Color::Rgb(0xA0, 0x92, 0x88),
    primary: Color::Rgb(0x3E, 0x27, 0x23),
    on_primary: Color::Rgb(0xFF, 0xDB, 0xCB),
    secondary: Color::Rgb(0x4E, 0x34, 0x2E),
    accent: Color::Rgb(0xF4, 0x8F, 0xB1),
    gauge: Color::Rgb(0xFF, 0xB6, 0x8F),
    highlight: Color::Rgb(0xFF, 0xCC, 0x80),
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Theme {
    pub dark: bool,
}

impl Theme {
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    pub fn palette(&self) -> &'static Palette {
        if self.dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// Label for the toggle button: names the theme it switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.dark {
            "Light"
        } else {
            "Dark"
        }
    }
}
