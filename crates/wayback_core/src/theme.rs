use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Shown when no theme is available, so a missing theme is obvious on screen.
pub const PLACEHOLDER_COLOR: Color = Color::rgb(0xFF, 0x00, 0x00);

/// Background behind the archive logo. Not themed.
pub const BRAND_COLOR: Color = Color::rgb(0xFF, 0x76, 0x54);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    InfobarBackground,
    InfobarText,
}

pub trait ThemeProvider {
    fn color(&self, id: ColorId) -> Option<Color>;
}

/// Colors for one render pass. Build it again whenever the theme changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfobarColors {
    pub label_background: Color,
    pub label_text: Color,
    pub separator: Color,
}

impl InfobarColors {
    pub fn resolve(theme: Option<&dyn ThemeProvider>) -> Self {
        let lookup = |id| {
            theme
                .and_then(|provider| provider.color(id))
                .unwrap_or(PLACEHOLDER_COLOR)
        };
        let text = lookup(ColorId::InfobarText);
        Self {
            label_background: lookup(ColorId::InfobarBackground),
            label_text: text,
            separator: text,
        }
    }
}
