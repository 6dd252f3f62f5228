use serde::{Deserialize, Serialize};
use wayback_core::{Color, ColorId, ThemeProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
    /// No theme provider at all; labels fall back to the placeholder color.
    Unthemed,
}

struct Palette {
    background: Color,
    text: Color,
}

impl ThemeProvider for Palette {
    fn color(&self, id: ColorId) -> Option<Color> {
        Some(match id {
            ColorId::InfobarBackground => self.background,
            ColorId::InfobarText => self.text,
        })
    }
}

static LIGHT: Palette = Palette {
    background: Color::rgb(0xF1, 0xF3, 0xF4),
    text: Color::rgb(0x3C, 0x40, 0x43),
};

static DARK: Palette = Palette {
    background: Color::rgb(0x35, 0x36, 0x3A),
    text: Color::rgb(0xE8, 0xEA, 0xED),
};

impl ThemeChoice {
    pub fn provider(self) -> Option<&'static dyn ThemeProvider> {
        match self {
            ThemeChoice::Light => Some(&LIGHT),
            ThemeChoice::Dark => Some(&DARK),
            ThemeChoice::Unthemed => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Unthemed,
            ThemeChoice::Unthemed => ThemeChoice::Light,
        }
    }
}
