use crossterm::style::{Color, Stylize, style};

use crate::diff::LineKind;
use crate::settings::AppTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub context: (u8, u8, u8),
    pub added: (u8, u8, u8),
    pub removed: (u8, u8, u8),
    colored: bool,
}

pub fn palette_for(theme: AppTheme) -> Palette {
    let (context, added, removed) = match theme {
        AppTheme::Ocean => ((136, 144, 160), (136, 216, 152), (232, 130, 140)),
        AppTheme::Eighties => ((152, 143, 167), (152, 218, 168), (236, 146, 162)),
        AppTheme::Solarized => ((147, 161, 161), (133, 199, 167), (220, 144, 138)),
        AppTheme::Monokai => ((152, 152, 141), (166, 226, 146), (249, 122, 132)),
    };

    Palette {
        context,
        added,
        removed,
        colored: true,
    }
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..palette_for(AppTheme::Ocean)
        }
    }

    pub fn paint(&self, kind: LineKind, text: &str) -> String {
        if !self.colored || text.is_empty() {
            return text.to_owned();
        }
        style(text).with(self.color_for(kind)).to_string()
    }

    pub fn invert(&self, kind: LineKind, text: &str) -> String {
        if !self.colored || text.is_empty() {
            return text.to_owned();
        }
        style(text).with(self.color_for(kind)).reverse().to_string()
    }

    fn color_for(&self, kind: LineKind) -> Color {
        let (r, g, b) = match kind {
            LineKind::Added => self.added,
            LineKind::Removed => self.removed,
            LineKind::Context => self.context,
        };
        Color::Rgb { r, g, b }
    }
}
