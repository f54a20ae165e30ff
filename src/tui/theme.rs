//! Color palette

use crate::config::Accent;
use ratatui::style::{Color, Modifier, Style};

const BRAND_BLUE: Color = Color::Rgb(70, 130, 180);
const BRAND_GOLD: Color = Color::Rgb(218, 165, 32);
const BRAND_GREEN: Color = Color::Rgb(60, 179, 113);
const ACCENT_GOLD: Color = Color::Rgb(184, 134, 11);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles, focused field labels
    pub accent: Color,
    /// Step titles and selected markers
    pub highlight: Color,
    /// Key hints in footers
    pub hint: Color,
    pub muted: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_accent(Accent::default())
    }
}

impl Theme {
    pub fn from_accent(accent: Accent) -> Self {
        let (accent, highlight) = match accent {
            Accent::Blue => (BRAND_BLUE, BRAND_GOLD),
            Accent::Gold => (BRAND_GOLD, BRAND_BLUE),
            Accent::Green => (BRAND_GREEN, BRAND_GOLD),
        };
        Self {
            accent,
            highlight,
            hint: ACCENT_GOLD,
            muted: Color::DarkGray,
            error: Color::Red,
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.hint).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_selection() {
        assert_eq!(Theme::default().accent, BRAND_BLUE);
        assert_eq!(Theme::from_accent(Accent::Gold).accent, BRAND_GOLD);
        assert_eq!(Theme::from_accent(Accent::Green).accent, BRAND_GREEN);
    }
}
