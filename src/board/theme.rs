//! Visual theme for the board: stone and label styles, the influence ramp,
//! and the closed set of overlay color tokens.

use ratatui::style::{Color as TermColor, Modifier, Style};

/// Centralized styling so every cell renders consistently.
pub struct BoardTheme {
    black_stone: TermColor,
    white_stone: TermColor,
    empty_point: TermColor,
    label_color: TermColor,
    overlay_text: TermColor,
}

impl Default for BoardTheme {
    fn default() -> Self {
        Self {
            black_stone: TermColor::Black,
            white_stone: TermColor::White,
            empty_point: TermColor::DarkGray,
            label_color: TermColor::White,
            overlay_text: TermColor::Cyan,
        }
    }
}

impl BoardTheme {
    /// Style for a black stone.
    pub fn black_stone_style(&self) -> Style {
        Style::default()
            .fg(self.black_stone)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a white stone.
    pub fn white_stone_style(&self) -> Style {
        Style::default()
            .fg(self.white_stone)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an empty point.
    pub fn empty_point_style(&self) -> Style {
        Style::default().fg(self.empty_point)
    }

    /// Style for the coordinate labels around the board.
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.label_color)
    }

    /// Style for caller-provided cell text.
    pub fn overlay_text_style(&self) -> Style {
        Style::default().fg(self.overlay_text)
    }

    /// Resolve an overlay color token to a terminal background tint.
    ///
    /// The token set is closed; anything not in it means "no background" and
    /// is deliberately not an error.
    pub fn overlay_color(&self, token: &str) -> Option<TermColor> {
        match token {
            "blue" => Some(TermColor::Blue),
            "cyan" => Some(TermColor::Cyan),
            "green" => Some(TermColor::Green),
            "gray" => Some(TermColor::Gray),
            "magenta" => Some(TermColor::Magenta),
            "pink" => Some(TermColor::LightMagenta),
            "red" => Some(TermColor::Red),
            "yellow" => Some(TermColor::Yellow),
            _ => None,
        }
    }

    /// Background shade for an influence value in `[-1.0, 1.0]`.
    ///
    /// Positive values (black influence) darken the cell, negative values
    /// (white influence) lighten it. Zero means no shading.
    pub fn influence_bg(&self, value: f64) -> Option<TermColor> {
        if value == 0.0 {
            return None;
        }
        let strength = value.abs().min(1.0);
        if value > 0.0 {
            let level = (110.0 - strength * 80.0) as u8;
            Some(TermColor::Rgb(level, level, level))
        } else {
            let level = (150.0 + strength * 100.0) as u8;
            Some(TermColor::Rgb(level, level, level))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_tokens() {
        let theme = BoardTheme::default();
        for token in [
            "blue", "cyan", "green", "gray", "magenta", "pink", "red", "yellow",
        ] {
            assert!(theme.overlay_color(token).is_some(), "token {token}");
        }
        assert_eq!(theme.overlay_color("red"), Some(TermColor::Red));
    }

    #[test]
    fn test_unrecognized_token_is_no_background() {
        let theme = BoardTheme::default();
        assert_eq!(theme.overlay_color("purple"), None);
        assert_eq!(theme.overlay_color(""), None);
        assert_eq!(theme.overlay_color("RED"), None);
    }

    #[test]
    fn test_influence_shading() {
        let theme = BoardTheme::default();
        assert_eq!(theme.influence_bg(0.0), None);
        assert!(theme.influence_bg(1.0).is_some());
        assert!(theme.influence_bg(-1.0).is_some());
        assert_ne!(theme.influence_bg(1.0), theme.influence_bg(-1.0));
    }
}
