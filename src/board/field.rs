//! A single board cell's display state.
//!
//! A field knows nothing about the game; it holds exactly what the view has
//! pushed into it and can describe its own terminal appearance. The handicap
//! flag is fixed at construction, everything else is set through the view.

use ratatui::style::{Color as TermColor, Modifier, Style};

use crate::board::theme::BoardTheme;
use crate::Color;

/// Display state for one point on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    color: Color,
    background: Option<TermColor>,
    influence: Option<f64>,
    label: String,
    markup: bool,
    crosshair: bool,
    handicap: bool,
}

impl Field {
    pub(crate) fn new(handicap: bool) -> Self {
        Field {
            color: Color::Empty,
            background: None,
            influence: None,
            label: String::new(),
            markup: false,
            crosshair: false,
            handicap,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn background(&self) -> Option<TermColor> {
        self.background
    }

    pub(crate) fn set_background(&mut self, background: Option<TermColor>) {
        self.background = background;
    }

    pub fn influence(&self) -> Option<f64> {
        self.influence
    }

    pub(crate) fn set_influence(&mut self, value: f64) {
        self.influence = Some(value);
    }

    pub(crate) fn clear_influence(&mut self) {
        self.influence = None;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn markup(&self) -> bool {
        self.markup
    }

    pub(crate) fn set_markup(&mut self, markup: bool) {
        self.markup = markup;
    }

    pub fn crosshair(&self) -> bool {
        self.crosshair
    }

    pub(crate) fn set_crosshair(&mut self, crosshair: bool) {
        self.crosshair = crosshair;
    }

    pub fn is_handicap_point(&self) -> bool {
        self.handicap
    }

    /// Whether every caller-settable attribute is at its default.
    pub fn is_cleared(&self) -> bool {
        self.background.is_none()
            && self.influence.is_none()
            && self.label.is_empty()
            && !self.markup
            && !self.crosshair
    }

    /// The two-character symbol and style this cell renders as.
    ///
    /// A text label takes precedence over the stone symbol. Markup is shown
    /// underlined, a crosshair in reverse video. An explicit background tint
    /// wins over the influence shading.
    pub fn appearance(&self, theme: &BoardTheme) -> (String, Style) {
        let (symbol, mut style) = if !self.label.is_empty() {
            let mut s: String = self.label.chars().take(2).collect();
            while s.chars().count() < 2 {
                s.push(' ');
            }
            (s, theme.overlay_text_style())
        } else {
            match self.color {
                Color::Black => ("●●".to_string(), theme.black_stone_style()),
                Color::White => ("○○".to_string(), theme.white_stone_style()),
                Color::Empty => {
                    let symbol = if self.handicap { "++" } else { "··" };
                    (symbol.to_string(), theme.empty_point_style())
                }
            }
        };
        if let Some(bg) = self.background {
            style = style.bg(bg);
        } else if let Some(value) = self.influence {
            if let Some(bg) = theme.influence_bg(value) {
                style = style.bg(bg);
            }
        }
        if self.markup {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if self.crosshair {
            style = style.add_modifier(Modifier::REVERSED);
        }
        (symbol, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_cleared() {
        let field = Field::new(true);
        assert!(field.is_cleared());
        assert!(field.is_handicap_point());
        assert_eq!(field.color(), Color::Empty);
    }

    #[test]
    fn test_setters() {
        let mut field = Field::new(false);
        field.set_color(Color::Black);
        field.set_influence(0.5);
        field.set_markup(true);
        field.set_label("a");
        field.set_crosshair(true);
        assert!(!field.is_cleared());
        assert_eq!(field.color(), Color::Black);
        assert_eq!(field.influence(), Some(0.5));
        assert!(field.markup());
        assert_eq!(field.label(), "a");
        assert!(field.crosshair());

        field.clear_influence();
        assert_eq!(field.influence(), None);
    }

    #[test]
    fn test_appearance_symbol_width() {
        let theme = BoardTheme::default();
        let mut field = Field::new(false);
        for label in ["", "a", "ab", "abc"] {
            field.set_label(label);
            let (symbol, _) = field.appearance(&theme);
            assert_eq!(symbol.chars().count(), 2, "label {label:?}");
        }
    }

    #[test]
    fn test_crosshair_reverses_video() {
        let theme = BoardTheme::default();
        let mut field = Field::new(false);
        field.set_color(Color::White);
        let (_, plain) = field.appearance(&theme);
        field.set_crosshair(true);
        let (_, crossed) = field.appearance(&theme);
        assert!(!plain.add_modifier.contains(Modifier::REVERSED));
        assert!(crossed.add_modifier.contains(Modifier::REVERSED));
    }
}
