//! Environment metrics behind the preferred cell size.
//!
//! The hint prefers font metrics when the platform exposes them and falls
//! back to screen height otherwise. It is injectable so the sizing rule can
//! be tested without a live terminal.

/// Source of platform display metrics.
pub trait EnvMetrics {
    /// Point size of the default label font, if the platform has one.
    fn label_font_size(&self) -> Option<u16>;

    /// Screen height in pixels, used when no font metric is available.
    fn screen_height(&self) -> u16;
}

/// Metrics read from the hosting terminal.
///
/// Terminals report no font metrics, so this always takes the screen-height
/// strategy. Pixel height comes from the terminal window when the backend
/// reports it, otherwise it is estimated from the row count.
pub struct TerminalMetrics;

impl EnvMetrics for TerminalMetrics {
    fn label_font_size(&self) -> Option<u16> {
        None
    }

    fn screen_height(&self) -> u16 {
        match crossterm::terminal::window_size() {
            Ok(ws) if ws.height > 0 => ws.height,
            _ => match crossterm::terminal::size() {
                Ok((_, rows)) => rows.saturating_mul(16),
                Err(_) => 480,
            },
        }
    }
}

/// The display-size hint for one board cell, in pixels.
///
/// 2.5 times the label font size when a font metric exists, otherwise a
/// thirtieth of the screen height. The result is forced odd so a crosshair
/// or markup has a well-defined center pixel.
pub fn preferred_field_size(metrics: &dyn EnvMetrics) -> u16 {
    let mut size = match metrics.label_font_size() {
        Some(font_size) => (f64::from(font_size) * 2.5) as u16,
        None => metrics.screen_height() / 30,
    };
    if size % 2 == 0 {
        size += 1;
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeMetrics {
        font: Option<u16>,
        screen: u16,
    }

    impl EnvMetrics for FakeMetrics {
        fn label_font_size(&self) -> Option<u16> {
            self.font
        }

        fn screen_height(&self) -> u16 {
            self.screen
        }
    }

    #[test]
    fn test_font_strategy() {
        let metrics = FakeMetrics {
            font: Some(12),
            screen: 900,
        };
        // 12 * 2.5 = 30, forced odd.
        assert_eq!(preferred_field_size(&metrics), 31);
    }

    #[test]
    fn test_screen_fallback() {
        let metrics = FakeMetrics {
            font: None,
            screen: 900,
        };
        // 900 / 30 = 30, forced odd.
        assert_eq!(preferred_field_size(&metrics), 31);
    }

    #[test]
    fn test_odd_result_kept() {
        let metrics = FakeMetrics {
            font: Some(10),
            screen: 0,
        };
        // 10 * 2.5 = 25, already odd.
        assert_eq!(preferred_field_size(&metrics), 25);
    }
}
