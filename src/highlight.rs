use inksac::prelude::*;
use std::io::IsTerminal;

/// Styles console messages when the terminal supports color.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Highlighter {
    /// Color is used only if `enabled` and stderr is a color-capable terminal.
    pub fn new(enabled: bool) -> Self {
        if !enabled || !std::io::stderr().is_terminal() {
            return Self::plain();
        }

        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if self.is_plain() {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }

    pub fn highlight_notice(&self, notice: &str) -> String {
        if self.is_plain() {
            return notice.to_string();
        }

        let notice_style = Style::builder()
            .foreground(Color::Yellow)
            .build();

        notice.style(notice_style).to_string()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passes_text_through() {
        let highlighter = Highlighter::plain();
        assert!(highlighter.is_plain());
        assert_eq!(highlighter.highlight_error("cat: boom"), "cat: boom");
        assert_eq!(highlighter.highlight_notice("hint"), "hint");
    }

    #[test]
    fn test_disabled_is_plain() {
        assert!(Highlighter::new(false).is_plain());
    }
}
