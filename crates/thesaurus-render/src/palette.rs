//! Terminal styles for rendered output.
//!
//! Every style goes through [`Palette::paint`], so a disabled palette yields
//! plain text with no escape sequences at all.

use owo_colors::{OwoColorize, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Palette that never emits markup
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, s: &str, style: Style) -> String {
        if self.enabled {
            s.style(style).to_string()
        } else {
            s.to_string()
        }
    }

    /// Lexical category headers (yellow)
    pub fn category(&self, s: &str) -> String {
        self.paint(s, Style::new().yellow())
    }

    /// Numbered sense headings (bold bright magenta)
    pub fn heading(&self, s: &str) -> String {
        self.paint(s, Style::new().bright_magenta().bold())
    }

    /// First synonym or antonym of a line (bold blue)
    pub fn emphasis(&self, s: &str) -> String {
        self.paint(s, Style::new().blue().bold())
    }

    /// Region, domain and register tags (green)
    pub fn tags(&self, s: &str) -> String {
        self.paint(s, Style::new().green())
    }
}
