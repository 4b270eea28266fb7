//! Output styling: ANSI colour for headings and the usable terminal width.

use terminal_size::{Width, terminal_size};

use crate::core::constants::RULE_WIDTH;

const HEADING: &str = "\x1b[38;2;210;135;10m";
const ERROR: &str = "\x1b[31m";
const EMPHASIS: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Narrowest table we lay out, whatever the terminal says.
pub const MIN_WIDTH: usize = 60;
const FALLBACK_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    /// Columns available for raw-row tables.
    pub width: usize,
}

impl Style {
    /// No escapes, fixed width. Used for tests and piped output.
    #[must_use]
    pub const fn plain(width: usize) -> Self {
        Self {
            color: false,
            width,
        }
    }

    /// Current terminal width (80 fallback).
    #[must_use]
    pub fn detect(no_color: bool) -> Self {
        let Width(w) = terminal_size().map_or(Width(FALLBACK_WIDTH), |(w, _)| w);
        Self {
            color: !no_color,
            width: usize::from(w).max(MIN_WIDTH),
        }
    }

    #[inline]
    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }

    #[must_use]
    pub fn heading(&self, text: &str) -> String {
        self.paint(HEADING, text)
    }
    #[must_use]
    pub fn error(&self, text: &str) -> String {
        self.paint(ERROR, text)
    }
    #[must_use]
    pub fn emphasis(&self, text: &str) -> String {
        self.paint(EMPHASIS, text)
    }

    #[must_use]
    pub fn rule(&self) -> String {
        "-".repeat(RULE_WIDTH)
    }
}
