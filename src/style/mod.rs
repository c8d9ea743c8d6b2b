//! Styling capability — semantic colors and weights for rendered text.
//!
//! Renderers never emit escape sequences themselves. They ask a `Styler`
//! to wrap a fragment, so the same rendering logic drives a real terminal
//! (`AnsiStyler`) and tests or pipes (`PlainStyler`).

use crossterm::style::{style, Stylize};

use crate::config::ColorMode;

/// Wraps text fragments with a semantic color or weight.
pub trait Styler: Send + Sync {
    fn green(&self, text: &str) -> String;
    fn red(&self, text: &str) -> String;
    fn yellow(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

/// ANSI escape sequences via crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn green(&self, text: &str) -> String {
        style(text).green().to_string()
    }

    fn red(&self, text: &str) -> String {
        style(text).red().to_string()
    }

    fn yellow(&self, text: &str) -> String {
        style(text).yellow().to_string()
    }

    fn bold(&self, text: &str) -> String {
        style(text).bold().to_string()
    }

    fn dim(&self, text: &str) -> String {
        style(text).dim().to_string()
    }
}

/// Passthrough — no styling at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn green(&self, text: &str) -> String {
        text.to_string()
    }

    fn red(&self, text: &str) -> String {
        text.to_string()
    }

    fn yellow(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a styler for the given color mode.
///
/// `is_tty` describes the output stream; it only matters for `ColorMode::Auto`.
pub fn for_mode(mode: ColorMode, is_tty: bool) -> Box<dyn Styler> {
    if mode.enabled(is_tty) {
        Box::new(AnsiStyler)
    } else {
        Box::new(PlainStyler)
    }
}
