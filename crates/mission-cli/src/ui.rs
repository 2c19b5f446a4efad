use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub quiet: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    const fn code(self) -> &'static str {
        match self {
            Self::Red => "31",
            Self::Green => "32",
            Self::Yellow => "33",
            Self::Blue => "34",
        }
    }
}

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let color = match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && std::env::var_os("NO_COLOR").is_none(),
    };

    let _ = UI_PREFS.set(UiPrefs {
        color,
        progress: is_tty && !flags.quiet,
        quiet: flags.quiet,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        color: false,
        progress: false,
        quiet: false,
    })
}

#[must_use]
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("\u{1b}[{}m{text}\u{1b}[0m", color.code())
    } else {
        text.to_string()
    }
}

fn line(text: &str, color: Color) {
    if prefs().quiet {
        return;
    }
    println!("{}", paint(text, color, prefs().color));
}

/// Stage header, e.g. `==> Getting recent events from AMP`.
pub fn header(text: &str) {
    line(&format!("\n==> {text}"), Color::Blue);
}

/// Uncolored detail line, indented under the preceding message.
pub fn info(text: &str) {
    if !prefs().quiet {
        println!("  {text}");
    }
}

pub fn success(text: &str) {
    line(text, Color::Green);
}

pub fn highlight(text: &str) {
    line(text, Color::Yellow);
}

/// Failures are printed even in quiet mode.
pub fn failure(text: &str) {
    println!("{}", paint(text, Color::Red, prefs().color));
}
