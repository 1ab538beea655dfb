//! Color palette and glyphs for the sysdash TUI.
//!
//! Nord-leaning palette by default, with a plain-ANSI high-contrast
//! override and ASCII-only glyphs for terminals without good Unicode
//! coverage.

use std::time::Duration;

use ratatui::style::Color;

use sysdash_types::ui::UiOptions;

mod colors {
    use super::Color;

    // Backgrounds
    pub const BG_DARK: Color = Color::Rgb(46, 52, 64);
    pub const BG_PANEL: Color = Color::Rgb(59, 66, 82);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(67, 76, 94);
    pub const BORDER: Color = Color::Rgb(76, 86, 106);

    // Foregrounds
    pub const TEXT_PRIMARY: Color = Color::Rgb(216, 222, 233);
    pub const TEXT_SECONDARY: Color = Color::Rgb(229, 233, 240);
    pub const TEXT_MUTED: Color = Color::Rgb(129, 140, 153);

    // Accents
    pub const ACCENT: Color = Color::Rgb(136, 192, 208);
    pub const ERROR: Color = Color::Rgb(191, 97, 106);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub error: Color,
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            border: Color::White,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            accent: Color::Cyan,
            error: Color::Red,
        }
    } else {
        Palette {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            border: colors::BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            accent: colors::ACCENT,
            error: colors::ERROR,
        }
    }
}

/// ASCII/Unicode glyphs for the sort indicator and spinner.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub bullet: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

const SPINNER_FRAME_MS: u128 = 80;

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            arrow_up: "^",
            arrow_down: "v",
            bullet: "*",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            arrow_up: "↑",
            arrow_down: "↓",
            bullet: "•",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// Spinner frame for a point in time since the fetch started.
#[must_use]
pub fn spinner_frame(elapsed: Duration, glyphs: &Glyphs) -> &'static str {
    let index = (elapsed.as_millis() / SPINNER_FRAME_MS) as usize % glyphs.spinner_frames.len();
    glyphs.spinner_frames[index]
}
