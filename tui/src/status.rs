//! Loading and fallback panels.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use sysdash_client::FetchError;

use crate::theme::{Glyphs, Palette, spinner_frame};

/// Default fallback text when the fetch fails.
pub const FALLBACK_MESSAGE: &str = "Error loading data. Please try again later.";

/// Renders the pending state: spinner plus "Loading...".
pub fn draw_loading(
    frame: &mut Frame,
    area: Rect,
    elapsed: Duration,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(elapsed, glyphs)),
            Style::default().fg(palette.accent),
        ),
        Span::styled("Loading...", Style::default().fg(palette.text_primary)),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        middle_line(area),
    );
}

/// Renders the terminal fallback state for a failed fetch.
pub fn draw_error(frame: &mut Frame, area: Rect, error: &FetchError, palette: &Palette) {
    draw_error_message(frame, area, FALLBACK_MESSAGE, Some(error), palette);
}

/// Fallback panel with a caller-supplied message.
pub fn draw_error_message(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    detail: Option<&FetchError>,
    palette: &Palette,
) {
    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(error) = detail {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(palette.text_muted),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        middle_line(area),
    );
}

/// A slice of `area` vertically centered, tall enough for two lines.
fn middle_line(area: Rect) -> Rect {
    let height = 2.min(area.height);
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x, y, area.width, height)
}
