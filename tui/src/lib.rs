//! TUI rendering for sysdash using ratatui.
//!
//! One draw entry point dispatching on the app's fetch state: a spinner
//! while the user list is pending, the sortable table once it resolves,
//! and the fallback panel if the fetch failed.

mod input;
mod status;
mod table;
mod theme;

pub use input::{InputPump, handle_event};
pub use status::{FALLBACK_MESSAGE, draw_error_message};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use sysdash_engine::{App, FetchState};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette);

    match app.state() {
        FetchState::Loading => {
            status::draw_loading(frame, chunks[1], app.elapsed(), &palette, &glyphs);
        }
        FetchState::Loaded(table) => table::draw_users(frame, chunks[1], table, &palette, &glyphs),
        FetchState::Failed(error) => status::draw_error(frame, chunks[1], error, &palette),
    }

    draw_hints(frame, chunks[2], app, &palette, &glyphs);
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(
        "System Dashboard",
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Left);
    frame.render_widget(title, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let style = Style::default().fg(palette.text_muted);
    let hints = if matches!(app.state(), FetchState::Loaded(_)) {
        format!(
            "h/l move {b} enter/space sort {b} 1-4 column {b} q quit",
            b = glyphs.bullet
        )
    } else {
        "q quit".to_string()
    };
    frame.render_widget(Paragraph::new(hints).style(style), area);
}
