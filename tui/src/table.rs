//! Users table rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use sysdash_core::UserTable;
use sysdash_types::{Direction, SortKey};

use crate::theme::{Glyphs, Palette};

/// Renders the sortable users table.
///
/// The direction glyph appears next to the active column header only; the
/// focused header carries the highlight background.
pub fn draw_users(
    frame: &mut Frame,
    area: Rect,
    table: &UserTable,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let header = Row::new(
        SortKey::ALL
            .iter()
            .map(|key| header_cell(table, *key, palette, glyphs)),
    )
    .style(Style::default().bg(palette.bg_panel))
    .height(1);

    let rows = table.rows().iter().map(|user| {
        Row::new(vec![
            Cell::from(user.id.to_string()),
            Cell::from(user.user.clone()),
            Cell::from(user.role.clone()),
            Cell::from(user.date.to_string()),
        ])
        .style(Style::default().fg(palette.text_primary))
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Min(12),
        Constraint::Min(12),
        Constraint::Length(12),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Line::from(" Users "));

    let widget = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2);
    frame.render_widget(widget, area);
}

fn header_cell(
    table: &UserTable,
    key: SortKey,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Cell<'static> {
    let label = match table.indicator(key) {
        Some(Direction::Ascending) => format!("{} {}", key.label(), glyphs.arrow_up),
        Some(Direction::Descending) => format!("{} {}", key.label(), glyphs.arrow_down),
        None => key.label().to_string(),
    };

    let mut style = Style::default()
        .fg(palette.text_secondary)
        .add_modifier(Modifier::BOLD);
    if table.indicator(key).is_some() {
        style = style.fg(palette.accent);
    }
    if table.focused_key() == key {
        style = style.bg(palette.bg_highlight);
    }
    Cell::from(label).style(style)
}
