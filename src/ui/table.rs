//! The artwork table.
//!
//! A checkbox column plus the artwork fields. Checkbox state is the
//! projector's output for the visible page; the cursor row is rendered
//! reversed.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::ui::theme::{COLOR_BORDER, COLOR_HEADER, COLOR_SELECTED};

/// Widest cell content before truncation.
const MAX_CELL_WIDTH: usize = 40;

/// Render the artwork table.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let checked = app.checked_ids();

    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from("Title"),
        Cell::from("Origin"),
        Cell::from("Artist"),
        Cell::from("Inscriptions"),
        Cell::from("Start"),
        Cell::from("End"),
    ])
    .style(
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .artworks
        .iter()
        .enumerate()
        .map(|(i, artwork)| {
            let is_checked = checked.contains(&artwork.id);
            let checkbox = if is_checked { "[x]" } else { "[ ]" };

            let mut style = Style::default();
            if is_checked {
                style = style.fg(COLOR_SELECTED);
            }
            if i == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            Row::new(vec![
                Cell::from(checkbox),
                Cell::from(truncate(artwork.display_title(), MAX_CELL_WIDTH)),
                Cell::from(truncate(
                    artwork.place_of_origin.as_deref().unwrap_or("-"),
                    MAX_CELL_WIDTH,
                )),
                Cell::from(truncate(artwork.display_artist(), MAX_CELL_WIDTH)),
                Cell::from(truncate(
                    artwork.inscriptions.as_deref().unwrap_or("-"),
                    MAX_CELL_WIDTH,
                )),
                Cell::from(year(artwork.date_start)),
                Cell::from(year(artwork.date_end)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(24),
        Constraint::Length(16),
        Constraint::Length(22),
        Constraint::Length(20),
        Constraint::Length(6),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );

    frame.render_widget(table, area);
}

fn year(value: Option<i32>) -> String {
    value
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Truncate a string to a display width, appending an ellipsis when cut.
fn truncate(text: &str, max_width: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Monet", 10), "Monet");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        let long = "A very long artwork title that will not fit";
        let cut = truncate(long, 10);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= 10);
    }

    #[test]
    fn test_truncate_counts_display_width() {
        // Wide CJK characters take two cells each
        let cut = truncate("葛飾北斎の浮世絵", 6);
        assert!(cut.ends_with('…'));
        assert!(unicode_width::UnicodeWidthStr::width(cut.as_str()) <= 6);
    }

    #[test]
    fn test_year_placeholder() {
        assert_eq!(year(Some(1831)), "1831");
        assert_eq!(year(None), "-");
    }
}
