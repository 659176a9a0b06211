//! Selection banner and footer.
//!
//! The banner appears above the table whenever anything is selected; the
//! footer carries page position, the transient status toast, the fetch
//! spinner, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_SELECTED, COLOR_STATUS};

/// Spinner frames for in-flight fetches.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Render the selection banner. Caller only allocates this row when the
/// selection is non-empty.
pub fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.total_selected_count();
    let rows = if count == 1 { "row" } else { "rows" };
    let line = Line::from(vec![
        Span::styled(
            format!("{} {} selected", count, rows),
            Style::default()
                .fg(COLOR_SELECTED)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  —  [s] custom selection  [c] deselect all", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the two-line footer: position + status, then key hints.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut position = if app.total_pages > 0 {
        format!(
            "Page {} of {} · {} artworks",
            app.current_page, app.total_pages, app.total_records
        )
    } else {
        String::from("Page 1")
    };
    if app.fetch_in_flight {
        let frame_ch = SPINNER[(app.tick_count as usize) % SPINNER.len()];
        position.push_str(&format!("  {} fetching", frame_ch));
    }

    let mut first = vec![Span::styled(position, Style::default().fg(COLOR_ACCENT))];
    if let Some(ref status) = app.status_line {
        first.push(Span::styled(
            format!("  ·  {}", status),
            Style::default().fg(COLOR_STATUS),
        ));
    }

    let hints = Line::from(Span::styled(
        "[↑↓] move  [space] toggle  [a] toggle page  [←→] page  [s] select first N  [c] clear  [q] quit",
        Style::default().fg(COLOR_DIM),
    ));

    let footer = Paragraph::new(vec![Line::from(first), hints]);
    frame.render_widget(footer, area);
}
