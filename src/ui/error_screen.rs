//! Full-screen fetch error with a retry prompt.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR};

/// Render the fetch-failure screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let message = app
        .error_message
        .as_deref()
        .unwrap_or("Unable to fetch data from the Art Institute of Chicago API.");

    // Esc only makes sense when there is a page to go back to
    let hints = if app.artworks.is_empty() {
        "[r] retry  [q] quit"
    } else {
        "[r] retry  [esc] back  [q] quit"
    };

    let lines = vec![
        Line::from(Span::styled(
            "Failed to load artworks",
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(COLOR_ACCENT))),
        Line::from(""),
        Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM))),
    ];

    frame.render_widget(Paragraph::new(lines).centered(), center);
}
