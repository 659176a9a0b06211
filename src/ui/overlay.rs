//! Bulk-select dialog.
//!
//! A centered dialog with a numeric input: "select the first N rows across
//! all pages". Invalid input shows an inline message and never reaches the
//! selection store.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::BulkSelectOverlay;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

const DIALOG_WIDTH: u16 = 46;
const CONTENT_HEIGHT: u16 = 5;

/// Render the bulk-select dialog centered on the screen.
pub fn render(frame: &mut Frame, area: Rect, overlay: &BulkSelectOverlay) {
    let dialog_width = DIALOG_WIDTH.min(area.width.saturating_sub(4));
    let dialog_height = CONTENT_HEIGHT + 2;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect {
        x,
        y,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the background behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " Select Rows ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let input_display = if overlay.input.is_empty() {
        Span::styled("e.g. 50", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled(
            overlay.input.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    };

    let feedback = match overlay.error {
        Some(ref message) => Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        None => Span::raw(""),
    };

    let lines = vec![
        Line::from(Span::styled(
            "Number of rows to select across all pages:",
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(vec![Span::raw("> "), input_display]),
        Line::from(feedback),
        Line::from(""),
        Line::from(Span::styled(
            "[enter] apply  [esc] cancel",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
