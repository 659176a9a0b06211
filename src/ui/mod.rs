//! UI rendering.
//!
//! One entry point, [`render`], dispatched by the current screen. Rendering
//! is pure: it reads the app state and the selection projector, and never
//! mutates the selection store.

mod error_screen;
mod overlay;
mod status;
mod table;
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use theme::{COLOR_DIM, COLOR_HEADER};

/// Render the whole UI for the current frame.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Loading => render_loading(frame),
        Screen::FetchFailed => error_screen::render(frame, frame.area(), app),
        Screen::Browse => render_browse(frame, app),
    }

    if let Some(ref overlay) = app.overlay {
        overlay::render(frame, frame.area(), overlay);
    }
}

fn render_loading(frame: &mut Frame) {
    let area = frame.area();
    let [_, center, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Loading artworks...",
            Style::default().fg(COLOR_DIM),
        )))
        .centered(),
        center,
    );
}

fn render_browse(frame: &mut Frame, app: &App) {
    let banner_height = if app.total_selected_count() > 0 { 1 } else { 0 };

    let [header_area, banner_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(banner_height),
        Constraint::Min(4),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Art Institute of Chicago — Collection",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))),
        header_area,
    );

    if banner_height > 0 {
        status::render_banner(frame, banner_area, app);
    }

    table::render(frame, table_area, app);
    status::render_footer(frame, footer_area, app);
}
