//! Color theme constants for the gallerist UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Checked rows - bright green
pub const COLOR_SELECTED: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error text - red
pub const COLOR_ERROR: Color = Color::Red;

/// Status toast text - cyan
pub const COLOR_STATUS: Color = Color::Cyan;
