//! Keyboard handling.
//!
//! One entry point, [`App::handle_key`], dispatched by what currently has
//! focus: the bulk-select dialog swallows every key while open, then the
//! active screen's bindings apply.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Screen};

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.overlay.is_some() {
            self.handle_overlay_key(key);
            return;
        }

        match self.screen {
            Screen::Loading => self.handle_loading_key(key),
            Screen::Browse => self.handle_browse_key(key),
            Screen::FetchFailed => self.handle_error_key(key),
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_bulk_overlay(),
            KeyCode::Enter => self.submit_bulk_overlay(),
            KeyCode::Backspace => {
                if let Some(ref mut overlay) = self.overlay {
                    overlay.backspace();
                    self.mark_dirty();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(ref mut overlay) = self.overlay {
                    overlay.push_digit(c);
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    fn handle_loading_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('q') = key.code {
            self.quit();
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('l') => self.next_page(),
            KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('h') => self.prev_page(),
            KeyCode::Char(' ') => self.toggle_cursor_row(),
            KeyCode::Char('a') => self.toggle_page(),
            KeyCode::Char('s') => self.open_bulk_overlay(),
            KeyCode::Char('c') => self.clear_selection(),
            _ => {}
        }
    }

    fn handle_error_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('r') => self.retry_failed_page(),
            KeyCode::Esc => self.dismiss_error(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockFetcher;
    use crate::config::AppConfig;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn browse_app() -> App {
        let config = AppConfig::default();
        let fetcher = Arc::new(MockFetcher::with_collection(100, config.page_size));
        let mut app = App::new(config, fetcher);
        app.screen = Screen::Browse;
        app
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = browse_app();
        app.open_bulk_overlay();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_quits_browse() {
        let mut app = browse_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_overlay_swallows_browse_keys() {
        let mut app = browse_app();
        app.open_bulk_overlay();

        // 'q' must not quit while typing a count
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Char('7')));
        assert_eq!(app.overlay.as_ref().unwrap().input, "7");

        app.handle_key(key(KeyCode::Esc));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_s_opens_overlay() {
        let mut app = browse_app();
        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.overlay.is_some());
    }
}
