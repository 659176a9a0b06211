//! Terminal setup and teardown.
//!
//! Low-level functions for entering and leaving TUI mode, plus a panic hook
//! that restores the terminal so a crash never leaves the user's shell in
//! raw mode.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::panic;

/// Enter TUI mode: raw mode plus the alternate screen.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal to a normal state.
///
/// Safe to call multiple times; errors are ignored because there is nothing
/// sensible to do with them during shutdown.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen);

    // Hard reset keyboard enhancement flags AFTER leaving alternate screen;
    // some terminals (Ghostty, Kitty) need the non-stack-based reset there
    let _ = write!(writer, "\x1b[=0u");
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic or error, ignoring all failures.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}

/// Install a panic hook that restores the terminal before the panic message
/// prints. Call early in main(), before entering TUI mode.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
