use gallerist::adapters::ArticClient;
use gallerist::app::{App, AppMessage};
use gallerist::config::AppConfig;
use gallerist::terminal::{enter_tui_mode, leave_tui_mode, setup_panic_hook};
use gallerist::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set up the tracing subscriber.
///
/// Stdout belongs to the TUI, so logs go to a file, and only when a log path
/// is configured (`GALLERIST_LOG`). The `RUST_LOG` filter applies as usual.
fn init_tracing(config: &AppConfig) {
    let Some(ref path) = config.log_path else {
        return;
    };

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(file) = std::fs::File::create(path) else {
        eprintln!("warning: could not open log file {}", path.display());
        return;
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("gallerist {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;
    setup_panic_hook();

    let config = AppConfig::from_env();
    init_tracing(&config);
    tracing::info!(api = %config.api_base_url, page_size = config.page_size, "starting");

    let fetcher = ArticClient::from_config(&config)?;
    let mut app = App::new(config, Arc::new(fetcher));
    app.request_page(1);

    let mut stdout = io::stdout();
    enter_tui_mode(&mut stdout)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    leave_tui_mode(&mut io::stdout());
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: mpsc::UnboundedReceiver<AppMessage> = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message channel already taken"))?;

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // Poll keyboard events, fetch results, and the animation tick
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(100)) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        _ => {}
                    }
                }
            }

            message = message_rx.recv() => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
