use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tracing::{error, info, warn};

use staffdesk::app::config::{self, AppConfig};
use staffdesk::app::keymap::KeyMap;
use staffdesk::app::{r#loop::run_loop, state::AppState};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

/// Logs go to a file; the terminal belongs to the UI. Without a usable log
/// path tracing stays uninitialised.
fn setup_tracing(config: &AppConfig) {
    use std::fs::OpenOptions;

    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let Some(log_path) = config.log_path() else {
        return;
    };
    if let Some(parent) = log_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    let filter = EnvFilter::try_from_env("STAFFDESK_LOG").unwrap_or_else(|_| {
        let level = config.log_level.as_deref().unwrap_or("info");
        EnvFilter::new(format!("staffdesk={level}"))
    });

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    info!(path = ?log_path, "tracing initialized");
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // A broken config file should not keep the palette from starting.
    let (app_config, config_error) = match config::load() {
        Ok(c) => (c, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    setup_tracing(&app_config);
    if let Some(e) = config_error {
        error!(error = %e, "failed to load config, using defaults");
    }

    // Built BEFORE terminal setup so a bad catalog doesn't leave the
    // terminal in raw mode.
    let catalog = Arc::new(app_config.build_catalog()?);
    let keymap = KeyMap::from_config(&app_config.keys).unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default key bindings");
        KeyMap::default()
    });
    info!(entries = catalog.len(), toggle = %keymap.toggle_label(), "catalog loaded");
    let app_state = AppState::new(catalog, keymap, app_config.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        println!("{:?}", err);
    }

    Ok(())
}
