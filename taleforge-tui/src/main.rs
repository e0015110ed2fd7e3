//! Taleforge TUI - routed six-view shell over local storage.
//!
//! The shell mounts immediately. Storage comes up on a background thread and
//! only the File Library waits for it.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use taleforge_core::{AppConfig, Bootstrap, SqliteInitializer};
use taleforge_tui::{input, logging, persistence, ui, AppState};

#[derive(Parser)]
#[command(name = "taleforge-tui", about = "Taleforge terminal shell")]
struct Args {
    /// Path to open, e.g. /tts or /library.
    path: Option<String>,

    /// Config file. Defaults to config.toml under the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the storage directory from the config.
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config problems are not fatal; the shell runs on defaults.
    let config_path = args.config.clone().unwrap_or_else(AppConfig::default_path);
    let (mut config, config_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    if let Err(e) = logging::init(&config.log_file, &config.log_level) {
        eprintln!("warning: logging disabled: {e:#}");
    }
    if let Some(e) = &config_error {
        tracing::warn!("{}; using defaults", e);
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    let persisted = persistence::load(&config.state_path);
    let start_path = args
        .path
        .or_else(|| persisted.last_path.clone())
        .unwrap_or_else(|| config.start_path.clone());

    let bootstrap = Arc::new(Bootstrap::new(SqliteInitializer::new(config.db_path())));
    let mut app = AppState::new(bootstrap, &start_path);
    persistence::apply(&mut app, &persisted);
    if config_error.is_some() {
        app.set_warning("Config unreadable, using defaults");
    }

    // The bootstrap thread is detached; its outcome lands in the store cell.
    drop(app.mount());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Err(e) = persistence::save(&config.state_path, &persistence::extract(&app)) {
        tracing::warn!("failed to save state: {:#}", e);
    }
    app.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!("shutdown");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Late storage arrival
        app.tick();

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
