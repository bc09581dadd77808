// tutortty: AI tutor and data structure visualizers for the terminal

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use tutortty::api::HttpTutorClient;
use tutortty::cli::Args;
use tutortty::config::Config;
use tutortty::logging;
use tutortty::session::SessionStore;
use tutortty::ui::App;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("failed to load config")?;
    if let Some(url) = args.api_url {
        config.api_url = url;
        config.validate().context("invalid --api-url")?;
    }

    let log_file = args
        .log_file
        .or_else(logging::default_log_file)
        .context("no data directory for the log file; pass --log-file")?;
    let _log_guard = logging::init(&log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;
    info!(version = env!("CARGO_PKG_VERSION"), api_url = %config.api_url, "starting");

    let session = match config.session_file.clone() {
        Some(path) => SessionStore::new(path),
        None => SessionStore::in_data_dir()?,
    };
    if args.logout {
        session.clear()?;
        eprintln!("Signed out.");
    }
    let profile = match session.load() {
        Ok(profile) => profile,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable session");
            None
        }
    };

    let client = HttpTutorClient::new(&config.api_url, config.request_timeout())
        .context("failed to build the HTTP client")?;

    let mut app = App::new(Arc::new(client), config, session, profile);
    if let Some(kind) = args.visualizer {
        app.open_visualizer(kind, args.values);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }
    info!("exiting");

    Ok(())
}
