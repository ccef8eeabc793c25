// crates/cart-client/src/main.rs

mod app;
mod components;
mod ui;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::{io, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cart_client::{ApiClient, ClientConfig};

use crate::app::{App, View};

#[derive(Parser)]
#[command(name = "cart-client")]
#[command(about = "Terminal ordering cart and admin dashboard for the restaurant API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Base URL of the ordering API (overrides config and CART_API_BASE_URL)
    #[arg(short, long, global = true)]
    api_url: Option<String>,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (written to the log file)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Log file path (overrides config and CART_LOG_FILE)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Customer ordering view (default)
    Order,
    /// Admin dashboard: stats, orders, menu management
    Admin,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration: file/env, then CLI flags
    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(path) = cli.log_file {
        config.log_file = path;
    }

    // Setup logging
    if cli.debug || std::env::var_os("RUST_LOG").is_some() {
        init_logging(&config, cli.debug)?;
    }

    let api = ApiClient::from_config(&config)?;
    let view = match cli.command.unwrap_or(Command::Order) {
        Command::Order => View::Order,
        Command::Admin => View::Admin,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let app = App::new(api, view, config.orders_per_page, config.bill_file.clone());
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

/// Tracing goes to a file; the terminal belongs to the UI.
fn init_logging(config: &ClientConfig, debug: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;

    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Draw once before the first request so the screen is not blank
    terminal.draw(|f| ui::draw(f, &app))?;
    app.start().await;

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, &app))?;

        // Handle events with timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key).await;
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    info!("exiting");
    Ok(())
}
