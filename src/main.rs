use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, LevelFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io, path::PathBuf, time::Duration};

/// Records admin TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp-dir log file
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL (makes the config file optional)
    #[arg(short, long)]
    base_url: Option<String>,
}

mod api;
mod app;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod store;
mod ui;

use api::RecordsClient;
use config::Config;
use model::Model;
use services::api::Priority;
use store::ViewStore;

pub struct App {
    pub model: Model,

    client: RecordsClient,
    store: ViewStore,
    api_tx: tokio::sync::mpsc::UnboundedSender<services::api::ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<services::api::ApiResponse>,

    filter_debounce: Duration,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let client = RecordsClient::new(config.base_url.clone());
        let store = ViewStore::new()?;

        // Restore the persisted pagination pair ({1, 10} when absent)
        let (page, per_page) = store.load_view()?;
        debug!("restored view: page {} per_page {}", page, per_page);

        // Spawn API service worker
        let (api_tx, api_rx) = services::api::spawn_api_service(client.clone());

        let model = Model::new(page, per_page);

        let mut app = App {
            model,
            client,
            store,
            api_tx,
            api_rx,
            filter_debounce: Duration::from_millis(config.filter_debounce_ms),
        };

        // Initial load
        app.request_refresh(Priority::High);

        Ok(app)
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: services::api::ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try the platform config dir
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("admintui").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    // No config found, provide helpful error
    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("admintui")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/admintui/config.yaml".to_string()
    };

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location,\n\
         or --base-url <url> to run without a config file.",
        expected_path
    )
}

fn load_config(args: &Args) -> Result<Config> {
    // A base URL on the command line makes the config file optional
    if let Some(base_url) = &args.base_url {
        return match get_config_path(args.config.clone()) {
            Ok(path) => {
                let config_str = fs::read_to_string(&path)?;
                let mut config: Config = serde_yaml::from_str(&config_str)
                    .with_context(|| format!("Failed to parse config at {}", path.display()))?;
                config.base_url = base_url.clone();
                Ok(config)
            }
            Err(_) => Ok(Config::with_base_url(base_url.clone())),
        };
    }

    let path = get_config_path(args.config.clone())?;
    let config_str = fs::read_to_string(&path)?;
    serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config at {}", path.display()))
}

fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    let mut path = std::env::temp_dir();
    path.push("admintui-debug.log");

    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create log file at {}", path.display()))?;
    simplelog::WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
        .context("Failed to initialize logger")?;

    debug!("debug logging enabled");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(args.debug)?;

    // Load configuration
    let config = load_config(&args)?;

    // Initialize app
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render from the current model
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss expired toasts
        app.model.ui.dismiss_expired_toast();

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Run the debounced filter refetch once typing has paused
        if let Some(marked_at) = app.model.ui.pending_filter_refetch {
            if marked_at.elapsed() >= app.filter_debounce {
                app.apply_pending_filter_refetch();
            }
        }

        // Poll timeout keeps CPU usage low while idle but still drains
        // responses promptly
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key)?;
            }
        }
    }

    Ok(())
}
