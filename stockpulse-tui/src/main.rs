//! StockPulse TUI: onboarding, then a tabbed dashboard over the fixture set.
//!
//! Tabs:
//! 1. Stocks: market stats, sector / signal / strategy filters, alert list
//! 2. F&O: contracts with OI, IV and lot sizing
//! 3. IPO: status filter, GMP, subscription and ratings

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use stockpulse_core::data::{JsonFileProvider, MarketDataProvider, StaticFixtures};
use stockpulse_core::{DashboardConfig, MarketSnapshot};
use stockpulse_tui::{input, ui, AppState};

#[derive(Parser)]
#[command(name = "stockpulse-tui", about = "StockPulse: Indian market signal dashboard")]
struct Args {
    /// Config file. Defaults to <config dir>/stockpulse/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON fixture set to load instead of the built-in one.
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    let config = load_config(args.config.as_deref())?;
    let snapshot = load_snapshot(args.fixtures.as_ref().or(config.fixtures.as_ref()))?;
    tracing::info!(
        source = snapshot.source(),
        stocks = snapshot.stocks().len(),
        contracts = snapshot.contracts().len(),
        ipos = snapshot.ipos().len(),
        "dashboard starting"
    );

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(snapshot, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("dashboard closed");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop at ~20 FPS.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}

/// An explicit `--config` must exist; the default location may be absent.
fn load_config(explicit: Option<&Path>) -> Result<DashboardConfig> {
    let config = match explicit {
        Some(path) => DashboardConfig::load(path)?,
        None => match dirs::config_dir() {
            Some(dir) => DashboardConfig::load_or_default(&dir.join("stockpulse").join("config.toml"))?,
            None => DashboardConfig::default(),
        },
    };
    Ok(config)
}

fn load_snapshot(fixtures: Option<&PathBuf>) -> Result<MarketSnapshot> {
    let provider: Box<dyn MarketDataProvider> = match fixtures {
        Some(path) => Box::new(JsonFileProvider::open(path)?),
        None => Box::new(StaticFixtures),
    };
    Ok(MarketSnapshot::load(provider.as_ref())?)
}
