//! StockPulse CLI: query the fixture set without the dashboard.
//!
//! Commands:
//! - `stocks` / `fno` / `ipo`: filtered listings, as a table or `--json`
//! - `summary`: signal counts and average confidence for a stock filter
//! - `onboard`: run the onboarding wizard non-interactively
//! - `fixtures export`: write the built-in fixture set as JSON

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use stockpulse_core::data::{FixtureSet, JsonFileProvider, MarketDataProvider, StaticFixtures};
use stockpulse_core::domain::{HoldingPeriod, IpoStatus, Sector, Signal, Strategy, StrategySet};
use stockpulse_core::format::{
    format_confidence, format_gmp, format_inr, format_rupees, format_signed_pct,
};
use stockpulse_core::onboarding::suggestions;
use stockpulse_core::query::{filter_contracts, filter_ipos, filter_stocks};
use stockpulse_core::summary::summarize;
use stockpulse_core::{
    ContractFilter, DashboardConfig, InvestorProfile, IpoFilter, MarketSnapshot, Onboarding,
    StockFilter,
};

#[derive(Parser)]
#[command(
    name = "stockpulse",
    about = "StockPulse CLI: Indian market signals, F&O and IPOs"
)]
struct Cli {
    /// JSON fixture set to load instead of the built-in one.
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stock alerts matching the filters.
    Stocks {
        #[command(flatten)]
        filter: StockArgs,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List F&O contracts matching the filters.
    Fno {
        /// BUY, SELL or HOLD.
        #[arg(long)]
        signal: Option<Signal>,

        /// Case-insensitive substring of the symbol.
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List IPOs matching the filters.
    Ipo {
        /// UPCOMING, OPEN, LISTED or CLOSED.
        #[arg(long)]
        status: Option<IpoStatus>,

        /// Case-insensitive substring of company or symbol.
        #[arg(long, default_value = "")]
        search: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Signal counts and average confidence over the filtered stocks.
    Summary {
        #[command(flatten)]
        filter: StockArgs,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run the onboarding wizard with the given answers.
    Onboard {
        /// Investment amount; commas allowed (e.g. 1,00,000).
        #[arg(long)]
        amount: String,

        /// intraday, swing, short, medium or long.
        #[arg(long)]
        holding: Option<HoldingPeriod>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Fixture management.
    Fixtures {
        #[command(subcommand)]
        action: FixturesAction,
    },
}

#[derive(Subcommand)]
enum FixturesAction {
    /// Write the active fixture set as pretty JSON.
    Export {
        /// Output file. Prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct StockArgs {
    /// BUY, SELL or HOLD.
    #[arg(long)]
    signal: Option<Signal>,

    /// Sector code, e.g. IT or BANKING.
    #[arg(long)]
    sector: Option<Sector>,

    /// Strategy to include; repeat for several. All strategies when omitted.
    #[arg(long = "strategy")]
    strategies: Vec<Strategy>,

    /// Case-insensitive substring of symbol or name.
    #[arg(long, default_value = "")]
    search: String,
}

impl StockArgs {
    fn to_filter(&self) -> StockFilter {
        let strategies = if self.strategies.is_empty() {
            StrategySet::full()
        } else {
            self.strategies.iter().copied().collect()
        };
        StockFilter {
            strategies,
            signal: self.signal.into(),
            sector: self.sector.into(),
            search: self.search.clone(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    let fixtures = cli.fixtures.clone().or_else(|| config.fixtures.clone());

    match cli.command {
        Commands::Stocks { filter, json } => {
            let snapshot = load_snapshot(fixtures.as_deref())?;
            run_stocks(&snapshot, &filter.to_filter(), json)
        }
        Commands::Fno {
            signal,
            search,
            json,
        } => {
            let snapshot = load_snapshot(fixtures.as_deref())?;
            let filter = ContractFilter {
                signal: signal.into(),
                search,
            };
            run_fno(&snapshot, &filter, json)
        }
        Commands::Ipo {
            status,
            search,
            json,
        } => {
            let snapshot = load_snapshot(fixtures.as_deref())?;
            let filter = IpoFilter {
                status: status.into(),
                search,
            };
            run_ipo(&snapshot, &filter, json)
        }
        Commands::Summary { filter, json } => {
            let snapshot = load_snapshot(fixtures.as_deref())?;
            run_summary(&snapshot, &filter.to_filter(), json)
        }
        Commands::Onboard {
            amount,
            holding,
            json,
        } => run_onboard(&config, &amount, holding, json),
        Commands::Fixtures { action } => match action {
            FixturesAction::Export { out } => run_export(fixtures.as_deref(), out.as_deref()),
        },
    }
}

fn provider(fixtures: Option<&Path>) -> Result<Box<dyn MarketDataProvider>> {
    Ok(match fixtures {
        Some(path) => Box::new(JsonFileProvider::open(path)?),
        None => Box::new(StaticFixtures),
    })
}

fn load_snapshot(fixtures: Option<&Path>) -> Result<MarketSnapshot> {
    let provider = provider(fixtures)?;
    Ok(MarketSnapshot::load(provider.as_ref())?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_stocks(snapshot: &MarketSnapshot, filter: &StockFilter, json: bool) -> Result<()> {
    let stocks = filter_stocks(snapshot.stocks(), filter);
    tracing::debug!(matched = stocks.len(), "stocks filtered");
    if json {
        return print_json(&stocks);
    }
    if stocks.is_empty() {
        println!("No alerts match your filters.");
        return Ok(());
    }

    println!(
        "{:<11} {:<28} {:>11} {:>8} {:<5} {:<16} {:>5} {:>11} {:>11}",
        "Symbol", "Name", "Price", "Chg", "Sig", "Strategy", "Conf", "Target", "Stop"
    );
    for a in stocks {
        println!(
            "{:<11} {:<28} {:>11} {:>8} {:<5} {:<16} {:>4}% {:>11} {:>11}",
            a.symbol,
            a.name,
            format_inr(a.current_price, 2),
            format_signed_pct(a.change_percent),
            a.signal.code(),
            a.strategy.label(),
            a.confidence,
            format_inr(a.target_price, 2),
            format_inr(a.stop_loss, 2),
        );
    }
    Ok(())
}

fn run_fno(snapshot: &MarketSnapshot, filter: &ContractFilter, json: bool) -> Result<()> {
    let contracts = filter_contracts(snapshot.contracts(), filter);
    if json {
        return print_json(&contracts);
    }
    if contracts.is_empty() {
        println!("No F&O contracts match your filters.");
        return Ok(());
    }

    println!(
        "{:<10} {:<6} {:>10} {:<7} {:>10} {:>8} {:>7} {:>7} {:<5} {:>16} {:>5}",
        "Symbol", "Type", "Strike", "Expiry", "LTP", "Chg", "OI", "IV", "Sig", "Qty", "Conf"
    );
    for c in contracts {
        let strike = c
            .strike()
            .map(|s| format_inr(s, 0))
            .unwrap_or_else(|| "-".to_string());
        let iv = c
            .implied_volatility()
            .map(|v| format!("{v:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:<6} {:>10} {:<7} {:>10} {:>8} {:>7} {:>7} {:<5} {:>16} {:>4}%",
            c.symbol,
            c.contract_type.code(),
            strike,
            c.expiry,
            format_inr(c.ltp, 2),
            format_signed_pct(c.change_percent),
            c.oi,
            iv,
            c.signal.code(),
            format!("{} × {} = {}", c.lots, c.lot_size, c.total_quantity()),
            c.confidence,
        );
    }
    Ok(())
}

fn run_ipo(snapshot: &MarketSnapshot, filter: &IpoFilter, json: bool) -> Result<()> {
    let ipos = filter_ipos(snapshot.ipos(), filter);
    if json {
        return print_json(&ipos);
    }
    if ipos.is_empty() {
        println!("No IPOs match your search.");
        return Ok(());
    }

    println!(
        "{:<10} {:<32} {:<9} {:<9} {:>14} {:<13} {:>6} {:>8} {:<10}",
        "Symbol", "Company", "Status", "Board", "Price Band", "Opens", "GMP", "Subs", "Rating"
    );
    for ipo in ipos {
        println!(
            "{:<10} {:<32} {:<9} {:<9} {:>14} {:<13} {:>6} {:>8} {:<10}",
            ipo.symbol,
            ipo.company,
            ipo.status.label(),
            ipo.board.code(),
            ipo.price_range,
            ipo.open_date,
            format_gmp(ipo.gmp),
            ipo.subscription.as_deref().unwrap_or("-"),
            ipo.rating.label(),
        );
    }
    Ok(())
}

fn run_summary(snapshot: &MarketSnapshot, filter: &StockFilter, json: bool) -> Result<()> {
    let stocks = filter_stocks(snapshot.stocks(), filter);
    let summary = summarize(stocks.iter().copied());
    if json {
        return print_json(&summary);
    }

    println!("Alerts:          {}", summary.total());
    println!("Buy signals:     {}", summary.buy_count);
    println!("Sell signals:    {}", summary.sell_count);
    println!("Hold:            {}", summary.hold_count);
    println!("Avg confidence:  {}", format_confidence(summary.avg_confidence));
    Ok(())
}

fn run_onboard(
    config: &DashboardConfig,
    amount: &str,
    holding: Option<HoldingPeriod>,
    json: bool,
) -> Result<()> {
    let mut wizard = Onboarding::new(config.min_investment);
    wizard.set_amount_text(amount);
    if let Some(holding) = holding {
        wizard.select_holding(holding);
    }

    let outcome = wizard
        .advance()
        .and_then(|_| wizard.advance())
        .and_then(|_| wizard.complete());

    let completion = match outcome {
        Ok(completion) => completion,
        Err(err) => {
            eprintln!("Onboarding stopped at step {}: {err}", wizard.step().number());
            std::process::exit(1);
        }
    };

    let profile = InvestorProfile::from(completion);
    if json {
        return print_json(&profile);
    }

    println!("Investment:  {}", format_rupees(profile.amount));
    println!("Holding:     {}", profile.holding.label());
    println!();
    println!("Recommended for you");
    for tip in suggestions(Some(profile.holding)) {
        println!("  • {}  {}", tip.title, tip.detail);
    }
    Ok(())
}

fn run_export(fixtures: Option<&Path>, out: Option<&Path>) -> Result<()> {
    let provider = provider(fixtures)?;
    let set = FixtureSet::from_provider(provider.as_ref())?;
    let text = set.to_json_pretty()?;
    match out {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!(path = %path.display(), "fixtures exported");
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use stockpulse_core::query::Selection;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn stock_flags_build_a_filter() {
        let cli = Cli::try_parse_from([
            "stockpulse", "stocks", "--signal", "buy", "--sector", "it", "--strategy", "hybrid",
            "--strategy", "neural-net", "--search", "inf",
        ])
        .unwrap();
        let Commands::Stocks { filter, json } = cli.command else {
            panic!("expected stocks");
        };
        assert!(!json);
        let filter = filter.to_filter();
        assert_eq!(filter.signal, Selection::Only(Signal::Buy));
        assert_eq!(filter.sector, Selection::Only(Sector::It));
        assert_eq!(filter.strategies.len(), 2);
        assert!(filter.strategies.contains(Strategy::NeuralNet));
        assert_eq!(filter.search, "inf");
    }

    #[test]
    fn no_strategy_flag_means_all() {
        let cli = Cli::try_parse_from(["stockpulse", "summary"]).unwrap();
        let Commands::Summary { filter, .. } = cli.command else {
            panic!("expected summary");
        };
        assert!(filter.to_filter().strategies.is_full());
    }

    #[test]
    fn help_text_is_plain_ascii_punctuation() {
        let about = Cli::command().get_about().map(|a| a.to_string()).unwrap_or_default();
        assert!(about.starts_with("StockPulse CLI"));
        assert!(!about.contains('\u{2014}'));
    }

    #[test]
    fn fno_search_help_names_only_the_symbol() {
        let cmd = Cli::command();
        let fno = cmd.find_subcommand("fno").unwrap();
        let search = fno
            .get_arguments()
            .find(|arg| arg.get_id() == "search")
            .unwrap();
        let help = search.get_help().map(|h| h.to_string()).unwrap_or_default();
        assert_eq!(help, "Case-insensitive substring of the symbol.");
    }

    #[test]
    fn unknown_signal_is_rejected() {
        assert!(Cli::try_parse_from(["stockpulse", "fno", "--signal", "maybe"]).is_err());
    }

    #[test]
    fn global_fixtures_after_subcommand() {
        let cli =
            Cli::try_parse_from(["stockpulse", "ipo", "--status", "open", "--fixtures", "f.json"])
                .unwrap();
        assert_eq!(cli.fixtures.as_deref(), Some(Path::new("f.json")));
    }

    #[test]
    fn summary_matches_buy_fixture() {
        let snapshot = load_snapshot(None).unwrap();
        let filter = StockFilter {
            signal: Selection::Only(Signal::Buy),
            ..StockFilter::default()
        };
        let stocks = filter_stocks(snapshot.stocks(), &filter);
        let summary = summarize(stocks.iter().copied());
        assert_eq!(summary.buy_count, summary.total());
        assert_eq!(summary.sell_count + summary.hold_count, 0);
    }
}
