use clap::Parser;
use home_accounting_charts::finance::FinanceSnapshot;
use home_accounting_charts::logging::{self, UI_NAMESPACE};
use home_accounting_charts::ui::render::render_report;
use home_accounting_charts::ui::theme::ChartTheme;
use home_accounting_charts::ui::widgets::LayoutContext;
use home_accounting_charts::ui::Overview;
use log::{error, info};
use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_THEME: &str = "assets/themes/default.yml";

/// Prints the income/expense overview for a finance snapshot.
#[derive(Debug, Parser)]
#[command(name = "home-accounting-charts", version)]
struct Cli {
    /// Snapshot YAML with incomes, expenses and their totals. Without it a
    /// random snapshot is used when built with `mock_finance`.
    snapshot: Option<PathBuf>,

    /// Chart theme YAML, defaults to assets/themes/default.yml when present.
    #[arg(long, value_name = "THEME.yml")]
    theme: Option<PathBuf>,

    /// Available width, picks the compact or regular chart size.
    #[arg(long, default_value_t = 400.0)]
    width: f32,
}

fn load_theme(path: Option<PathBuf>) -> Result<ChartTheme, Box<dyn StdError>> {
    match path {
        Some(path) => Ok(ChartTheme::from_yaml_file(path)?),
        None if Path::new(DEFAULT_THEME).exists() => Ok(ChartTheme::from_yaml_file(DEFAULT_THEME)?),
        None => Ok(ChartTheme::default()),
    }
}

#[cfg(feature = "mock_finance")]
fn load_snapshot(path: Option<PathBuf>) -> Result<FinanceSnapshot, Box<dyn StdError>> {
    match path {
        Some(path) => Ok(FinanceSnapshot::from_yaml_file(path)?),
        None => Ok(home_accounting_charts::finance::mock::mock_snapshot(None)),
    }
}

#[cfg(not(feature = "mock_finance"))]
fn load_snapshot(path: Option<PathBuf>) -> Result<FinanceSnapshot, Box<dyn StdError>> {
    let path = path.ok_or("a snapshot path is required unless built with the mock_finance feature")?;
    Ok(FinanceSnapshot::from_yaml_file(path)?)
}

fn run(cli: Cli) -> Result<(), Box<dyn StdError>> {
    let theme = load_theme(cli.theme)?;
    let snapshot = load_snapshot(cli.snapshot)?;
    let ctx = LayoutContext::new(cli.width, &theme);
    let overview = Overview::build(&snapshot, &ctx)?;
    print!("{}", render_report(&overview));
    info!(target: UI_NAMESPACE, "Report rendered");
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
