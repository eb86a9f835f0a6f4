use std::path::PathBuf;

use budget_engine::calculation::{calculate_breakdown, parse_percentage, validate_budget};
use budget_engine::config::{ConfigLoader, PayrollPolicy};
use budget_engine::format::{MONTH_NAMES, format_money, month_name, render_report};
use budget_engine::models::{Breakdown, BudgetItem};
use budget_engine::session::{BudgetField, Session, Tab};
use budget_engine::storage::JsonFileStore;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Payroll policy directory (policy.yaml + tax_table.yaml). Built-in policy if omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// File that keeps the calculator session between runs
    #[arg(long, global = true, default_value = "budget-state.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a breakdown without touching the stored session
    Calculate {
        /// Hourly rate
        #[arg(long)]
        rate: String,
        /// Month name or number (1-12)
        #[arg(long, value_parser = parse_month)]
        month: u32,
        /// Calendar year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Budget category as NAME=PERCENT; repeat for each category
        #[arg(long = "item", value_parser = parse_item, required = true)]
        items: Vec<BudgetItem>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit the stored calculator draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
    /// Show the last submitted breakdown
    Breakdown {
        /// Calendar year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or switch the active tab
    Tab {
        /// "calculator" or "breakdown"
        name: Option<Tab>,
    },
}

#[derive(Subcommand)]
enum DraftAction {
    /// Print the draft
    Show,
    /// Set the hourly rate
    Rate { value: String },
    /// Select the month (name or 1-12)
    Month {
        #[arg(value_parser = parse_month)]
        month: u32,
    },
    /// Add a budget item
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        percentage: String,
    },
    /// Edit a budget item
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        percentage: Option<String>,
    },
    /// Remove a budget item
    Remove { id: String },
    /// Submit the draft as the new breakdown
    Submit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let policy = match &cli.config {
        Some(dir) => ConfigLoader::load(dir).into_diagnostic()?.into_policy(),
        None => PayrollPolicy::default(),
    };
    let today = Local::now().date_naive();
    let symbol = policy.metadata().currency_symbol.clone();

    match cli.command {
        Commands::Calculate {
            rate,
            month,
            year,
            items,
            json,
        } => {
            validate_budget(&items).into_diagnostic()?;
            let breakdown = Breakdown::new(rate, month, items);
            let result = calculate_breakdown(&breakdown, year.unwrap_or(today.year()), &policy)
                .into_diagnostic()?;
            print_result(&result, &symbol, json)?;
        }
        Commands::Draft { action } => {
            let store = JsonFileStore::open(&cli.store).into_diagnostic()?;
            let mut session = Session::open(store, &policy, today);
            run_draft_action(&mut session, action, &symbol)?;
        }
        Commands::Breakdown { year, json } => {
            let store = JsonFileStore::open(&cli.store).into_diagnostic()?;
            let session = Session::open(store, &policy, today);
            let breakdown = session
                .breakdown()
                .ok_or_else(|| miette!("No breakdown submitted yet; run `draft submit` first"))?;
            let result = calculate_breakdown(breakdown, year.unwrap_or(today.year()), &policy)
                .into_diagnostic()?;
            print_result(&result, &symbol, json)?;
        }
        Commands::Tab { name } => {
            let store = JsonFileStore::open(&cli.store).into_diagnostic()?;
            let mut session = Session::open(store, &policy, today);
            if let Some(tab) = name {
                session.set_tab(tab).into_diagnostic()?;
            }
            println!("{}", session.tab());
        }
    }

    Ok(())
}

fn run_draft_action(
    session: &mut Session<JsonFileStore>,
    action: DraftAction,
    symbol: &str,
) -> Result<()> {
    match action {
        DraftAction::Show => {}
        DraftAction::Rate { value } => session.set_hourly_rate(value).into_diagnostic()?,
        DraftAction::Month { month } => session.select_month(month).into_diagnostic()?,
        DraftAction::Add { name, percentage } => {
            let id = session.add_budget_item().into_diagnostic()?;
            session
                .update_budget_item(&id, BudgetField::Name, &name)
                .into_diagnostic()?;
            session
                .update_budget_item(&id, BudgetField::Percentage, &percentage)
                .into_diagnostic()?;
        }
        DraftAction::Update {
            id,
            name,
            percentage,
        } => {
            if let Some(name) = name {
                session
                    .update_budget_item(&id, BudgetField::Name, &name)
                    .into_diagnostic()?;
            }
            if let Some(percentage) = percentage {
                session
                    .update_budget_item(&id, BudgetField::Percentage, &percentage)
                    .into_diagnostic()?;
            }
        }
        DraftAction::Remove { id } => session.remove_budget_item(&id).into_diagnostic()?,
        DraftAction::Submit => {
            let outcome = session.submit().map(|_| ());
            if let Err(err) = outcome {
                print_draft(session, symbol);
                return Err(err).into_diagnostic();
            }
            println!("Breakdown submitted.");
        }
    }

    print_draft(session, symbol);
    Ok(())
}

fn print_draft(session: &Session<JsonFileStore>, symbol: &str) {
    println!("Hourly rate: {}", session.hourly_rate());
    println!(
        "Month: {}",
        month_name(session.selected_month()).unwrap_or("?")
    );
    println!("Budget items:");
    for item in session.budget_items() {
        println!(
            "  {}  {:<20} {}%",
            item.id,
            item.name,
            item.percentage.normalize()
        );
    }
    match session.total_percentage() {
        Some(total) => println!("Total: {}%", total.normalize()),
        None => println!("Total: out of range"),
    }
    if let Some(message) = session.validation_message() {
        println!("{}", message);
    }
    if let Some(breakdown) = session.breakdown() {
        println!(
            "Last breakdown: {} at {} per hour",
            month_name(breakdown.month).unwrap_or("?"),
            format_money(symbol, breakdown.hourly_rate_value())
        );
    }
}

fn print_result(
    result: &budget_engine::models::BreakdownResult,
    symbol: &str,
    json: bool,
) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(result).into_diagnostic()?;
        println!("{}", text);
    } else {
        print!("{}", render_report(result, symbol));
    }
    Ok(())
}

/// Accepts a month name (or its three-letter prefix) or a number from 1 to 12.
fn parse_month(value: &str) -> std::result::Result<u32, String> {
    let trimmed = value.trim();
    if let Ok(number) = trimmed.parse::<u32>() {
        return match number {
            1..=12 => Ok(number - 1),
            _ => Err(format!("month number must be between 1 and 12, got {}", number)),
        };
    }

    let lower = trimmed.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_lowercase();
            name == lower || (lower.len() >= 3 && name.starts_with(&lower))
        })
        .map(|index| index as u32)
        .ok_or_else(|| format!("unknown month '{}'", value))
}

fn parse_item(value: &str) -> std::result::Result<BudgetItem, String> {
    let (name, percentage) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PERCENT, got '{}'", value))?;
    Ok(BudgetItem::new(name.trim(), parse_percentage(percentage)))
}
