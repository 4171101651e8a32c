use anyhow::Result;

use crate::config::Config;
use crate::format::{format_amount, format_percent};
use crate::import::Dataset;
use crate::report::Report;
use crate::ui::util::truncate;

pub(crate) fn as_cli(config: &Config) -> Result<()> {
    let Some(command) = config.command.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "insights" | "i" => cli_insights(config),
        "list" | "ls" => cli_list(config),
        "summary" | "s" => cli_summary(config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendwise {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Spendwise — rule-based spending insights");
    println!();
    println!("Usage: spendwise [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  insights, i                   Print generated advisories");
    println!("  list, ls                      Print transactions, newest first");
    println!("  summary, s                    Print income, expense and monthly totals");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --data-dir, -d <path>         Directory holding transactions.csv,");
    println!("                                categories.csv and budgets.csv");
    println!("                                (or set SPENDWISE_DATA_DIR)");
    println!("  --verbose, -v                 Debug logging (RUST_LOG overrides)");
}

fn load_report(config: &Config) -> Result<Report> {
    let dataset = Dataset::load(&config.data_dir)?;
    Ok(Report::build(dataset, chrono::Local::now().date_naive()))
}

fn cli_insights(config: &Config) -> Result<()> {
    let report = load_report(config)?;
    if report.advisories.is_empty() {
        println!("No insights yet. Add some transactions first.");
        return Ok(());
    }

    for advisory in &report.advisories {
        let marker = if advisory.priority { "★" } else { "•" };
        println!("{marker} [{}] {}", advisory.severity, advisory.title);
        println!("  {}", advisory.message);
        if let Some(link) = &advisory.source_link {
            println!("  Learn more: {link}");
        }
        println!();
    }
    Ok(())
}

fn cli_list(config: &Config) -> Result<()> {
    let report = load_report(config)?;
    if report.rows.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    println!(
        "{:<12} {:<32} {:<18} {:>14}  When",
        "Date", "Description", "Category", "Amount"
    );
    println!("{}", "─".repeat(92));
    for row in &report.rows {
        println!(
            "{:<12} {:<32} {:<18} {:>14}  {}",
            row.date.format("%Y-%m-%d"),
            truncate(&row.label, 32),
            truncate(&row.category, 18),
            row.amount,
            row.when,
        );
    }
    Ok(())
}

fn cli_summary(config: &Config) -> Result<()> {
    let report = load_report(config)?;
    let snap = &report.snapshot;

    println!("Spendwise — {} transactions", snap.transaction_count);
    println!("{}", "─".repeat(40));
    println!("  Income:       {}", format_amount(snap.total_income));
    println!("  Expenses:     {}", format_amount(snap.total_expense));
    println!("  Net:          {}", format_amount(snap.net()));
    match snap.savings_rate {
        Some(rate) => println!("  Savings rate: {}", format_percent(rate)),
        None => println!("  Savings rate: n/a"),
    }

    if !snap.per_category_expense.is_empty() {
        println!();
        println!("Spending by Category:");
        for (id, amount) in &snap.per_category_expense {
            let name = crate::models::Category::label_for(&report.dataset.categories, id);
            println!("  {name:<24} {}", format_amount(*amount));
        }
    }

    if !snap.per_month_expense.is_empty() {
        println!();
        println!("Spending by Month:");
        for (month, amount) in &snap.per_month_expense {
            println!("  {month:<24} {}", format_amount(*amount));
        }
    }

    Ok(())
}
