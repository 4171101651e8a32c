use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::{Budget, Category, PaymentMethod, Transaction};

pub(crate) const TRANSACTIONS_FILE: &str = "transactions.csv";
pub(crate) const CATEGORIES_FILE: &str = "categories.csv";
pub(crate) const BUDGETS_FILE: &str = "budgets.csv";

/// Everything the aggregator and rule engine need, loaded from one directory.
#[derive(Debug, Clone, Default)]
pub(crate) struct Dataset {
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) categories: Vec<Category>,
    pub(crate) budgets: Vec<Budget>,
}

impl Dataset {
    /// Load `transactions.csv` (required) plus the optional
    /// `categories.csv` and `budgets.csv` from `dir`.
    pub(crate) fn load(dir: &Path) -> Result<Self> {
        let txn_path = dir.join(TRANSACTIONS_FILE);
        if !txn_path.exists() {
            anyhow::bail!("File not found: {}", txn_path.display());
        }
        let transactions = load_transactions(&txn_path)?;

        let cat_path = dir.join(CATEGORIES_FILE);
        let categories = if cat_path.exists() {
            load_categories(&cat_path)?
        } else {
            tracing::warn!(path = %cat_path.display(), "No categories file, labels will show as Unknown");
            Vec::new()
        };

        let budget_path = dir.join(BUDGETS_FILE);
        let budgets = if budget_path.exists() {
            load_budgets(&budget_path)?
        } else {
            tracing::warn!(path = %budget_path.display(), "No budgets file, budget alerts disabled");
            Vec::new()
        };

        Ok(Self {
            transactions,
            categories,
            budgets,
        })
    }
}

/// Header-indexed view over a CSV file's rows.
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn read(path: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

        let headers = rdr
            .headers()
            .with_context(|| format!("Failed to read header of {}", path.display()))?
            .iter()
            .map(|h| h.to_lowercase())
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result.with_context(|| format!("Failed to read {}", path.display()))?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(Self { headers, rows })
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require(&self, name: &str, path: &Path) -> Result<usize> {
        self.column(name)
            .ok_or_else(|| anyhow::anyhow!("{}: missing '{name}' column", path.display()))
    }
}

fn cell(row: &[String], col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c)).map(String::as_str).unwrap_or("")
}

pub(crate) fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let table = Table::read(path)?;
    let id_col = table.require("id", path)?;
    let cat_col = table.require("category_id", path)?;
    let amount_col = table.require("amount", path)?;
    let date_col = table.require("date", path)?;
    let desc_col = table.column("description");
    let method_col = table.column("payment_method");

    let mut transactions = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        // Header is line 1
        let line = i + 2;
        let date_str = cell(row, Some(date_col));
        if date_str.is_empty() {
            anyhow::bail!("{} line {line}: missing date", path.display());
        }

        let date = parse_date(date_str).with_context(|| {
            format!("{} line {line}: failed to parse date '{date_str}'", path.display())
        })?;
        let amount = parse_decimal(cell(row, Some(amount_col)))
            .with_context(|| format!("{} line {line}: failed to parse amount", path.display()))?;

        let id = match cell(row, Some(id_col)) {
            "" => format!("row-{line}"),
            id => id.to_string(),
        };

        transactions.push(Transaction {
            id,
            category_id: cell(row, Some(cat_col)).to_string(),
            amount,
            date,
            description: cell(row, desc_col).to_string(),
            payment_method: PaymentMethod::parse(cell(row, method_col)),
        });
    }

    tracing::info!(count = transactions.len(), path = %path.display(), "Loaded transactions");
    Ok(transactions)
}

pub(crate) fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let table = Table::read(path)?;
    let id_col = table.require("id", path)?;
    let name_col = table.require("name", path)?;
    let color_col = table.column("color");

    let categories: Vec<Category> = table
        .rows
        .iter()
        .filter(|row| !cell(row, Some(id_col)).is_empty())
        .map(|row| {
            Category::new(
                cell(row, Some(id_col)).to_string(),
                cell(row, Some(name_col)).to_string(),
                cell(row, color_col).to_string(),
            )
        })
        .collect();

    tracing::info!(count = categories.len(), path = %path.display(), "Loaded categories");
    Ok(categories)
}

pub(crate) fn load_budgets(path: &Path) -> Result<Vec<Budget>> {
    let table = Table::read(path)?;
    let cat_col = table.require("category_id", path)?;
    let amount_col = table.require("amount", path)?;

    let mut budgets = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let line = i + 2;
        let category_id = cell(row, Some(cat_col));
        if category_id.is_empty() {
            continue;
        }
        let amount = parse_decimal(cell(row, Some(amount_col)))
            .with_context(|| format!("{} line {line}: failed to parse amount", path.display()))?;
        if amount < Decimal::ZERO {
            anyhow::bail!(
                "{} line {line}: budget for '{category_id}' is negative",
                path.display()
            );
        }
        budgets.push(Budget::new(category_id.to_string(), amount));
    }

    tracing::info!(count = budgets.len(), path = %path.display(), "Loaded budgets");
    Ok(budgets)
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    // Two-digit years go before %Y, which would read "24" as year 24
    for fmt in &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%m-%d-%Y", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    anyhow::bail!("Could not parse date: {}", s)
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        anyhow::bail!("Missing amount");
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_str(&cleaned.replace('"', "")))
        .context(format!("Failed to parse '{}' as decimal", s))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
