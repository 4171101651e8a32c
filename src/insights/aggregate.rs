use rust_decimal::Decimal;

use crate::models::{Budget, Transaction};

/// Totals derived from one pass over the transaction list.
///
/// Recomputed whenever the inputs change; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct AggregateSnapshot {
    pub(crate) total_income: Decimal,
    pub(crate) total_expense: Decimal,
    /// Debit totals keyed by category id, in first-seen order.
    pub(crate) per_category_expense: Vec<(String, Decimal)>,
    /// Debit totals keyed by full month name, in first-seen input order.
    pub(crate) per_month_expense: Vec<(String, Decimal)>,
    /// `None` when there is no income to divide by.
    pub(crate) savings_rate: Option<Decimal>,
    pub(crate) transaction_count: usize,
}

impl AggregateSnapshot {
    pub(crate) fn category_expense(&self, category_id: &str) -> Decimal {
        self.per_category_expense
            .iter()
            .find(|(id, _)| id == category_id)
            .map(|(_, total)| *total)
            .unwrap_or(Decimal::ZERO)
    }

    pub(crate) fn net(&self) -> Decimal {
        self.total_income - self.total_expense
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

/// Sum income and expenses, bucket expenses by category and month.
pub(crate) fn aggregate(transactions: &[Transaction], _budgets: &[Budget]) -> AggregateSnapshot {
    let mut snapshot = AggregateSnapshot {
        transaction_count: transactions.len(),
        ..Default::default()
    };

    for txn in transactions {
        if !txn.is_debit() {
            snapshot.total_income = snapshot.total_income.saturating_add(txn.amount);
            continue;
        }

        let spent = txn.abs_amount();
        snapshot.total_expense = snapshot.total_expense.saturating_add(spent);
        add_to_bucket(&mut snapshot.per_category_expense, &txn.category_id, spent);
        // Month name only; no year and no re-sorting by date
        let month = txn.date.format("%B").to_string();
        add_to_bucket(&mut snapshot.per_month_expense, &month, spent);
    }

    if snapshot.total_income > Decimal::ZERO {
        // Net over income is at most 1, so overflow only happens far below zero
        let rate = percent_of(snapshot.net(), snapshot.total_income).unwrap_or(Decimal::MIN);
        snapshot.savings_rate = Some(rate);
    }

    tracing::debug!(
        transactions = snapshot.transaction_count,
        income = %snapshot.total_income,
        expense = %snapshot.total_expense,
        months = snapshot.per_month_expense.len(),
        "Aggregated transactions"
    );

    snapshot
}

/// `part / whole * 100`, or `None` when the ratio does not fit in a `Decimal`.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

fn add_to_bucket(buckets: &mut Vec<(String, Decimal)>, key: &str, amount: Decimal) {
    match buckets.iter_mut().find(|(k, _)| k == key) {
        Some((_, total)) => *total = total.saturating_add(amount),
        None => buckets.push((key.to_string(), amount)),
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
