use chrono::NaiveDate;

use crate::format::{format_signed_amount, time_from_now};
use crate::models::{Category, Transaction};

/// One line of the transaction listing, fully formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DisplayRow {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) date: NaiveDate,
    pub(crate) amount: String,
    pub(crate) when: String,
    pub(crate) category: String,
    pub(crate) color: String,
    pub(crate) is_credit: bool,
}

/// Build display rows, newest first. Rows sharing a date keep input order.
pub(crate) fn build_rows(
    transactions: &[Transaction],
    categories: &[Category],
    today: NaiveDate,
) -> Vec<DisplayRow> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .into_iter()
        .map(|txn| DisplayRow {
            id: txn.id.clone(),
            label: txn.description.clone(),
            date: txn.date,
            amount: format_signed_amount(txn.amount),
            when: time_from_now(txn.date, today),
            category: Category::label_for(categories, &txn.category_id).to_string(),
            color: Category::color_for(categories, &txn.category_id).to_string(),
            is_credit: txn.is_credit(),
        })
        .collect()
}
