use chrono::NaiveDate;

use crate::import::Dataset;
use crate::insights::{aggregate, generate_advisories, Advisory, AggregateSnapshot};
use crate::listing::{build_rows, DisplayRow};

/// One full pass over a dataset: totals, advisories and display rows.
pub(crate) struct Report {
    pub(crate) dataset: Dataset,
    pub(crate) snapshot: AggregateSnapshot,
    pub(crate) advisories: Vec<Advisory>,
    pub(crate) rows: Vec<DisplayRow>,
}

impl Report {
    pub(crate) fn build(dataset: Dataset, today: NaiveDate) -> Self {
        let snapshot = aggregate(&dataset.transactions, &dataset.budgets);
        let advisories = generate_advisories(&snapshot, &dataset.categories, &dataset.budgets);
        let rows = build_rows(&dataset.transactions, &dataset.categories, today);

        tracing::info!(
            advisories = advisories.len(),
            rows = rows.len(),
            "Report built"
        );

        Self {
            dataset,
            snapshot,
            advisories,
            rows,
        }
    }
}
