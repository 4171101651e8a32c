use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Budget {
    pub category_id: String,
    /// Spending limit, never negative.
    pub amount: Decimal,
}

impl Budget {
    pub fn new(category_id: String, amount: Decimal) -> Self {
        Self {
            category_id,
            amount,
        }
    }

    /// First budget for `category_id` in slice order. Later duplicates are ignored.
    pub fn find_for<'a>(budgets: &'a [Budget], category_id: &str) -> Option<&'a Budget> {
        budgets.iter().find(|b| b.category_id == category_id)
    }
}
