use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::BankTransfer => "Bank Transfer",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cash" => Self::Cash,
            "card" | "credit card" | "debit card" | "credit" | "debit" => Self::Card,
            "bank transfer" | "transfer" | "bank" | "ach" | "wire" => Self::BankTransfer,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dated money movement. Positive amounts are credits (income),
/// negative amounts are debits (expenses).
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub payment_method: PaymentMethod,
}

impl Transaction {
    /// Zero counts as a credit: it never contributes to expense totals.
    pub fn is_credit(&self) -> bool {
        self.amount >= Decimal::ZERO
    }

    pub fn is_debit(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}
