mod budget;
mod category;
mod transaction;

pub use budget::Budget;
pub use category::{Category, DEFAULT_COLOR, UNKNOWN_LABEL};
pub use transaction::{PaymentMethod, Transaction};
