mod advisory;
mod aggregate;
mod engine;
mod kinds;

pub(crate) use advisory::{Advisory, Severity};
pub(crate) use aggregate::{aggregate, AggregateSnapshot};
pub(crate) use engine::generate_advisories;
