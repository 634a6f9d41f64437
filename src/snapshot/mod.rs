//! Typed, defaulted view of the host's summary document.

mod parser;
mod types;

pub use parser::parse;
pub(crate) use parser::parse_object;
pub use types::{ExpenseTrend, SavingsGoal, Snapshot, DEFAULT_GOAL_TITLE, PLACEHOLDER};
