mod budget_engine;
mod report;

pub use budget_engine::{BudgetEngine, DEFAULT_BACKPRESSURE};
pub use report::UserReport;
