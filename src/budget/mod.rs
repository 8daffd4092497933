//! Categorization and budget allocation.
//!
//! Everything in here is a pure function of its arguments: no I/O, no shared
//! state. The engine calls [`Categorizer::categorize`] while ingesting and
//! [`aggregate`] followed by [`allocate`] when producing a report.

mod aggregator;
mod allocator;
mod categorizer;
mod errors;
mod keywords;

pub use aggregator::{aggregate, summarize, window_start, CategoryTotal, CategoryTotals, Summary, DEFAULT_WINDOW_DAYS};
pub use allocator::{allocate, BudgetPlan, DEFAULT_SAVINGS_PERCENT};
#[cfg(test)]
pub use allocator::BudgetEntry;
pub use categorizer::Categorizer;
pub use keywords::KeywordTable;
