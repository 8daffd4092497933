use serde::Serialize;

use crate::budget::{BudgetPlan, Summary};
use crate::types::UserId;

/// One line of `budget` output.
///
/// Flattened so the plan's `breakdown` and `recommendations` sit at the top level
/// next to the user's lifetime totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    pub user: UserId,
    #[serde(flatten)]
    pub summary: Summary,
    #[serde(flatten)]
    pub budget: BudgetPlan
}
