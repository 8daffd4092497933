use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, error};

use crate::budget::{CategoryTotal, CategoryTotals};
use crate::types::Percent;

pub const DEFAULT_SAVINGS_PERCENT: u8 = 20;

const SAVINGS_CATEGORY: &str = "Savings";
const TRAVEL_CATEGORY: &str = "Travel";
const TRAVEL_LIMIT: Percent = Percent::whole(15);
const FALLBACK_TOP_CATEGORY: &str = "Other";

const DEFAULT_PLAN: [(&str, u8); 4] = [
    (SAVINGS_CATEGORY, 20),
    ("Food", 30),
    ("Rent", 40),
    ("Other", 10),
];

const NO_DATA_RECOMMENDATIONS: [&str; 2] = [
    "Not enough expense data in last 30 days. Using a default 50/30/20-style plan.",
    "Track your expenses for a week to get more personalized recommendations.",
];

const TRAVEL_RECOMMENDATION: &str = "Your travel expenses are higher than typical. Consider pooling rides or using public transit where feasible.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEntry {
    pub category: String,
    pub percent: Percent
}

impl BudgetEntry {
    pub fn new(category: impl Into<String>, percent: Percent) -> Self {
        Self {
            category: category.into(),
            percent
        }
    }
}

/// A suggested monthly budget: percent per category plus short advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPlan {
    pub breakdown: Vec<BudgetEntry>,
    pub recommendations: Vec<String>
}

impl BudgetPlan {
    /// Sum of every entry, savings included.
    pub fn total_percent(&self) -> Percent {
        self.breakdown.iter().map(|entry| entry.percent).sum()
    }
}

/// Turns expense totals into a percentage budget with a savings slice.
///
/// With no spending (`grand_total <= 0`) a fixed starter plan is returned.
/// Otherwise each category gets its share of spending rounded to one decimal,
/// ordered by amount, largest first. If those shares plus `savings_percent`
/// exceed 100 they are scaled down to fit and rounded again, one entry at a
/// time, so the final total may be off 100 by a few tenths. Savings is always
/// the last entry.
pub fn allocate(totals: &CategoryTotals, savings_percent: Percent) -> BudgetPlan {
    let grand_total = totals.grand_total();

    if grand_total <= Decimal::ZERO {
        debug!("No spending to allocate, using the default plan");
        return default_plan();
    }

    let mut ranked: Vec<&CategoryTotal> = totals.iter().collect();
    ranked.sort_by(|left, right| right.amount.cmp(&left.amount));

    let mut breakdown: Vec<BudgetEntry> = ranked.into_iter()
        .map(|total| {
            let percent = match Percent::from_ratio(total.amount, grand_total) {
                Some(percent) => percent,
                None => {
                    error!("Percent overflow for [{}] of [{grand_total}], allocating [{}]", total.amount, Percent::ZERO);
                    Percent::ZERO
                }
            };
            BudgetEntry::new(total.category.as_str(), percent)
        })
        .collect();

    let allocated: Percent = breakdown.iter().map(|entry| entry.percent).sum();

    if allocated.value() + savings_percent.value() > Percent::HUNDRED.value() {
        let scale = (Percent::HUNDRED.value() - savings_percent.value()) / allocated.value().max(Decimal::ONE);
        debug!("Allocated [{allocated}%] leaves no room for [{savings_percent}%] savings, scaling by [{scale}]");

        for entry in breakdown.iter_mut() {
            entry.percent = entry.percent.scaled(scale);
        }
    }

    let top_category = breakdown.first()
        .map(|entry| entry.category.clone())
        .unwrap_or_else(|| FALLBACK_TOP_CATEGORY.to_string());

    breakdown.push(BudgetEntry::new(SAVINGS_CATEGORY, savings_percent));

    let recommendations = recommend(&breakdown, &top_category, savings_percent);

    BudgetPlan { breakdown, recommendations }
}

fn recommend(breakdown: &[BudgetEntry], top_category: &str, savings_percent: Percent) -> Vec<String> {
    let mut recommendations = vec![format!(
        "Your highest spending category is {top_category}. Consider setting weekly limits or using cash-only for this category."
    )];

    let heavy_travel = breakdown.iter()
        .any(|entry| entry.category == TRAVEL_CATEGORY && entry.percent > TRAVEL_LIMIT);

    if heavy_travel {
        recommendations.push(TRAVEL_RECOMMENDATION.to_string());
    } else {
        recommendations.push(format!(
            "Aim to save at least {}% by automating transfers right after payday.",
            savings_percent.value().normalize()
        ));
    }

    recommendations
}

fn default_plan() -> BudgetPlan {
    BudgetPlan {
        breakdown: DEFAULT_PLAN.iter()
            .map(|(category, percent)| BudgetEntry::new(*category, Percent::from(*percent)))
            .collect(),
        recommendations: NO_DATA_RECOMMENDATIONS.iter()
            .map(|recommendation| recommendation.to_string())
            .collect()
    }
}
