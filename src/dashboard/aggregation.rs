//! Transaction data aggregation for the dashboard charts and budget list.
//!
//! Provides functions to total transactions by month and by category, and to
//! compare each budget against what was actually spent.

use serde::Serialize;

use crate::{budget::Budget, category::Category, transaction::Transaction};

/// The summed amount of all transactions in one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// The month label, e.g. "Jan".
    pub month: &'static str,
    /// The sum of the transaction amounts.
    pub total: f64,
}

/// The summed amount of all transactions in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category being totalled.
    pub category: Category,
    /// The sum of the transaction amounts, zero if there are none.
    pub total: f64,
}

/// A budget next to the amount actually spent against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetComparison {
    /// The budget's category.
    pub category: Category,
    /// The budget's month label, as entered.
    pub month: String,
    /// The budgeted amount.
    pub budget: f64,
    /// The total of the transactions with the same category and month label.
    pub spent: f64,
}

/// Totals transaction amounts by month.
///
/// Only months with at least one transaction appear. Months are listed in
/// the order they are first seen in `transactions`, not in calendar order.
/// Transactions with an unparseable date are left out.
///
/// Months are keyed by label only, so January 2023 and January 2024 are
/// added together.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut totals: Vec<MonthlyTotal> = Vec::new();

    for transaction in transactions {
        let Some(month) = transaction.month_label() else {
            tracing::debug!(
                "skipping transaction {} with unparseable date {:?}",
                transaction.id,
                transaction.date
            );
            continue;
        };

        match totals.iter_mut().find(|total| total.month == month) {
            Some(total) => total.total += transaction.amount,
            None => totals.push(MonthlyTotal {
                month,
                total: transaction.amount,
            }),
        }
    }

    totals
}

/// Totals transaction amounts for every category.
///
/// Always returns one entry per category in [Category::ALL] order, using
/// zero for categories without transactions.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryTotal {
            category,
            total: transactions
                .iter()
                .filter(|transaction| transaction.category == category)
                .map(|transaction| transaction.amount)
                .sum(),
        })
        .collect()
}

/// Compares each budget with the transactions in its category and month.
///
/// Returns one row per budget in the same order as `budgets`. A transaction
/// counts towards a budget when the categories are equal and the month label
/// of its date is exactly the budget's month string. A budget month such as
/// "jan" or "January" therefore never matches and reports zero spent.
pub fn budget_comparison(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetComparison> {
    budgets
        .iter()
        .map(|budget| BudgetComparison {
            category: budget.category,
            month: budget.month.clone(),
            budget: budget.amount,
            spent: transactions
                .iter()
                .filter(|transaction| {
                    transaction.category == budget.category
                        && transaction.month_label() == Some(budget.month.as_str())
                })
                .map(|transaction| transaction.amount)
                .sum(),
        })
        .collect()
}
