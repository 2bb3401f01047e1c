//! Dashboard module
//!
//! Provides the page for entering transactions and budgets, along with charts
//! of monthly and per-category spending and a budget-vs-actual list.

mod aggregation;
mod charts;
mod form;
mod handlers;
mod state;

pub use aggregation::{
    BudgetComparison, CategoryTotal, MonthlyTotal, budget_comparison, category_totals,
    monthly_totals,
};
pub use handlers::{
    delete_transaction_form, get_dashboard_page, submit_budget_form, submit_transaction_form,
};
