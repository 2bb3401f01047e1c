//! Monthly budgets per spending category.
//!
//! Budgets can be created and listed. There is no way to edit or delete one.

mod api;
mod core;

pub use api::{create_budget_endpoint, list_budgets_endpoint};
pub use core::{Budget, NewBudget, create_budget, create_budget_table, get_all_budgets};
