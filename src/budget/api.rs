//! JSON route handlers for budgets.

use axum::{Json, extract::State};

use crate::{
    Error,
    budget::{Budget, NewBudget},
    stores::{RecordStore, SQLiteRecordStore},
};

/// A route handler that responds with every budget as JSON.
pub async fn list_budgets_endpoint(
    State(store): State<SQLiteRecordStore>,
) -> Result<Json<Vec<Budget>>, Error> {
    store
        .list_budgets()
        .inspect_err(|error| tracing::error!("could not list budgets: {error}"))
        .map(Json)
}

/// A route handler that stores the budget in the request body and responds
/// with the stored budget, including its new ID.
pub async fn create_budget_endpoint(
    State(store): State<SQLiteRecordStore>,
    Json(budget): Json<NewBudget>,
) -> Result<Json<Budget>, Error> {
    store
        .insert_budget(budget)
        .inspect_err(|error| tracing::error!("could not create budget: {error}"))
        .map(Json)
}
