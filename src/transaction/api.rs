//! JSON route handlers for listing, creating and deleting transactions.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::TransactionId,
    stores::{RecordStore, SQLiteRecordStore},
    transaction::{NewTransaction, Transaction},
};

/// The body sent back after a delete request.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always true, a missing transaction counts as deleted.
    pub success: bool,
}

/// A route handler that responds with every transaction as JSON.
pub async fn list_transactions_endpoint(
    State(store): State<SQLiteRecordStore>,
) -> Result<Json<Vec<Transaction>>, Error> {
    store
        .list_transactions()
        .inspect_err(|error| tracing::error!("could not list transactions: {error}"))
        .map(Json)
}

/// A route handler that stores the transaction in the request body and
/// responds with the stored transaction, including its new ID.
///
/// The fields are not checked.
pub async fn create_transaction_endpoint(
    State(store): State<SQLiteRecordStore>,
    Json(transaction): Json<NewTransaction>,
) -> Result<Json<Transaction>, Error> {
    store
        .insert_transaction(transaction)
        .inspect_err(|error| tracing::error!("could not create transaction: {error}"))
        .map(Json)
}

/// A route handler for deleting a transaction.
///
/// Responds with `{"success": true}` whether or not the transaction existed.
pub async fn delete_transaction_endpoint(
    State(store): State<SQLiteRecordStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<DeleteResponse>, Error> {
    store
        .delete_transaction(transaction_id)
        .inspect_err(|error| {
            tracing::error!("could not delete transaction {transaction_id}: {error}")
        })?;

    Ok(Json(DeleteResponse { success: true }))
}
