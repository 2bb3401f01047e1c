//! Contains the trait and implementation for the object that stores
//! transactions and budgets.

mod sqlite;

pub use sqlite::SQLiteRecordStore;

use crate::{
    Error,
    budget::{Budget, NewBudget},
    database_id::{BudgetId, TransactionId},
    transaction::{NewTransaction, Transaction},
};

/// Handles the creation, retrieval and deletion of transactions and budgets.
///
/// Implementers do not validate records, whatever is given is stored.
pub trait RecordStore {
    /// Store a new transaction and return it with its assigned ID.
    fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve every transaction in insertion order.
    fn list_transactions(&self) -> Result<Vec<Transaction>, Error>;

    /// Remove the transaction with `id`.
    ///
    /// Removing a transaction that does not exist succeeds and changes nothing.
    fn delete_transaction(&self, id: TransactionId) -> Result<(), Error>;

    /// Store a new budget and return it with its assigned ID.
    fn insert_budget(&self, budget: NewBudget) -> Result<Budget, Error>;

    /// Retrieve every budget in insertion order.
    fn list_budgets(&self) -> Result<Vec<Budget>, Error>;

    /// Remove a budget.
    ///
    /// Not offered yet, returns [Error::UnsupportedOperation].
    fn delete_budget(&self, _id: BudgetId) -> Result<(), Error> {
        Err(Error::UnsupportedOperation("delete budget"))
    }

    /// Replace the fields of a budget.
    ///
    /// Not offered yet, returns [Error::UnsupportedOperation].
    fn update_budget(&self, _id: BudgetId, _budget: NewBudget) -> Result<Budget, Error> {
        Err(Error::UnsupportedOperation("update budget"))
    }
}
