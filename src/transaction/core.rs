//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, category::Category, database_id::TransactionId, month::month_label};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, insert a [NewTransaction] into a
/// [RecordStore](crate::RecordStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// The amount of money for this transaction.
    ///
    /// Expenses and income are not told apart, amounts are simply summed.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened, as entered by the user.
    pub date: String,
    /// The kind of spending.
    pub category: Category,
}

impl Transaction {
    /// The month label ("Jan".."Dec") for the transaction's date, or `None`
    /// if the date cannot be parsed.
    pub fn month_label(&self) -> Option<&'static str> {
        month_label(&self.date)
    }
}

/// The fields of a transaction that has not been stored yet.
///
/// Missing fields deserialize to empty values, the API does not check them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTransaction {
    /// See [Transaction::amount].
    pub amount: f64,
    /// See [Transaction::description].
    pub description: String,
    /// See [Transaction::date].
    pub date: String,
    /// See [Transaction::category].
    pub category: Category,
}

impl Default for NewTransaction {
    fn default() -> Self {
        Self {
            amount: 0.0,
            description: String::new(),
            date: String::new(),
            category: Category::Other,
        }
    }
}

impl NewTransaction {
    /// Attach the store-assigned `id`.
    pub fn finalise(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            description: self.description,
            date: self.date,
            category: self.category,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// The number of rows changed by a statement.
pub type RowsAffected = usize;

/// Insert `transaction` and return it with its generated ID.
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection.execute(
        "INSERT INTO \"transaction\" (amount, description, date, category) VALUES (?1, ?2, ?3, ?4)",
        (
            transaction.amount,
            &transaction.description,
            &transaction.date,
            transaction.category,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(transaction.finalise(id))
}

/// Retrieve a single transaction by ID.
#[cfg(test)]
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .prepare(
            "SELECT id, amount, description, date, category FROM \"transaction\" WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)
        .map_err(|error| error.into())
}

/// Retrieve every transaction in the order they were created.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare("SELECT id, amount, description, date, category FROM \"transaction\" ORDER BY id ASC")?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Delete the transaction with `id`.
///
/// Deleting a transaction that does not exist is not an error, the returned
/// row count is zero in that case.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

/// Create the transaction table.
///
/// IDs use AUTOINCREMENT so that the ID of a deleted transaction is never
/// handed out again.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                category TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a [Transaction].
///
/// Expects the columns `id, amount, description, date, category` in that order.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
        category: row.get(4)?,
    })
}
