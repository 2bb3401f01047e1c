//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{Error, db::initialize, stores::SQLiteRecordStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for transactions and budgets.
    pub store: SQLiteRecordStore,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self {
            store: SQLiteRecordStore::new(connection),
        })
    }
}

impl FromRef<AppState> for SQLiteRecordStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
