//! Implements a SQLite backed record store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    budget::{Budget, NewBudget, create_budget, get_all_budgets},
    database_id::TransactionId,
    stores::RecordStore,
    transaction::{
        NewTransaction, Transaction, create_transaction, delete_transaction, get_all_transactions,
    },
};

/// Stores transactions and budgets in a SQLite database.
///
/// The tables must exist before the store is used, see
/// [initialize_db](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteRecordStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteRecordStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl RecordStore for SQLiteRecordStore {
    fn insert_transaction(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let connection = self.lock()?;

        create_transaction(transaction, &connection)
            .inspect(|transaction| tracing::debug!("created transaction {}", transaction.id))
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        get_all_transactions(&*self.lock()?)
    }

    fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        let rows_affected = delete_transaction(id, &*self.lock()?)?;

        if rows_affected == 0 {
            tracing::debug!("tried to delete transaction {id}, but it does not exist");
        }

        Ok(())
    }

    fn insert_budget(&self, budget: NewBudget) -> Result<Budget, Error> {
        let connection = self.lock()?;

        create_budget(budget, &connection)
            .inspect(|budget| tracing::debug!("created budget {}", budget.id))
    }

    fn list_budgets(&self) -> Result<Vec<Budget>, Error> {
        get_all_budgets(&*self.lock()?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{
        Error, NewBudget, NewTransaction,
        category::Category,
        db::initialize,
        stores::{RecordStore, SQLiteRecordStore},
    };

    fn get_store() -> SQLiteRecordStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        SQLiteRecordStore::new(Arc::new(Mutex::new(connection)))
    }

    fn lunch() -> NewTransaction {
        NewTransaction {
            amount: 18.5,
            description: "Lunch".to_owned(),
            date: "2024-01-05".to_owned(),
            category: Category::Food,
        }
    }

    #[test]
    fn created_transaction_is_listed() {
        let store = get_store();

        let created = store.insert_transaction(lunch()).unwrap();

        let listed = store.list_transactions().unwrap();
        assert_eq!(listed, vec![lunch().finalise(created.id)]);
    }

    #[test]
    fn deleted_transaction_is_not_listed() {
        let store = get_store();
        let deleted = store.insert_transaction(lunch()).unwrap();
        let kept = store.insert_transaction(lunch()).unwrap();

        store.delete_transaction(deleted.id).unwrap();

        let listed = store.list_transactions().unwrap();
        assert!(listed.iter().all(|transaction| transaction.id != deleted.id));
        assert_eq!(listed, vec![kept]);
    }

    #[test]
    fn deleting_missing_transaction_succeeds_and_changes_nothing() {
        let store = get_store();
        let kept = store.insert_transaction(lunch()).unwrap();

        let result = store.delete_transaction(kept.id + 1);

        assert_eq!(result, Ok(()));
        assert_eq!(store.list_transactions(), Ok(vec![kept]));
    }

    #[test]
    fn created_budget_is_listed() {
        let store = get_store();
        let budget = NewBudget {
            category: Category::Utilities,
            amount: 200.0,
            month: "Feb".to_owned(),
        };

        let created = store.insert_budget(budget.clone()).unwrap();

        assert_eq!(store.list_budgets(), Ok(vec![budget.finalise(created.id)]));
    }

    #[test]
    fn budgets_cannot_be_deleted_or_updated() {
        let store = get_store();
        let created = store.insert_budget(NewBudget::default()).unwrap();

        assert_eq!(
            store.delete_budget(created.id),
            Err(Error::UnsupportedOperation("delete budget"))
        );
        assert_eq!(
            store.update_budget(created.id, NewBudget::default()),
            Err(Error::UnsupportedOperation("update budget"))
        );
        assert_eq!(store.list_budgets(), Ok(vec![created]));
    }

    #[test]
    fn poisoned_lock_is_a_storage_error() {
        let store = get_store();
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.connection.lock().unwrap();
            panic!("poison the connection lock");
        })
        .join();

        assert_eq!(store.list_transactions(), Err(Error::DatabaseLockError));
    }
}
