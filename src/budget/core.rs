//! The budget model and its database queries.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{Error, category::Category, database_id::BudgetId};

/// A spending ceiling for one category in one month.
///
/// Nothing stops two budgets from covering the same category and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The ID of the budget, assigned by the store.
    pub id: BudgetId,
    /// The category the budget applies to.
    pub category: Category,
    /// The most that should be spent in the category for the month.
    pub amount: f64,
    /// A short month label such as "Jan".
    ///
    /// This is free text. It is compared verbatim against the month label of
    /// each transaction date, so "jan" or "January" never match anything.
    pub month: String,
}

/// The fields of a budget that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewBudget {
    /// See [Budget::category].
    pub category: Category,
    /// See [Budget::amount].
    pub amount: f64,
    /// See [Budget::month].
    pub month: String,
}

impl Default for NewBudget {
    fn default() -> Self {
        Self {
            category: Category::Food,
            amount: 0.0,
            month: String::new(),
        }
    }
}

impl NewBudget {
    /// Attach the store-assigned `id`.
    pub fn finalise(self, id: BudgetId) -> Budget {
        Budget {
            id,
            category: self.category,
            amount: self.amount,
            month: self.month,
        }
    }
}

/// Insert `budget` and return it with its generated ID.
pub fn create_budget(budget: NewBudget, connection: &Connection) -> Result<Budget, Error> {
    connection.execute(
        "INSERT INTO budget (category, amount, month) VALUES (?1, ?2, ?3)",
        (budget.category, budget.amount, &budget.month),
    )?;

    let id = connection.last_insert_rowid();

    Ok(budget.finalise(id))
}

/// Retrieve every budget in the order they were created.
pub fn get_all_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare("SELECT id, category, amount, month FROM budget ORDER BY id ASC")?
        .query_map([], map_row)?
        .map(|maybe_budget| maybe_budget.map_err(|error| error.into()))
        .collect()
}

/// Create the budget table.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budget (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                month TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        amount: row.get(2)?,
        month: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        category::Category,
        budget::{NewBudget, create_budget, create_budget_table, get_all_budgets},
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_budget_table(&connection).expect("Could not create budget table");
        connection
    }

    #[test]
    fn create_assigns_id_and_keeps_fields() {
        let connection = get_test_connection();
        let want = NewBudget {
            category: Category::Transport,
            amount: 120.0,
            month: "Mar".to_owned(),
        };

        let got = create_budget(want.clone(), &connection).unwrap();

        assert!(got.id > 0);
        assert_eq!(got, want.finalise(got.id));
    }

    #[test]
    fn duplicate_category_and_month_are_allowed() {
        let connection = get_test_connection();
        let budget = NewBudget {
            category: Category::Food,
            amount: 500.0,
            month: "Jan".to_owned(),
        };

        let first = create_budget(budget.clone(), &connection).unwrap();
        let second = create_budget(budget, &connection).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(get_all_budgets(&connection), Ok(vec![first, second]));
    }

    #[test]
    fn month_is_stored_verbatim() {
        let connection = get_test_connection();

        let budget = create_budget(
            NewBudget {
                month: " january ".to_owned(),
                ..Default::default()
            },
            &connection,
        )
        .unwrap();

        let stored = get_all_budgets(&connection).unwrap();
        assert_eq!(stored[0].month, " january ");
        assert_eq!(stored[0], budget);
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let budget: NewBudget = serde_json::from_str(r#"{"month": "Feb"}"#).unwrap();

        assert_eq!(budget.category, Category::Food);
        assert_eq!(budget.amount, 0.0);
        assert_eq!(budget.month, "Feb");
    }
}
