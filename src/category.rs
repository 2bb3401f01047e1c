//! The fixed set of spending categories shared by transactions, budgets and
//! the dashboard aggregations.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// The kind of spending a transaction or budget belongs to.
///
/// The variants are listed in display order, which is also the order that
/// [category_totals](crate::category_totals) reports them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Groceries, eating out.
    Food,
    /// Fuel, fares, parking.
    Transport,
    /// Power, water, internet.
    Utilities,
    /// Going out, subscriptions, hobbies.
    Entertainment,
    /// Everything else.
    Other,
}

impl Category {
    /// Every category in declared order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Other,
    ];

    /// The name of the category as shown to users and stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }

    /// Position of the category in [Category::ALL].
    pub fn index(&self) -> usize {
        match self {
            Category::Food => 0,
            Category::Transport => 1,
            Category::Utilities => 2,
            Category::Entertainment => 3,
            Category::Other => 4,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string did not name one of the known [Category] variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a known category")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Category, UnknownCategory};

    #[test]
    fn all_is_in_declared_order() {
        let names: Vec<_> = Category::ALL.iter().map(Category::as_str).collect();

        assert_eq!(
            names,
            vec!["Food", "Transport", "Utilities", "Entertainment", "Other"]
        );
    }

    #[test]
    fn index_matches_position_in_all() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position, "wrong index for {category}");
        }
    }

    #[test]
    fn parses_own_name() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Ok(category));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            Category::from_str("food"),
            Err(UnknownCategory("food".to_owned()))
        );
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();

        assert_eq!(json, "\"Entertainment\"");
    }

    #[test]
    fn deserialize_rejects_unknown_category() {
        let result = serde_json::from_str::<Category>("\"Groceries\"");

        assert!(result.is_err());
    }
}
