//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating transactions
//! - Database functions for storing, listing and deleting transactions
//! - JSON API handlers for the transaction routes

mod api;
mod core;

pub use api::{create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint};
pub use core::{
    NewTransaction, Transaction, create_transaction, create_transaction_table, delete_transaction,
    get_all_transactions,
};
