#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{db::initialize, stores::SQLiteRecordStore};

pub(crate) use html::{assert_valid_html, select_text};
pub(crate) use http::parse_json;

/// A record store backed by a fresh in-memory database.
pub(crate) fn get_test_store() -> SQLiteRecordStore {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");

    SQLiteRecordStore::new(Arc::new(Mutex::new(connection)))
}
