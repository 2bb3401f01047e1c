//! Finance Visualizer is a small web app for tracking personal spending.
//!
//! Transactions and monthly budgets are stored in SQLite and exposed through
//! a JSON API. A server-rendered dashboard shows monthly and per-category
//! spend as charts along with a budget-vs-actual comparison.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod budget;
mod category;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod html;
mod logging;
mod month;
mod not_found;
mod routing;
mod stores;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use budget::{Budget, NewBudget};
pub use category::{Category, UnknownCategory};
pub use dashboard::{
    BudgetComparison, CategoryTotal, MonthlyTotal, budget_comparison, category_totals,
    monthly_totals,
};
pub use database_id::{BudgetId, DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use month::month_label;
pub use routing::build_router;
pub use stores::{RecordStore, SQLiteRecordStore};
pub use transaction::{NewTransaction, Transaction};

use crate::{html::error_view, not_found::get_404_not_found_response};

/// How long in-flight requests get to finish once a shutdown signal arrives.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received ctrl+c signal, shutting down."),
        _ = terminate => tracing::info!("Received terminate signal, shutting down."),
    }

    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    ///
    /// This happens when another thread panicked while holding the lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The store does not offer this operation.
    ///
    /// Budgets can only be created and listed. Deleting or editing them is
    /// reserved for later and reports this error until it is built.
    #[error("the operation \"{0}\" is not supported")]
    UnsupportedOperation(&'static str),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::UnsupportedOperation(_) => StatusCode::NOT_IMPLEMENTED,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as a full HTML page for the dashboard routes.
    fn into_page_response(self) -> Response {
        let status = self.status_code();

        match self {
            Error::NotFound => get_404_not_found_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    status,
                    error_view(
                        "Internal Server Error",
                        status.as_str(),
                        "Sorry, something went wrong.",
                        "Try again later or check the server logs.",
                    ),
                )
                    .into_response()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            Error::NotFound | Error::UnsupportedOperation(_) => self.to_string(),
            // Storage details stay in the server logs.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                "an unexpected error occurred, check the server logs for more details".to_owned()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{Error, test_utils::parse_json};

    #[test]
    fn no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }

    #[tokio::test]
    async fn lock_error_hides_details_from_client() {
        let response = Error::DatabaseLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = parse_json(response).await;
        let message = body["error"].as_str().expect("error message should be a string");
        assert!(
            !message.contains("lock"),
            "'{message}' should not leak the internal error"
        );
    }

    #[tokio::test]
    async fn unsupported_operation_is_not_implemented() {
        let response = Error::UnsupportedOperation("delete budget").into_response();

        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
        let body = parse_json(response).await;
        assert_eq!(
            body["error"],
            "the operation \"delete budget\" is not supported"
        );
    }

    #[test]
    fn page_response_keeps_status_code() {
        let response = Error::NotFound.into_page_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
