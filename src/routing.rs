//! Application router configuration for the JSON API and the dashboard.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    budget::{create_budget_endpoint, list_budgets_endpoint},
    dashboard::{
        delete_transaction_form, get_dashboard_page, submit_budget_form, submit_transaction_form,
    },
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    // The API may be called from a page served on another origin.
    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::BUDGETS_API,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .layer(CorsLayer::permissive());

    let dashboard_routes = Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTION_FORM, post(submit_transaction_form))
        .route(
            endpoints::DELETE_TRANSACTION_FORM,
            post(delete_transaction_form),
        )
        .route(endpoints::BUDGET_FORM, post(submit_budget_form));

    api_routes
        .merge(dashboard_routes)
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use scraper::Html;
    use serde_json::json;

    use crate::{
        AppState,
        endpoints::{self, format_endpoint},
        test_utils::{assert_valid_html, select_text},
        transaction::Transaction,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn api_and_dashboard_share_the_store() {
        let server = get_test_server();

        let created = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "amount": 9.5,
                "description": "Coffee",
                "date": "2024-04-02",
                "category": "Food",
            }))
            .await
            .json::<Transaction>();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert_eq!(
            select_text(&html, "#transactions li span"),
            vec!["₹9.50 - Coffee - Food - 2024-04-02"]
        );

        server
            .delete(&format_endpoint(endpoints::TRANSACTION_API, created.id))
            .await
            .assert_status_ok();
        server
            .get(endpoints::TRANSACTIONS_API)
            .await
            .assert_json(&json!([]));
    }

    #[tokio::test]
    async fn budgets_api_is_routed() {
        let server = get_test_server();

        server
            .post(endpoints::BUDGETS_API)
            .json(&json!({ "category": "Transport", "amount": 40, "month": "Feb" }))
            .await
            .assert_status_ok();

        let response = server.get(endpoints::BUDGETS_API).await;

        response.assert_status_ok();
        response.assert_json(&json!([
            { "id": 1, "category": "Transport", "amount": 40.0, "month": "Feb" }
        ]));
    }

    #[tokio::test]
    async fn api_allows_other_origins() {
        let server = get_test_server();

        let response = server
            .get(endpoints::TRANSACTIONS_API)
            .add_header("origin", "http://localhost:3000")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found_page() {
        let server = get_test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let html = Html::parse_document(&response.text());
        assert_eq!(select_text(&html, "h1"), vec!["404"]);
    }
}
