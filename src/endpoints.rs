//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}',
//! use [format_endpoint].

/// The dashboard page with the forms, lists and charts.
pub const DASHBOARD_VIEW: &str = "/";
/// The route the dashboard's transaction form posts to.
pub const TRANSACTION_FORM: &str = "/transactions";
/// The route the delete button next to a transaction posts to.
pub const DELETE_TRANSACTION_FORM: &str = "/transactions/{transaction_id}/delete";
/// The route the dashboard's budget form posts to.
pub const BUDGET_FORM: &str = "/budgets";

/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to access a single transaction.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";
/// The route to list and create budgets.
pub const BUDGETS_API: &str = "/api/budgets";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let Some(length) = endpoint_path[start..].find('}') else {
        return endpoint_path.to_owned();
    };

    let end = start + length;
    let name = &endpoint_path[start + 1..end];

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
        return endpoint_path.to_owned();
    }

    format!("{}{}{}", &endpoint_path[..start], id, &endpoint_path[end + 1..])
}

#[cfg(test)]
mod tests {
    use super::{DELETE_TRANSACTION_FORM, TRANSACTION_API, format_endpoint};

    #[test]
    fn replaces_parameter_in_middle() {
        assert_eq!(
            format_endpoint(DELETE_TRANSACTION_FORM, 7),
            "/transactions/7/delete"
        );
    }

    #[test]
    fn replaces_parameter_at_end() {
        assert_eq!(format_endpoint(TRANSACTION_API, 42), "/api/transactions/42");
    }

    #[test]
    fn returns_path_without_parameter_unchanged() {
        assert_eq!(format_endpoint("/api/budgets", 1), "/api/budgets");
    }

    #[test]
    fn ignores_malformed_parameter() {
        assert_eq!(format_endpoint("/foo/{Bar}", 1), "/foo/{Bar}");
        assert_eq!(format_endpoint("/foo/{bar", 1), "/foo/{bar");
    }
}
