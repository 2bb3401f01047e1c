//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and submitting its forms
//! - HTML view functions for rendering the dashboard UI
//!
//! Every form posts back to the server, which answers with a redirect to the
//! dashboard so the page is drawn again from freshly fetched records.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, html};

use crate::{
    category::Category,
    dashboard::{
        charts::{DashboardChart, category_chart, charts_script, charts_view, monthly_spending_chart},
        form::{BudgetForm, TransactionForm},
        state::{ClientState, Submission},
    },
    database_id::TransactionId,
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, ECHARTS_SCRIPT_URL, ERROR_TEXT_STYLE, FORM_ROW_STYLE, HeadElement,
        base, format_currency,
    },
    stores::{RecordStore, SQLiteRecordStore},
};

/// Display the dashboard with every transaction, the charts and the budgets.
pub async fn get_dashboard_page(State(store): State<SQLiteRecordStore>) -> Response {
    let mut state = ClientState::new(store);

    match state.refresh() {
        Ok(()) => dashboard_view(&state).into_response(),
        Err(error) => {
            tracing::error!("could not load the dashboard records: {error}");
            error.into_page_response()
        }
    }
}

/// Store a transaction from the dashboard form.
///
/// Redirects to the dashboard on success. If the form is incomplete the
/// dashboard is drawn again with the message and the entered values.
pub async fn submit_transaction_form(
    State(store): State<SQLiteRecordStore>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut state = ClientState::new(store);
    state.transaction_form = form;

    let result = state.submit_transaction().and_then(|submission| {
        if submission == Submission::Rejected {
            state.refresh()?;
        }

        Ok(submission)
    });

    match result {
        Ok(Submission::Submitted) => Redirect::to(endpoints::DASHBOARD_VIEW).into_response(),
        Ok(Submission::Rejected) => dashboard_view(&state).into_response(),
        Err(error) => {
            tracing::error!("could not submit the transaction form: {error}");
            error.into_page_response()
        }
    }
}

/// Delete a transaction from the dashboard list and redirect to the dashboard.
pub async fn delete_transaction_form(
    State(store): State<SQLiteRecordStore>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut state = ClientState::new(store);

    match state.delete_transaction(transaction_id) {
        Ok(()) => Redirect::to(endpoints::DASHBOARD_VIEW).into_response(),
        Err(error) => {
            tracing::error!("could not delete transaction {transaction_id}: {error}");
            error.into_page_response()
        }
    }
}

/// Store a budget from the dashboard form and redirect to the dashboard.
///
/// An incomplete form is ignored and still redirects.
pub async fn submit_budget_form(
    State(store): State<SQLiteRecordStore>,
    Form(form): Form<BudgetForm>,
) -> Response {
    let mut state = ClientState::new(store);
    state.budget_form = form;

    match state.submit_budget() {
        Ok(_) => Redirect::to(endpoints::DASHBOARD_VIEW).into_response(),
        Err(error) => {
            tracing::error!("could not submit the budget form: {error}");
            error.into_page_response()
        }
    }
}

fn build_dashboard_charts<S: RecordStore>(state: &ClientState<S>) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "monthly-chart",
            options: monthly_spending_chart(&state.monthly_totals()).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(&state.category_totals()).to_string(),
        },
    ]
}

fn category_options(current: Category) -> Markup {
    html!(
        @for category in Category::ALL {
            option value=(category.as_str()) selected[category == current] { (category.as_str()) }
        }
    )
}

fn transaction_form_view(form: &TransactionForm, error: Option<&str>) -> Markup {
    html!(
        section id="transaction-form"
        {
            h2 { "Add Transaction" }

            form method="post" action=(endpoints::TRANSACTION_FORM) class=(FORM_ROW_STYLE)
            {
                input
                    type="text"
                    inputmode="decimal"
                    name="amount"
                    placeholder="Amount"
                    value=(form.amount);

                input
                    type="text"
                    name="description"
                    placeholder="Description"
                    value=(form.description);

                input type="date" name="date" value=(form.date);

                select name="category"
                {
                    (category_options(form.category))
                }

                button type="submit" { "Add Transaction" }
            }

            @if let Some(error) = error {
                p class=(ERROR_TEXT_STYLE) { (error) }
            }
        }
    )
}

fn transaction_list_view<S: RecordStore>(state: &ClientState<S>) -> Markup {
    html!(
        section id="transactions"
        {
            h2 { "Transactions" }

            ul
            {
                @for transaction in &state.transactions {
                    li
                    {
                        span
                        {
                            (format_currency(transaction.amount)) " - "
                            (transaction.description) " - "
                            (transaction.category.as_str()) " - "
                            (transaction.date)
                        }

                        form
                            method="post"
                            action=(format_endpoint(endpoints::DELETE_TRANSACTION_FORM, transaction.id))
                            style="display: inline"
                        {
                            button type="submit" class=(BUTTON_DELETE_STYLE) { "Delete" }
                        }
                    }
                }
            }
        }
    )
}

fn budget_form_view(form: &BudgetForm) -> Markup {
    html!(
        section id="budget-form"
        {
            h2 { "Set Budget" }

            form method="post" action=(endpoints::BUDGET_FORM) class=(FORM_ROW_STYLE)
            {
                select name="category"
                {
                    (category_options(form.category))
                }

                input
                    type="text"
                    inputmode="decimal"
                    name="amount"
                    placeholder="Budget Amount"
                    value=(form.amount);

                input
                    type="text"
                    name="month"
                    placeholder="Month (e.g. Jan)"
                    value=(form.month);

                button type="submit" { "Set Budget" }
            }
        }
    )
}

fn budget_comparison_view<S: RecordStore>(state: &ClientState<S>) -> Markup {
    html!(
        section id="budgets"
        {
            h2 { "Budget vs Actual" }

            ul
            {
                @for row in state.budget_comparison() {
                    li
                    {
                        (row.month) " - " (row.category.as_str())
                        " | Budget: " (format_currency(row.budget))
                        " | Spent: " (format_currency(row.spent))
                    }
                }
            }
        }
    )
}

fn dashboard_view<S: RecordStore>(state: &ClientState<S>) -> Markup {
    let charts = build_dashboard_charts(state);

    let content = html!(
        h1 { "Finance Visualizer" }

        (transaction_form_view(&state.transaction_form, state.error.as_deref()))
        (transaction_list_view(state))
        (charts_view(&charts))
        (budget_form_view(&state.budget_form))
        (budget_comparison_view(state))
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}
