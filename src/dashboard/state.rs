//! The records and form input the dashboard page is drawn from.

use crate::{
    Error,
    budget::Budget,
    dashboard::{
        aggregation::{
            BudgetComparison, CategoryTotal, MonthlyTotal, budget_comparison, category_totals,
            monthly_totals,
        },
        form::{BudgetForm, Feedback, TransactionForm, ValidateForm},
    },
    database_id::TransactionId,
    stores::RecordStore,
    transaction::Transaction,
};

/// The outcome of submitting one of the dashboard forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The record was stored and the form was reset.
    Submitted,
    /// The form did not pass validation and nothing was stored.
    Rejected,
}

/// In-memory copies of the stored records along with the current form input.
///
/// The copies are only updated by pulling from the store again after each
/// change, never edited in place.
#[derive(Debug)]
pub struct ClientState<S> {
    store: S,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub transaction_form: TransactionForm,
    pub budget_form: BudgetForm,
    /// The message shown next to the transaction form.
    pub error: Option<String>,
}

impl<S> ClientState<S>
where
    S: RecordStore,
{
    /// Create an empty state backed by `store`. Call [ClientState::refresh]
    /// to load the stored records.
    pub fn new(store: S) -> Self {
        Self {
            store,
            transactions: Vec::new(),
            budgets: Vec::new(),
            transaction_form: TransactionForm::default(),
            budget_form: BudgetForm::default(),
            error: None,
        }
    }

    /// Fetch both record collections from the store.
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.refresh_transactions()?;
        self.refresh_budgets()
    }

    pub fn refresh_transactions(&mut self) -> Result<(), Error> {
        self.transactions = self.store.list_transactions()?;
        Ok(())
    }

    pub fn refresh_budgets(&mut self) -> Result<(), Error> {
        self.budgets = self.store.list_budgets()?;
        Ok(())
    }

    /// Store the transaction form if it is filled in correctly.
    ///
    /// On success the form is cleared and the transactions are fetched again.
    /// Otherwise the store is not touched and [ClientState::error] explains
    /// what is wrong.
    pub fn submit_transaction(&mut self) -> Result<Submission, Error> {
        let form = self.transaction_form.clone();
        let Some(transaction) = self.check(&form) else {
            return Ok(Submission::Rejected);
        };

        self.store.insert_transaction(transaction)?;
        self.transaction_form = TransactionForm::default();
        self.refresh_transactions()?;

        Ok(Submission::Submitted)
    }

    /// Store the budget form if it is filled in correctly.
    ///
    /// On success the form is cleared and the budgets are fetched again. An
    /// incomplete form is dropped without a message.
    pub fn submit_budget(&mut self) -> Result<Submission, Error> {
        let form = self.budget_form.clone();
        let Some(budget) = self.check(&form) else {
            return Ok(Submission::Rejected);
        };

        self.store.insert_budget(budget)?;
        self.budget_form = BudgetForm::default();
        self.refresh_budgets()?;

        Ok(Submission::Submitted)
    }

    /// Delete the transaction with `id` and fetch the transactions again.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<(), Error> {
        self.store.delete_transaction(id)?;
        self.refresh_transactions()
    }

    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        monthly_totals(&self.transactions)
    }

    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        category_totals(&self.transactions)
    }

    pub fn budget_comparison(&self) -> Vec<BudgetComparison> {
        budget_comparison(&self.budgets, &self.transactions)
    }

    fn check<F: ValidateForm>(&mut self, form: &F) -> Option<F::Output> {
        match form.validate() {
            Ok(output) => {
                if F::FEEDBACK == Feedback::Inline {
                    self.error = None;
                }
                Some(output)
            }
            Err(error) => {
                tracing::debug!("form rejected: {error}");
                if F::FEEDBACK == Feedback::Inline {
                    self.error = Some(error.to_string());
                }
                None
            }
        }
    }
}
