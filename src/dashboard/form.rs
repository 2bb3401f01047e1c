//! The dashboard's entry forms and how they are checked before submission.

use serde::{Deserialize, Serialize};

use crate::{budget::NewBudget, category::Category, transaction::NewTransaction};

/// How a form tells the user that it could not be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Show the validation message next to the form.
    Inline,
    /// Drop the submission without telling the user.
    Silent,
}

/// Why a form could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// At least one required field was left empty.
    #[error("All fields required")]
    MissingFields,

    /// The amount field is filled in but is not a number.
    #[error("Amount must be a number")]
    InvalidAmount,
}

/// A form whose raw input must be checked before it is sent to the store.
pub trait ValidateForm {
    /// The record the form produces when its input is valid.
    type Output;

    /// How a failed check is reported.
    const FEEDBACK: Feedback;

    /// Check the form and convert it into the record to store.
    fn validate(&self) -> Result<Self::Output, ValidationError>;
}

/// The raw input of the transaction entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionForm {
    pub amount: String,
    pub description: String,
    pub date: String,
    pub category: Category,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            date: String::new(),
            category: Category::Other,
        }
    }
}

impl ValidateForm for TransactionForm {
    type Output = NewTransaction;

    const FEEDBACK: Feedback = Feedback::Inline;

    /// Amount, description and date are required. A zero amount counts as missing.
    fn validate(&self) -> Result<NewTransaction, ValidationError> {
        if self.amount.is_empty() || self.description.is_empty() || self.date.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(NewTransaction {
            amount: parse_required_amount(&self.amount)?,
            description: self.description.clone(),
            date: self.date.clone(),
            category: self.category,
        })
    }
}

/// The raw input of the budget entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetForm {
    pub category: Category,
    pub amount: String,
    pub month: String,
}

impl Default for BudgetForm {
    fn default() -> Self {
        Self {
            category: Category::Food,
            amount: String::new(),
            month: String::new(),
        }
    }
}

impl ValidateForm for BudgetForm {
    type Output = NewBudget;

    const FEEDBACK: Feedback = Feedback::Silent;

    /// Amount and month are required. A zero amount counts as missing.
    fn validate(&self) -> Result<NewBudget, ValidationError> {
        if self.amount.is_empty() || self.month.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(NewBudget {
            category: self.category,
            amount: parse_required_amount(&self.amount)?,
            month: self.month.clone(),
        })
    }
}

fn parse_required_amount(text: &str) -> Result<f64, ValidationError> {
    let amount = text
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or(ValidationError::InvalidAmount)?;

    if amount == 0.0 {
        return Err(ValidationError::MissingFields);
    }

    Ok(amount)
}
