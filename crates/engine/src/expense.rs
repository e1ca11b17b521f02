//! Expenses recorded in a group ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories offered by the add-expense form. The ledger accepts any
/// non-empty category string; the list only drives pickers.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Drinks",
    "Transportation",
    "Accommodation",
    "Entertainment",
    "Groceries",
    "Utilities",
    "Shopping",
    "Health",
    "Other",
];

/// A recorded expense. Immutable once it enters a group: there is no edit or
/// delete operation.
///
/// `amount` is a positive decimal in the owning group's currency. The split
/// is a non-empty set of member ids; each participant's share is derived at
/// read time, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub paid_by: Uuid,
    pub paid_by_name: String,
    pub split_between: Vec<Uuid>,
    pub date: DateTime<Utc>,
    pub category: String,
}

impl Expense {
    /// Equal share per split participant.
    ///
    /// The split is validated non-empty when the expense enters a group, so
    /// the division is always defined.
    pub fn per_head_share(&self) -> f64 {
        self.amount / self.split_between.len() as f64
    }
}

/// Input for [`Group::with_expense`]; id and payer display name are filled in
/// by the group operation after validation.
///
/// [`Group::with_expense`]: crate::Group::with_expense
#[derive(Clone, Debug)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: f64,
    pub paid_by: Uuid,
    pub split_between: Vec<Uuid>,
    pub date: DateTime<Utc>,
    pub category: String,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        paid_by: Uuid,
        split_between: Vec<Uuid>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            paid_by,
            split_between,
            date: Utc::now(),
            category: category.into(),
        }
    }

    #[must_use]
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}
