use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};
use crate::ids::{self, IdPrefix};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    TopUp,
    Charge,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Failed,
    Reversed,
}

/// An immutable ledger record of one balance mutation.
///
/// `amount` is signed: positive for top-ups, negative for charges.
/// `balance_after` snapshots the account balance immediately after the
/// mutation was applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

impl Transaction {
    /// A completed funding transaction.
    pub fn top_up(
        account_id: impl Into<String>,
        amount: Decimal,
        balance_after: Decimal,
        description: impl Into<String>,
        reference: Option<String>,
    ) -> Self {
        Self {
            id: ids::new_id(IdPrefix::Transaction),
            account_id: account_id.into(),
            kind: TransactionKind::TopUp,
            amount,
            balance_after,
            description: description.into(),
            reference,
            status: TransactionStatus::Completed,
            created_at: Utc::now(),
            course_id: None,
            period: None,
        }
    }

    /// A completed course-fee charge; `amount` must already be negative.
    pub fn charge(
        account_id: impl Into<String>,
        amount: Decimal,
        balance_after: Decimal,
        description: impl Into<String>,
        course_id: impl Into<String>,
        period: impl Into<String>,
    ) -> Self {
        Self {
            id: ids::new_id(IdPrefix::Transaction),
            account_id: account_id.into(),
            kind: TransactionKind::Charge,
            amount,
            balance_after,
            description: description.into(),
            reference: None,
            status: TransactionStatus::Completed,
            created_at: Utc::now(),
            course_id: Some(course_id.into()),
            period: Some(period.into()),
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} [{:?} {}]", self.id, self.kind, self.amount)
    }
}
