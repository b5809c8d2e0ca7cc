use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};
use crate::ids::{self, IdPrefix};

/// Lifecycle state of an education account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Suspended,
    Closed,
}

/// A prepaid education account owned by a single holder.
///
/// The balance equals the sum of every signed transaction amount ever
/// applied to the account, in application order. Only the balance service
/// writes it; no other component holds an authoritative copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationAccount {
    pub id: String,
    pub holder_id: String,
    pub balance: Decimal,
    pub status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_top_up: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EducationAccount {
    pub fn new(holder_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ids::new_id(IdPrefix::Account),
            holder_id: holder_id.into(),
            balance: Decimal::ZERO,
            status: AccountStatus::Active,
            last_top_up: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Identifiable for EducationAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for EducationAccount {
    fn display_label(&self) -> String {
        format!("{} ({:?})", self.id, self.status)
    }
}
