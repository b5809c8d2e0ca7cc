use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;
use crate::ids::{self, IdPrefix};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Unpaid,
    Paid,
}

/// A payable item recorded when a course-fee charge drove an account
/// balance negative. The amount is the fee just charged, not the deficit.
/// Charges stay `Unpaid` until an external settlement marks them paid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutstandingCharge {
    pub id: String,
    pub account_id: String,
    pub course_id: String,
    pub course_name: String,
    pub period: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: ChargeStatus,
}

impl OutstandingCharge {
    pub fn new(
        account_id: impl Into<String>,
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        period: impl Into<String>,
        amount: Decimal,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: ids::new_id(IdPrefix::OutstandingCharge),
            account_id: account_id.into(),
            course_id: course_id.into(),
            course_name: course_name.into(),
            period: period.into(),
            amount,
            due_date,
            status: ChargeStatus::Unpaid,
        }
    }

    pub fn mark_paid(&mut self) {
        self.status = ChargeStatus::Paid;
    }
}

impl Identifiable for OutstandingCharge {
    fn id(&self) -> &str {
        &self.id
    }
}
