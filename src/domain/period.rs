use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Day of the following month on which a shortfall charge falls due.
const DUE_DAY: u32 = 15;

/// A calendar billing period, labelled `YYYY-MM`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BillingPeriod {
    pub year: i32,
    pub month: u32,
}

impl BillingPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, LedgerError> {
        if !(1..=12).contains(&month) {
            return Err(LedgerError::validation(
                "month",
                format!("`{}` is not a calendar month", month),
            ));
        }
        Ok(Self { year, month })
    }

    /// Parses a `YYYY-MM` label.
    pub fn parse(label: &str) -> Result<Self, LedgerError> {
        let invalid =
            || LedgerError::validation("period", format!("`{}` is not a YYYY-MM label", label));
        let (year, month) = label.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    /// The canonical `YYYY-MM` label recorded on transactions and charges.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn next(&self) -> BillingPeriod {
        if self.month == 12 {
            BillingPeriod {
                year: self.year + 1,
                month: 1,
            }
        } else {
            BillingPeriod {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Due date for shortfall charges raised in this period: the 15th of the
    /// following calendar month.
    pub fn due_date(&self) -> NaiveDate {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month, DUE_DAY).unwrap()
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
