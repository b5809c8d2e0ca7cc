use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};
use crate::ids::{self, IdPrefix};
use crate::money;

/// A billable course. Inactive courses accept no new enrolments and are
/// excluded from fee runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    pub monthly_fee: Decimal,
    pub is_active: bool,
}

impl Course {
    pub fn new(code: impl Into<String>, name: impl Into<String>, monthly_fee: Decimal) -> Self {
        Self {
            id: ids::new_id(IdPrefix::Course),
            code: code.into(),
            name: name.into(),
            monthly_fee: money::round_minor(monthly_fee),
            is_active: true,
        }
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Identifiable for Course {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Course {
    fn display_label(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}
