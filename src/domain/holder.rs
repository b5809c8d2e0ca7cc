use serde::{Deserialize, Serialize};

use crate::domain::common::{Displayable, Identifiable};
use crate::ids::{self, IdPrefix};

/// The person an education account and its enrolments belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountHolder {
    pub id: String,
    pub name: String,
}

impl AccountHolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ids::new_id(IdPrefix::Holder),
            name: name.into(),
        }
    }
}

impl Identifiable for AccountHolder {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for AccountHolder {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
