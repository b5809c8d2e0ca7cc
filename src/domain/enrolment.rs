use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;
use crate::ids::{self, IdPrefix};

/// Links a holder to a course. Only active enrolments are chargeable, and a
/// (holder, course) pair may carry at most one active enrolment at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enrolment {
    pub id: String,
    pub holder_id: String,
    pub course_id: String,
    pub is_active: bool,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Enrolment {
    pub fn new(
        holder_id: impl Into<String>,
        course_id: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: ids::new_id(IdPrefix::Enrolment),
            holder_id: holder_id.into(),
            course_id: course_id.into(),
            is_active: true,
            start_date,
            end_date: None,
        }
    }

    /// Ends the enrolment. The start date is never touched.
    pub fn end(&mut self, end_date: NaiveDate) {
        self.is_active = false;
        self.end_date = Some(end_date);
    }
}

impl Identifiable for Enrolment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ending_clears_active_and_preserves_start_date() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let mut enrolment = Enrolment::new("HLD-1", "CRS-1", start);
        enrolment.end(NaiveDate::from_ymd_opt(2026, 6, 30).unwrap());

        assert!(!enrolment.is_active);
        assert_eq!(enrolment.start_date, start);
        assert_eq!(
            enrolment.end_date,
            Some(NaiveDate::from_ymd_opt(2026, 6, 30).unwrap())
        );
    }
}
