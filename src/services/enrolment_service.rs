//! Enrolment lifecycle: joining and leaving courses.

use chrono::NaiveDate;

use crate::domain::{Actor, Enrolment};
use crate::errors::LedgerError;
use crate::ledger::LedgerStore;
use crate::services::AuditService;

use super::ServiceResult;

pub struct EnrolmentService;

impl EnrolmentService {
    /// Enrols a holder in a course and returns the enrolment id.
    ///
    /// A (holder, course) pair may hold at most one active enrolment, and
    /// inactive courses accept no new enrolments.
    pub fn enrol(
        store: &mut LedgerStore,
        holder_id: &str,
        course_id: &str,
        start_date: NaiveDate,
        actor: &Actor,
    ) -> ServiceResult<String> {
        let holder_name = store
            .holder(holder_id)
            .map(|holder| holder.name.clone())
            .ok_or_else(|| LedgerError::not_found("holder", holder_id))?;
        let course = store
            .course(course_id)
            .ok_or_else(|| LedgerError::not_found("course", course_id))?;
        if !course.is_active {
            return Err(LedgerError::validation(
                "course",
                format!("course `{}` is inactive and accepts no enrolments", course.code),
            ));
        }
        let course_name = course.name.clone();

        if store.enrolments().iter().any(|enrolment| {
            enrolment.is_active
                && enrolment.holder_id == holder_id
                && enrolment.course_id == course_id
        }) {
            return Err(LedgerError::DuplicateActive {
                holder_id: holder_id.to_string(),
                course_id: course_id.to_string(),
            });
        }

        let enrolment_id =
            store.insert_enrolment(Enrolment::new(holder_id, course_id, start_date));
        AuditService::append(
            store,
            "enrolment.created",
            "enrolment",
            &enrolment_id,
            actor,
            format!("Enrolled {} in {}", holder_name, course_name),
        )?;
        Ok(enrolment_id)
    }

    /// Ends an active enrolment. The start date is never touched.
    pub fn end(
        store: &mut LedgerStore,
        enrolment_id: &str,
        end_date: NaiveDate,
        actor: &Actor,
    ) -> ServiceResult<()> {
        let enrolment = store
            .enrolment_mut(enrolment_id)
            .ok_or_else(|| LedgerError::not_found("enrolment", enrolment_id))?;
        enrolment.end(end_date);
        store.touch();

        AuditService::append(
            store,
            "enrolment.ended",
            "enrolment",
            enrolment_id,
            actor,
            format!("Enrolment ended effective {}", end_date),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountHolder, Course};
    use rust_decimal_macros::dec;

    fn actor() -> Actor {
        Actor::new("USR-1", "Ops")
    }

    fn seeded() -> (LedgerStore, String, String) {
        let mut store = LedgerStore::new("Enrolments");
        let holder_id = store.insert_holder(AccountHolder::new("Mei Lin"));
        let course_id = store.insert_course(Course::new("MA101", "Mathematics", dec!(75.00)));
        (store, holder_id, course_id)
    }

    #[test]
    fn duplicate_active_enrolment_is_rejected() {
        let (mut store, holder_id, course_id) = seeded();
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        EnrolmentService::enrol(&mut store, &holder_id, &course_id, start, &actor()).unwrap();
        let err = EnrolmentService::enrol(&mut store, &holder_id, &course_id, start, &actor())
            .unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateActive { .. }));
        assert_eq!(store.enrolments().len(), 1);
    }

    #[test]
    fn re_enrolling_after_ending_is_allowed() {
        let (mut store, holder_id, course_id) = seeded();
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        let first =
            EnrolmentService::enrol(&mut store, &holder_id, &course_id, start, &actor()).unwrap();
        EnrolmentService::end(
            &mut store,
            &first,
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            &actor(),
        )
        .unwrap();

        let ended = store.enrolment(&first).unwrap();
        assert!(!ended.is_active);
        assert_eq!(ended.start_date, start);
        assert!(ended.end_date.is_some());

        EnrolmentService::enrol(
            &mut store,
            &holder_id,
            &course_id,
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
            &actor(),
        )
        .unwrap();
        assert_eq!(store.enrolments().len(), 2);
    }

    #[test]
    fn inactive_courses_accept_no_enrolments() {
        let (mut store, holder_id, _) = seeded();
        let mut retired = Course::new("HI101", "History", dec!(40.00));
        retired.deactivate();
        let retired_id = store.insert_course(retired);

        let err = EnrolmentService::enrol(
            &mut store,
            &holder_id,
            &retired_id,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            &actor(),
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::Validation { ref field, .. } if field == "course"));
    }

    #[test]
    fn unknown_holder_or_course_is_not_found() {
        let (mut store, holder_id, course_id) = seeded();
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

        assert!(matches!(
            EnrolmentService::enrol(&mut store, "HLD-missing", &course_id, start, &actor()),
            Err(LedgerError::NotFound { entity: "holder", .. })
        ));
        assert!(matches!(
            EnrolmentService::enrol(&mut store, &holder_id, "CRS-missing", start, &actor()),
            Err(LedgerError::NotFound { entity: "course", .. })
        ));
    }
}
