use chrono::NaiveDate;
use edufund_core::{
    domain::{
        Actor, AccountHolder, BatchStatus, BillingPeriod, Course, EducationAccount,
        TransactionKind,
    },
    errors::LedgerError,
    ledger::LedgerStore,
    services::{
        EnrolmentService, FeeRunService, OutstandingTracker, TopUpRequest, TopUpService,
    },
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn actor() -> Actor {
    Actor::new("USR-ops", "Operations")
}

fn seeded_holder(store: &mut LedgerStore, name: &str) -> (String, String) {
    let holder_id = store.insert_holder(AccountHolder::new(name));
    let account_id = store.insert_account(EducationAccount::new(holder_id.clone()));
    (holder_id, account_id)
}

fn top_up(store: &mut LedgerStore, account_id: &str, amount: Decimal) {
    TopUpService::top_up(
        store,
        TopUpRequest {
            account_id: account_id.into(),
            amount,
            scheme: "GIRO".into(),
            reason: "Funding".into(),
            effective_date: NaiveDate::from_ymd_opt(2026, 7, 28).unwrap(),
            reference: None,
            actor: actor(),
        },
    )
    .unwrap();
}

#[test]
fn top_up_worked_example() {
    // Top-up of 100.00 to an account holding 20.00 leaves 120.00.
    let mut store = LedgerStore::new("Worked");
    let (_, account_id) = seeded_holder(&mut store, "Mei Lin");
    top_up(&mut store, &account_id, dec!(20.00));

    top_up(&mut store, &account_id, dec!(100.00));

    let account = store.account(&account_id).unwrap();
    assert_eq!(account.balance, dec!(120.00));
    let latest = store.transactions_for(&account_id).last().cloned().unwrap();
    assert_eq!(latest.kind, TransactionKind::TopUp);
    assert_eq!(latest.amount, dec!(100.00));
    assert_eq!(latest.balance_after, dec!(120.00));
    assert!(store.outstanding_charges().is_empty());
}

#[test]
fn fee_run_worked_example() {
    // Balance 50.00 charged a 75.00 fee ends at -25.00 with one
    // outstanding charge for the full fee.
    let mut store = LedgerStore::new("Worked");
    let (holder_id, account_id) = seeded_holder(&mut store, "Mei Lin");
    let course_id = store.insert_course(Course::new("MA101", "Mathematics", dec!(75.00)));
    EnrolmentService::enrol(
        &mut store,
        &holder_id,
        &course_id,
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        &actor(),
    )
    .unwrap();
    top_up(&mut store, &account_id, dec!(50.00));

    let summary = FeeRunService::run(
        &mut store,
        &BillingPeriod::new(2026, 8).unwrap(),
        &actor(),
    )
    .unwrap();

    assert_eq!(store.account(&account_id).unwrap().balance, dec!(-25.00));
    let charge = store
        .transactions()
        .iter()
        .find(|txn| txn.kind == TransactionKind::Charge)
        .unwrap();
    assert_eq!(charge.amount, dec!(-75.00));
    assert_eq!(charge.balance_after, dec!(-25.00));

    assert_eq!(summary.outstanding_created, 1);
    let outstanding = OutstandingTracker::unpaid_for(&store, &account_id);
    assert_eq!(outstanding.len(), 1);
    assert_eq!(outstanding[0].amount, dec!(75.00));
}

#[test]
fn fee_run_produces_one_batch_covering_all_enrolments() {
    let mut store = LedgerStore::new("Batch");
    let maths = store.insert_course(Course::new("MA101", "Mathematics", dec!(75.00)));
    let science = store.insert_course(Course::new("SC201", "Science", dec!(60.00)));
    let violin = store.insert_course(Course::new("MU301", "Violin", dec!(90.00)));

    for (name, courses) in [
        ("Mei Lin", vec![maths.clone(), science.clone()]),
        ("Ravi", vec![science.clone()]),
        ("Siti", vec![violin.clone()]),
    ] {
        let (holder_id, account_id) = seeded_holder(&mut store, name);
        top_up(&mut store, &account_id, dec!(1000.00));
        for course_id in courses {
            EnrolmentService::enrol(
                &mut store,
                &holder_id,
                &course_id,
                NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                &actor(),
            )
            .unwrap();
        }
    }

    let summary = FeeRunService::run(
        &mut store,
        &BillingPeriod::new(2026, 8).unwrap(),
        &actor(),
    )
    .unwrap();

    assert_eq!(summary.charged_count, 4);
    assert_eq!(summary.total_charged, dec!(300.00));
    assert_eq!(summary.status, BatchStatus::Completed);

    assert_eq!(store.batches().len(), 1);
    let batch = &store.batches()[0];
    assert_eq!(batch.entry_count, 4);
    assert_eq!(batch.failed_count, 0);
    assert_eq!(batch.total_amount, dec!(300.00));
    assert_eq!(batch.created_by, "USR-ops");

    let charges = store
        .transactions()
        .iter()
        .filter(|txn| txn.kind == TransactionKind::Charge)
        .count();
    assert_eq!(charges, 4);
}

#[test]
fn balances_always_equal_their_transaction_sums() {
    let mut store = LedgerStore::new("Invariant");
    let maths = store.insert_course(Course::new("MA101", "Mathematics", dec!(75.00)));

    let (holder_a, account_a) = seeded_holder(&mut store, "Mei Lin");
    let (holder_b, account_b) = seeded_holder(&mut store, "Ravi");
    for holder_id in [&holder_a, &holder_b] {
        EnrolmentService::enrol(
            &mut store,
            holder_id,
            &maths,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            &actor(),
        )
        .unwrap();
    }

    top_up(&mut store, &account_a, dec!(120.00));
    top_up(&mut store, &account_b, dec!(30.00));
    FeeRunService::run(&mut store, &BillingPeriod::new(2026, 8).unwrap(), &actor()).unwrap();
    top_up(&mut store, &account_b, dec!(55.50));
    FeeRunService::run(&mut store, &BillingPeriod::new(2026, 9).unwrap(), &actor()).unwrap();

    for account in store.accounts() {
        let recorded: Decimal = store
            .transactions_for(&account.id)
            .iter()
            .map(|txn| txn.amount)
            .sum();
        assert_eq!(account.balance, recorded, "account {}", account.id);
    }
}

#[test]
fn rejected_top_up_leaves_no_trace() {
    let mut store = LedgerStore::new("Rejects");
    let (_, account_id) = seeded_holder(&mut store, "Mei Lin");

    let err = TopUpService::top_up(
        &mut store,
        TopUpRequest {
            account_id: account_id.clone(),
            amount: dec!(-10.00),
            scheme: "GIRO".into(),
            reason: "Funding".into(),
            effective_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            reference: None,
            actor: actor(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::Validation { ref field, .. } if field == "amount"));

    let account = store.account(&account_id).unwrap();
    assert_eq!(account.balance, dec!(0));
    assert_eq!(account.last_top_up, None);
    assert!(store.transactions().is_empty());
    assert!(store.audit_log().is_empty());
}

#[test]
fn audit_trail_captures_every_mutating_operation() {
    let mut store = LedgerStore::new("Audit");
    let (holder_id, account_id) = seeded_holder(&mut store, "Mei Lin");
    let course_id = store.insert_course(Course::new("MA101", "Mathematics", dec!(75.00)));

    let enrolment_id = EnrolmentService::enrol(
        &mut store,
        &holder_id,
        &course_id,
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        &actor(),
    )
    .unwrap();
    top_up(&mut store, &account_id, dec!(200.00));
    FeeRunService::run(&mut store, &BillingPeriod::new(2026, 8).unwrap(), &actor()).unwrap();
    EnrolmentService::end(
        &mut store,
        &enrolment_id,
        NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
        &actor(),
    )
    .unwrap();

    let actions: Vec<&str> = store
        .audit_log()
        .iter()
        .map(|entry| entry.action.as_str())
        .collect();
    assert_eq!(
        actions,
        vec![
            "enrolment.created",
            "account.top_up",
            "fee_run.completed",
            "enrolment.ended"
        ]
    );
    assert!(store
        .audit_log()
        .iter()
        .all(|entry| entry.actor_id == "USR-ops"));
}
