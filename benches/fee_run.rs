use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use edufund_core::{
    domain::{Actor, AccountHolder, BillingPeriod, Course, EducationAccount, Enrolment},
    ledger::LedgerStore,
    services::FeeRunService,
    storage::json_backend::{load_store_from_path, save_store_to_path},
};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn build_sample_store(enrolment_count: usize) -> LedgerStore {
    let mut store = LedgerStore::new("Benchmark");
    let course_id = store.insert_course(Course::new(
        "MA101",
        "Mathematics",
        Decimal::new(7500, 2),
    ));
    let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();

    for idx in 0..enrolment_count {
        let holder_id = store.insert_holder(AccountHolder::new(format!("Holder {}", idx)));
        let mut account = EducationAccount::new(holder_id.clone());
        account.balance = Decimal::new(10_000 + (idx % 500) as i64 * 10, 2);
        store.insert_account(account);
        store.insert_enrolment(Enrolment::new(holder_id, course_id.clone(), start));
    }
    store
}

fn bench_fee_run(c: &mut Criterion) {
    let store = build_sample_store(black_box(1_000));
    let period = BillingPeriod::new(2026, 8).unwrap();
    let actor = Actor::new("USR-bench", "Bench");

    c.bench_function("fee_run_1k_enrolments", |b| {
        b.iter_batched(
            || store.clone(),
            |mut fresh| {
                FeeRunService::run(&mut fresh, &period, &actor).expect("fee run");
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_snapshot_io(c: &mut Criterion) {
    let mut store = build_sample_store(1_000);
    let period = BillingPeriod::new(2026, 8).unwrap();
    let actor = Actor::new("USR-bench", "Bench");
    FeeRunService::run(&mut store, &period, &actor).expect("seed run");

    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("store.json");

    c.bench_function("store_save_1k", |b| {
        b.iter(|| {
            save_store_to_path(&store, &file_path).expect("save store");
        })
    });

    save_store_to_path(&store, &file_path).expect("seed");

    c.bench_function("store_load_1k", |b| {
        b.iter(|| {
            let loaded = load_store_from_path(&file_path).expect("load store");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_fee_run, bench_snapshot_io);
criterion_main!(benches);
