//! The batch processor that settles course fees for a billing period.

use rust_decimal::Decimal;

use crate::domain::{Actor, Batch, BatchKind, BatchStatus, BillingPeriod, Transaction};
use crate::errors::LedgerError;
use crate::ledger::LedgerStore;
use crate::money;
use crate::services::{AuditService, BalanceService, OutstandingTracker, TransactionRecorder};

use super::ServiceResult;

/// Outcome of one fee run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeRunSummary {
    pub batch_id: String,
    pub period: String,
    pub charged_count: usize,
    pub failed_count: usize,
    pub total_charged: Decimal,
    pub outstanding_created: usize,
    pub status: BatchStatus,
}

/// One chargeable enrolment, fully resolved before processing starts so a
/// charge never observes another entry's partial effects.
struct ChargeLine {
    enrolment_id: String,
    account_id: String,
    course_id: String,
    course_name: String,
    fee: Decimal,
}

pub struct FeeRunService;

impl FeeRunService {
    /// Charges every active enrolment's course fee exactly once for the
    /// given period and returns the reconciled batch summary.
    ///
    /// A period that already has a fee-run batch is rejected before any
    /// write. Per-entry failures are isolated: a failed entry is rolled
    /// back and counted, and the rest of the run proceeds.
    pub fn run(
        store: &mut LedgerStore,
        period: &BillingPeriod,
        actor: &Actor,
    ) -> ServiceResult<FeeRunSummary> {
        let label = period.label();
        if store.batches().iter().any(|batch| {
            batch.kind == BatchKind::FeeRun && batch.period.as_deref() == Some(label.as_str())
        }) {
            return Err(LedgerError::FeeRunAlreadyApplied { period: label });
        }

        let lines = Self::select_chargeable(store);
        let preview_total: Decimal = lines.iter().map(|line| line.fee).sum();
        tracing::info!(
            period = %label,
            enrolments = lines.len(),
            total = %preview_total,
            "starting fee run"
        );

        let batch_id = store.insert_batch(Batch::fee_run(
            label.clone(),
            preview_total,
            lines.len(),
            actor.id.clone(),
        ));

        let mut charged_count = 0usize;
        let mut failed_count = 0usize;
        let mut outstanding_created = 0usize;
        let mut total_charged = Decimal::ZERO;

        for line in &lines {
            match Self::charge_line(store, line, &label) {
                Ok(charge_txn) => {
                    charged_count += 1;
                    total_charged += line.fee;
                    if OutstandingTracker::record_if_shortfall(
                        store,
                        &charge_txn,
                        &line.course_name,
                        period,
                    )? {
                        outstanding_created += 1;
                    }
                }
                Err(err) => {
                    failed_count += 1;
                    tracing::warn!(
                        enrolment = %line.enrolment_id,
                        account = %line.account_id,
                        error = %err,
                        "fee charge failed; entry excluded from run"
                    );
                }
            }
        }

        let status = if failed_count == 0 {
            BatchStatus::Completed
        } else if charged_count == 0 {
            BatchStatus::Failed
        } else {
            BatchStatus::Partial
        };

        // Reconcile the batch summary to what actually happened.
        if let Some(batch) = store.batch_mut(&batch_id) {
            batch.entry_count = charged_count;
            batch.failed_count = failed_count;
            batch.total_amount = total_charged;
            batch.status = status;
        }
        store.touch();

        AuditService::append(
            store,
            "fee_run.completed",
            "batch",
            &batch_id,
            actor,
            format!(
                "Charged {} enrolments for {} totalling {} ({} failed, {} outstanding)",
                charged_count,
                label,
                money::format_amount(total_charged),
                failed_count,
                outstanding_created
            ),
        )?;

        Ok(FeeRunSummary {
            batch_id,
            period: label,
            charged_count,
            failed_count,
            total_charged,
            outstanding_created,
            status,
        })
    }

    /// Active enrolments joined to an active course and the holder's
    /// account. Entries whose holder, course, or account do not resolve are
    /// excluded, not errors; enrolment data is assumed eventually consistent
    /// with the rest of the store.
    fn select_chargeable(store: &LedgerStore) -> Vec<ChargeLine> {
        store
            .enrolments()
            .iter()
            .filter(|enrolment| enrolment.is_active)
            .filter_map(|enrolment| {
                let course = store.course(&enrolment.course_id)?;
                if !course.is_active {
                    return None;
                }
                store.holder(&enrolment.holder_id)?;
                let account = store.account_by_holder(&enrolment.holder_id)?;
                Some(ChargeLine {
                    enrolment_id: enrolment.id.clone(),
                    account_id: account.id.clone(),
                    course_id: course.id.clone(),
                    course_name: course.name.clone(),
                    fee: course.monthly_fee,
                })
            })
            .collect()
    }

    /// Applies one enrolment's charge as an atomic unit: the balance delta
    /// is compensated when the transaction record cannot be appended.
    fn charge_line(
        store: &mut LedgerStore,
        line: &ChargeLine,
        label: &str,
    ) -> ServiceResult<Transaction> {
        let balance_after = BalanceService::apply_delta(store, &line.account_id, -line.fee)?;
        let transaction = Transaction::charge(
            &line.account_id,
            -line.fee,
            balance_after,
            format!("{} fee for {}", line.course_name, label),
            &line.course_id,
            label,
        );
        let recorded = transaction.clone();
        if let Err(err) = TransactionRecorder::record(store, transaction) {
            BalanceService::apply_delta(store, &line.account_id, line.fee)?;
            return Err(err);
        }
        Ok(recorded)
    }
}
