//! The payable-item queue for charges that exceeded an account's funds.

use rust_decimal::Decimal;

use crate::domain::{BillingPeriod, OutstandingCharge, Transaction};
use crate::errors::LedgerError;
use crate::ledger::LedgerStore;

use super::ServiceResult;

pub struct OutstandingTracker;

impl OutstandingTracker {
    /// Records one unpaid charge when the triggering charge transaction left
    /// the balance negative. Returns whether a charge was recorded.
    ///
    /// The amount owed is the fee just charged, not the deficit, and the due
    /// date is the 15th of the month following the billing period. Issued
    /// only after the triggering transaction is committed.
    pub fn record_if_shortfall(
        store: &mut LedgerStore,
        charge_txn: &Transaction,
        course_name: &str,
        period: &BillingPeriod,
    ) -> ServiceResult<bool> {
        if charge_txn.balance_after >= Decimal::ZERO {
            return Ok(false);
        }
        let course_id = charge_txn
            .course_id
            .clone()
            .ok_or_else(|| LedgerError::validation("course_id", "shortfall requires a course"))?;
        let charge = OutstandingCharge::new(
            &charge_txn.account_id,
            course_id,
            course_name,
            period.label(),
            -charge_txn.amount,
            period.due_date(),
        );
        tracing::info!(
            account = %charge_txn.account_id,
            amount = %charge.amount,
            due = %charge.due_date,
            "outstanding charge recorded"
        );
        store.insert_outstanding_charge(charge);
        Ok(true)
    }

    /// Marks an outstanding charge as paid. Settlement is an external
    /// process; the ledger never reconciles these automatically on top-up.
    pub fn mark_paid(store: &mut LedgerStore, charge_id: &str) -> ServiceResult<()> {
        let charge = store
            .outstanding_charge_mut(charge_id)
            .ok_or_else(|| LedgerError::not_found("outstanding charge", charge_id))?;
        charge.mark_paid();
        store.touch();
        Ok(())
    }

    /// Unpaid charges for one account, oldest due date first.
    pub fn unpaid_for<'a>(store: &'a LedgerStore, account_id: &str) -> Vec<&'a OutstandingCharge> {
        let mut charges: Vec<&OutstandingCharge> = store
            .outstanding_charges()
            .iter()
            .filter(|charge| {
                charge.account_id == account_id
                    && charge.status == crate::domain::ChargeStatus::Unpaid
            })
            .collect();
        charges.sort_by_key(|charge| charge.due_date);
        charges
    }
}
