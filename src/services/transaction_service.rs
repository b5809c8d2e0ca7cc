//! Appends immutable transaction records.

use crate::domain::common::Displayable;
use crate::domain::Transaction;
use crate::errors::LedgerError;
use crate::ledger::LedgerStore;

use super::ServiceResult;

pub struct TransactionRecorder;

impl TransactionRecorder {
    /// Appends one transaction record.
    ///
    /// `balance_after` must equal the balance left by the immediately
    /// preceding balance mutation for the same account within the same
    /// logical operation; a mismatch means the ledger would no longer
    /// reconcile and is rejected before the write.
    pub fn record(store: &mut LedgerStore, transaction: Transaction) -> ServiceResult<()> {
        let account = store
            .account(&transaction.account_id)
            .ok_or_else(|| LedgerError::not_found("account", &transaction.account_id))?;
        if account.balance != transaction.balance_after {
            return Err(LedgerError::Storage(format!(
                "transaction {} snapshots balance {} but account {} holds {}",
                transaction.id,
                transaction.balance_after,
                account.display_label(),
                account.balance
            )));
        }
        if store
            .transactions()
            .iter()
            .any(|existing| existing.id == transaction.id)
        {
            return Err(LedgerError::Storage(format!(
                "duplicate transaction id {}",
                transaction.id
            )));
        }
        store.insert_transaction(transaction);
        Ok(())
    }
}
