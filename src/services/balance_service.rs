//! The single authority for account balance mutation.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::errors::LedgerError;
use crate::ledger::LedgerStore;
use crate::money;

use super::ServiceResult;

pub struct BalanceService;

impl BalanceService {
    /// Applies a signed delta to the account and returns the new balance.
    ///
    /// No lower bound is enforced; a negative result is the trigger for
    /// outstanding-charge tracking, not a rejected operation. Every balance
    /// write in the crate passes through here.
    pub fn apply_delta(
        store: &mut LedgerStore,
        account_id: &str,
        delta: Decimal,
    ) -> ServiceResult<Decimal> {
        let account = store
            .account_mut(account_id)
            .ok_or_else(|| LedgerError::not_found("account", account_id))?;
        account.balance = money::round_minor(account.balance + delta);
        account.updated_at = Utc::now();
        let balance = account.balance;
        store.touch();
        tracing::debug!(account = account_id, %delta, %balance, "applied balance delta");
        Ok(balance)
    }
}
