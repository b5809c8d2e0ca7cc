//! Validates and executes single manual funding events.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{Actor, Transaction};
use crate::errors::LedgerError;
use crate::ledger::LedgerStore;
use crate::money;
use crate::services::{AuditService, BalanceService, TransactionRecorder};

use super::ServiceResult;

/// One manual funding event against a single account.
#[derive(Debug, Clone)]
pub struct TopUpRequest {
    pub account_id: String,
    pub amount: Decimal,
    /// Funding channel, e.g. `GIRO` or `Cash`.
    pub scheme: String,
    pub reason: String,
    pub effective_date: NaiveDate,
    pub reference: Option<String>,
    pub actor: Actor,
}

pub struct TopUpService;

impl TopUpService {
    /// Credits the account and returns the recorded transaction id.
    ///
    /// Validation failures reject the whole request before any write. The
    /// balance mutation and transaction record form one atomic unit: if the
    /// record cannot be appended the delta is compensated before the error
    /// surfaces.
    pub fn top_up(store: &mut LedgerStore, request: TopUpRequest) -> ServiceResult<String> {
        Self::validate(&request)?;
        if store.account(&request.account_id).is_none() {
            return Err(LedgerError::not_found("account", &request.account_id));
        }

        let amount = money::round_minor(request.amount);
        let balance_after = BalanceService::apply_delta(store, &request.account_id, amount)?;

        let transaction = Transaction::top_up(
            &request.account_id,
            amount,
            balance_after,
            format!("Top-up via {}: {}", request.scheme.trim(), request.reason.trim()),
            request.reference.clone(),
        );
        let transaction_id = transaction.id.clone();
        if let Err(err) = TransactionRecorder::record(store, transaction) {
            BalanceService::apply_delta(store, &request.account_id, -amount)?;
            return Err(err);
        }

        if let Some(account) = store.account_mut(&request.account_id) {
            account.last_top_up = Some(request.effective_date);
        }
        store.touch();

        AuditService::append(
            store,
            "account.top_up",
            "account",
            &request.account_id,
            &request.actor,
            format!(
                "Topped up {} into account {}",
                money::format_amount(amount),
                request.account_id
            ),
        )?;

        tracing::info!(
            account = %request.account_id,
            amount = %amount,
            transaction = %transaction_id,
            "top-up applied"
        );
        Ok(transaction_id)
    }

    fn validate(request: &TopUpRequest) -> ServiceResult<()> {
        if request.amount <= Decimal::ZERO {
            return Err(LedgerError::validation(
                "amount",
                "top-up amount must be greater than zero",
            ));
        }
        if request.scheme.trim().is_empty() {
            return Err(LedgerError::validation("scheme", "scheme must not be empty"));
        }
        if request.reason.trim().is_empty() {
            return Err(LedgerError::validation("reason", "reason must not be empty"));
        }
        Ok(())
    }
}
