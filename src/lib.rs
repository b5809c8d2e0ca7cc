#![doc(test(attr(deny(warnings))))]

//! Edufund Core implements the ledger and batch-settlement engine behind
//! prepaid education accounts: manual top-ups, bulk course-fee runs,
//! outstanding-charge tracking for shortfalls, and an append-only audit
//! trail, with JSON snapshot persistence.

pub mod domain;
pub mod errors;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Edufund Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
