//! Fixed-point money helpers.
//!
//! All amounts in the ledger are [`rust_decimal::Decimal`] values quantized
//! to the currency's minor-unit precision so batch arithmetic never drifts.

use rust_decimal::Decimal;

/// ISO 4217 code of the ledger currency.
pub const CURRENCY_CODE: &str = "SGD";

/// Minor-unit precision of the ledger currency.
pub const MINOR_UNITS: u32 = 2;

/// Quantizes an amount to the currency's minor-unit precision.
pub fn round_minor(amount: Decimal) -> Decimal {
    amount.round_dp(MINOR_UNITS)
}

/// Renders an amount with the currency code, e.g. `SGD 120.00`.
pub fn format_amount(amount: Decimal) -> String {
    format!("{} {:.2}", CURRENCY_CODE, amount)
}
