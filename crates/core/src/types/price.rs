//! Lenient price parsing for catalog input.
//!
//! Catalog feeds carry prices as decimal strings (e.g., `"49.95"`). Cart
//! lines snapshot that value at add-time using [`rust_decimal::Decimal`]
//! so totals stay exact under multiplication.

use rust_decimal::Decimal;

/// Parse a raw catalog price string into a [`Decimal`].
///
/// Unparseable or negative input coerces to zero rather than failing;
/// cart operations are total functions and a bad feed price must not
/// reject the add. Callers that want to surface bad prices should
/// validate at the catalog boundary instead.
#[must_use]
pub fn lenient_price(raw: &str) -> Decimal {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|amount| !amount.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}
