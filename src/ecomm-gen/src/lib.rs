use rust_decimal::Decimal;

pub mod error;
pub mod output;
pub mod store;
pub mod time;

/// Number of digits after the decimal point for every monetary value.
pub const DECIMAL_SCALE: u32 = 2;

/// Rounds a monetary value to [`DECIMAL_SCALE`] digits and pins the scale so
/// `20` is always rendered as `20.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut value = value.round_dp(DECIMAL_SCALE);
    value.rescale(DECIMAL_SCALE);
    value
}
