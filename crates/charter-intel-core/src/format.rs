//! Fixed-locale (fr-MA) rendering of dirham amounts for display.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::Money;

const GROUP_SEPARATOR: char = '.';

/// Whole-dirham amount with fr-MA grouping and a currency suffix:
/// `5100000` -> `"5.100.000 MAD"`.
pub fn format_mad(amount: Money) -> String {
    format!("{} MAD", format_mad_plain(amount))
}

/// Whole-dirham amount with fr-MA grouping and no currency suffix.
///
/// Halves round away from zero, so `0.5` renders as `1` and `-0.5` as `-1`.
pub fn format_mad_plain(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().normalize().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Short form used on ranking tables: `1.2M`, `24K`, or the bare value below
/// one thousand.
pub fn format_compact(amount: Money) -> String {
    let million = dec!(1000000);
    let thousand = dec!(1000);
    if amount >= million {
        let scaled = (amount / million).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.1}M", scaled)
    } else if amount >= thousand {
        let scaled = (amount / thousand).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{}K", scaled.trunc().normalize())
    } else {
        amount.normalize().to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
