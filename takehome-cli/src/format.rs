//! Display formatting for dollar amounts and rates.

use rust_decimal::{Decimal, RoundingStrategy};

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats `amount` as US dollars: `$100,000`, or `$1,234.50` with cents.
/// Negative amounts get a leading minus: `-$1,595`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use takehome_cli::format::format_currency;
///
/// assert_eq!(format_currency(dec!(75436), false), "$75,436");
/// assert_eq!(format_currency(dec!(-1234.5), true), "-$1,234.50");
/// ```
pub fn format_currency(
    amount: Decimal,
    show_cents: bool,
) -> String {
    let places = if show_cents { 2 } else { 0 };
    let rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", places as usize, rounded.abs());
    let (whole, cents) = match body.split_once('.') {
        Some((whole, cents)) => (whole, Some(cents)),
        None => (body.as_str(), None),
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let mut formatted = format!("{sign}${}", group_thousands(whole));
    if let Some(cents) = cents {
        formatted.push('.');
        formatted.push_str(cents);
    }
    formatted
}

/// Formats a fractional rate as a percentage: `0.24564` with one decimal
/// becomes `24.6%`.
pub fn format_percentage(
    rate: Decimal,
    decimals: u32,
) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}%", decimals as usize, percent)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn whole_dollars_with_grouping() {
        assert_eq!(format_currency(dec!(100000), false), "$100,000");
        assert_eq!(format_currency(dec!(1234567), false), "$1,234,567");
        assert_eq!(format_currency(dec!(999), false), "$999");
        assert_eq!(format_currency(Decimal::ZERO, false), "$0");
    }

    #[test]
    fn cents_are_padded_and_rounded() {
        assert_eq!(format_currency(dec!(1234.5), true), "$1,234.50");
        assert_eq!(format_currency(dec!(10918.2), true), "$10,918.20");
        assert_eq!(format_currency(dec!(0.005), true), "$0.01");
    }

    #[test]
    fn whole_dollars_round_half_away_from_zero() {
        assert_eq!(format_currency(dec!(1087.5), false), "$1,088");
        assert_eq!(format_currency(dec!(-1087.5), false), "-$1,088");
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(format_currency(dec!(-1595), false), "-$1,595");
        assert_eq!(format_currency(dec!(-0.001), true), "$0.00");
    }

    #[test]
    fn percentage_with_default_precision() {
        assert_eq!(format_percentage(dec!(0.24564), 1), "24.6%");
        assert_eq!(format_percentage(dec!(0.22), 1), "22.0%");
        assert_eq!(format_percentage(dec!(0.3), 0), "30%");
    }

    #[test]
    fn percentage_with_more_precision() {
        assert_eq!(format_percentage(dec!(0.2704422526), 2), "27.04%");
    }
}
