//! Currency rendering for report artifacts
//!
//! Amounts are rendered with the rupee symbol, 3-digit grouping and two
//! decimal places. Rounding happens at the cent level so "999.999" renders
//! as ₹1,000.00 rather than ₹999.100.

use crate::constants::CURRENCY_SYMBOL;

/// Format an amount with the currency symbol: 1234567.5 -> "₹1,234,567.50"
pub fn format_currency(amount: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_amount(amount))
}

/// Format an amount without the symbol: 1234567.5 -> "1,234,567.50"
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let grouped = group_digits(whole);
    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, fraction)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - position;
        if position > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
