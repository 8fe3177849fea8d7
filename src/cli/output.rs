//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use rust_decimal::Decimal;
use tabled::{Table, Tabled};

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<14} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("⚠ {message}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}

/// Print rows as an indented table.
pub fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) {
    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
}

/// Format a moneyline with an explicit sign, e.g. `+150`, `-200`.
#[must_use]
pub fn moneyline(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

/// Format both sides' decimal odds at two places, e.g. `2.50 / 1.50`.
#[must_use]
pub fn odds_pair(a: Decimal, b: Decimal) -> String {
    format!("{a:.2} / {b:.2}")
}

/// Format a currency amount, e.g. `$1000`, `-$50`.
#[must_use]
pub fn money(value: impl Into<i128>) -> String {
    let value = value.into();
    if value < 0 {
        format!("-${}", value.unsigned_abs())
    } else {
        format!("${value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moneyline_has_explicit_sign() {
        assert_eq!(moneyline(150), "+150");
        assert_eq!(moneyline(-200), "-200");
    }

    #[test]
    fn odds_pair_pads_to_two_places() {
        use rust_decimal_macros::dec;
        assert_eq!(odds_pair(dec!(2.5), dec!(1.91)), "2.50 / 1.91");
    }

    #[test]
    fn money_puts_sign_before_symbol() {
        assert_eq!(money(1000), "$1000");
        assert_eq!(money(-50), "-$50");
        assert_eq!(money(i64::MIN), "-$9223372036854775808");
    }
}
