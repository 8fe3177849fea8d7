//! Moneyline to decimal odds conversion and payout arithmetic.
//!
//! Odds are exact decimals rounded once, at match creation, to
//! [`ODDS_DECIMAL_PLACES`] with round-half-to-even. Payouts truncate toward
//! zero, so a winning bettor never receives a fractional unit.
//!
//! The product is computed exactly. Binary floating point would make some
//! whole products land just below the integer and truncate one unit short:
//! `100 * 1.13` is `112.99999999999999` as an `f64`, but pays `113` here.

use std::cmp::Ordering;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::DomainError;

/// Decimal payout multiplier: total return (stake + profit) per unit staked.
pub type Odds = Decimal;

/// Precision of stored odds.
pub const ODDS_DECIMAL_PLACES: u32 = 2;

/// Convert an American moneyline to a decimal multiplier.
///
/// `+150` returns `2.50`, `-200` returns `1.50`. Zero has no meaning as a
/// moneyline and is rejected.
pub fn to_decimal_odds(moneyline: i64) -> Result<Odds, DomainError> {
    let hundred = Decimal::ONE_HUNDRED;
    let profit = match moneyline.cmp(&0) {
        Ordering::Greater => Decimal::from(moneyline) / hundred,
        Ordering::Less => hundred / Decimal::from(moneyline.unsigned_abs()),
        Ordering::Equal => return Err(DomainError::InvalidOdds { moneyline }),
    };

    Ok((Decimal::ONE + profit)
        .round_dp_with_strategy(ODDS_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven))
}

/// Total credited to a winning stake: `floor(stake * odds)`.
///
/// Returns `None` when the product does not fit a balance.
#[must_use]
pub fn winning_return(stake: i64, odds: Odds) -> Option<i64> {
    Decimal::from(stake).checked_mul(odds)?.trunc().to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn positive_moneyline_adds_profit_per_hundred() {
        assert_eq!(to_decimal_odds(150).unwrap(), dec!(2.50));
        assert_eq!(to_decimal_odds(100).unwrap(), dec!(2.00));
        assert_eq!(to_decimal_odds(125).unwrap(), dec!(2.25));
    }

    #[test]
    fn negative_moneyline_divides_hundred() {
        assert_eq!(to_decimal_odds(-200).unwrap(), dec!(1.50));
        assert_eq!(to_decimal_odds(-110).unwrap(), dec!(1.91));
        assert_eq!(to_decimal_odds(-300).unwrap(), dec!(1.33));
    }

    #[test]
    fn midpoints_round_to_even() {
        // 1 + 100/800 = 1.125, 1 + 100/160 = 1.625
        assert_eq!(to_decimal_odds(-800).unwrap(), dec!(1.12));
        assert_eq!(to_decimal_odds(-160).unwrap(), dec!(1.62));
    }

    #[test]
    fn zero_moneyline_is_rejected() {
        assert_eq!(
            to_decimal_odds(0),
            Err(DomainError::InvalidOdds { moneyline: 0 })
        );
    }

    #[test]
    fn extreme_moneylines_do_not_panic() {
        assert!(to_decimal_odds(i64::MIN).is_ok());
        assert!(to_decimal_odds(i64::MAX).is_ok());
    }

    #[test]
    fn winning_return_truncates() {
        assert_eq!(winning_return(100, dec!(2.50)), Some(250));
        assert_eq!(winning_return(33, dec!(1.91)), Some(63)); // 63.03
        assert_eq!(winning_return(7, dec!(1.15)), Some(8)); // 8.05
    }

    #[test]
    fn winning_return_is_exact_where_floats_fall_short() {
        let odds = to_decimal_odds(-795).unwrap();
        assert_eq!(odds, dec!(1.13));
        assert_eq!(winning_return(100, odds), Some(113));
        assert_eq!((100.0_f64 * 1.13) as i64, 112);
    }

    #[test]
    fn winning_return_reports_overflow() {
        assert_eq!(winning_return(i64::MAX, dec!(2.50)), None);
    }
}
