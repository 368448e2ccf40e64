use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// fixed year basis: every year has 365 days
pub const DAYS_IN_YEAR: u32 = 365;

pub const MONTHS_IN_YEAR: u32 = 12;

/// decimal places kept on every money operation
pub const MONEY_SCALE: u32 = 8;

/// Money amount held at 8 decimal places.
///
/// Every arithmetic result is rounded back to 8 places, so sums of money
/// values are exact at that scale and independent of the platform. Amounts
/// go over the wire as JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    /// one cent, the threshold below which a balance counts as repaid
    pub const CENT: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MONEY_SCALE))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(MONEY_SCALE)))
    }

    /// create from whole currency units
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// interest accrued on this balance for a single day at `annual_rate`
    pub fn daily_interest(&self, annual_rate: Rate) -> Self {
        Money::from_decimal(self.0 * annual_rate.daily_rate().as_decimal())
    }

    /// split evenly into `parts` installments
    pub fn split(&self, parts: u32) -> Self {
        Money::from_decimal(self.0 / Decimal::from(parts.max(1)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(MONEY_SCALE))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(MONEY_SCALE);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(MONEY_SCALE))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp(MONEY_SCALE);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money((self.0 * other).round_dp(MONEY_SCALE))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money((self.0 / other).round_dp(MONEY_SCALE))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + *x)
    }
}

/// nominal annual rate expressed as a fraction of one (0.09 = 9%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// annual rate divided by 365, no compounding of the daily rate
    pub fn daily_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(DAYS_IN_YEAR))
    }

    /// annual rate divided by 12
    pub fn monthly_rate(&self) -> Rate {
        Rate(self.0 / Decimal::from(MONTHS_IN_YEAR))
    }

    /// (1 + rate)^periods by repeated multiplication, `None` on overflow
    pub fn compound_factor(&self, periods: u32) -> Option<Decimal> {
        let base = Decimal::ONE + self.0;
        (0..periods).try_fold(Decimal::ONE, |factor, _| factor.checked_mul(base))
    }

    /// true when the rate is a fraction in [0, 1]
    pub fn is_unit_fraction(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_daily_interest() {
        let balance = Money::from_major(100_000);
        let rate = Rate::from_decimal(dec!(0.09));

        let interest = balance.daily_interest(rate);
        assert_eq!(interest, Money::from_str_exact("24.65753425").unwrap());
    }

    #[test]
    fn test_split_into_daily_installments() {
        let principal = Money::from_major(100_000);
        let installment = principal.split(183);
        assert_eq!(installment, Money::from_str_exact("546.44808743").unwrap());

        // zero parts are treated as a single installment
        assert_eq!(principal.split(0), principal);
    }

    #[test]
    fn test_rate_periods() {
        let rate = Rate::from_decimal(dec!(0.12));
        assert_eq!(rate.monthly_rate().as_decimal(), dec!(0.01));
        assert_eq!(rate.daily_rate().as_decimal(), dec!(0.12) / dec!(365));
        assert_eq!(rate.to_string(), "12.00%");
    }

    #[test]
    fn test_compound_factor() {
        let rate = Rate::from_decimal(dec!(0.01));
        assert_eq!(rate.compound_factor(0), Some(Decimal::ONE));
        assert_eq!(rate.compound_factor(2), Some(dec!(1.0201)));
    }

    #[test]
    fn test_compound_factor_overflow() {
        // (1 + 1/12)^1200 has more integer digits than a Decimal can hold
        let rate = Rate::ONE.monthly_rate();
        assert_eq!(rate.compound_factor(1_200), None);
        assert!(rate.compound_factor(120).is_some());
    }

    #[test]
    fn test_money_serializes_as_number() {
        let m = Money::from_str_exact("2268.49315068").unwrap();
        let value = serde_json::to_value(m).unwrap();
        assert!(value.is_f64());
        assert!((value.as_f64().unwrap() - 2268.49315068).abs() < 1e-6);

        let restored: Money = serde_json::from_value(value).unwrap();
        assert_eq!(restored.round_dp(2), m.round_dp(2));
    }

    #[test]
    fn test_money_sum_is_exact() {
        let parts = vec![Money::from_str_exact("0.1").unwrap(); 10];
        let total: Money = parts.iter().sum();
        assert_eq!(total, Money::from_major(1));
    }

    #[test]
    fn test_unit_fraction() {
        assert!(Rate::ZERO.is_unit_fraction());
        assert!(Rate::ONE.is_unit_fraction());
        assert!(!Rate::from_decimal(dec!(1.01)).is_unit_fraction());
        assert!(!Rate::from_decimal(dec!(-0.01)).is_unit_fraction());
    }
}
