pub mod amortized;
pub mod daily_principal;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::schedule::Schedule;
use crate::types::{CalculationStrategy, LoanInput, LoanSummary};

pub use amortized::AmortizedMonthly;
pub use daily_principal::FixedDailyPrincipal;

/// trait for the accrual engines behind the `repayment` type
pub trait AccrualStrategy {
    fn strategy(&self) -> CalculationStrategy;

    fn calculate(&self, input: &LoanInput, schedule: &Schedule) -> Result<LoanSummary>;
}

/// engine for the given strategy
pub fn engine_for(strategy: CalculationStrategy) -> &'static (dyn AccrualStrategy + Send + Sync) {
    match strategy {
        CalculationStrategy::AmortizedMonthly => &AmortizedMonthly,
        CalculationStrategy::FixedDailyPrincipal => &FixedDailyPrincipal,
    }
}

/// level payment over `months` periods
///
/// PMT = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n when r is zero
pub fn annuity_payment(principal: Money, annual_rate: Rate, months: u32) -> Result<Money> {
    let months = months.max(1);
    let monthly_rate = annual_rate.monthly_rate();

    if monthly_rate.is_zero() {
        return Ok(principal.split(months));
    }

    let overflow = || LoanError::CalculationError {
        message: format!("payment overflow for {} over {} months at {}", principal, months, annual_rate),
    };

    let compound = monthly_rate.compound_factor(months).ok_or_else(overflow)?;
    let numerator = principal
        .as_decimal()
        .checked_mul(monthly_rate.as_decimal())
        .and_then(|n| n.checked_mul(compound))
        .ok_or_else(overflow)?;
    let denominator = compound - rust_decimal::Decimal::ONE;

    Ok(Money::from_decimal(numerator / denominator))
}
