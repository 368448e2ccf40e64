use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::decimal::Money;
use crate::errors::Result;
use crate::interest::{annuity_payment, AccrualStrategy};
use crate::schedule::Schedule;
use crate::types::{CalculationStrategy, LoanInput, LoanSummary};

/// Standard amortization with a daily true-up.
///
/// The level monthly payment comes from the annuity formula over the monthly
/// payments that fall inside the term. Total interest comes from walking
/// every day of the term, accruing on the running balance and applying the
/// payment on each due date net of that day's interest. The walk stops early
/// once the balance is within a cent of zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizedMonthly;

/// outcome of the daily walk
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizedWalk {
    pub payment: Money,
    pub total_interest: Money,
    pub closing_balance: Money,
    /// days on which interest accrued before the balance was repaid
    pub days_walked: u32,
}

impl AmortizedMonthly {
    pub fn walk(&self, input: &LoanInput, schedule: &Schedule) -> Result<AmortizedWalk> {
        let rate = input.annual_rate();
        let payment = annuity_payment(input.principal(), rate, schedule.payment_count())?;

        let due_dates: HashSet<NaiveDate> = schedule.due_dates.iter().copied().collect();
        let mut balance = input.principal();
        let mut total_interest = Money::ZERO;
        let mut days_walked = 0u32;

        for date in schedule.days() {
            if balance <= Money::CENT {
                break;
            }

            let daily_interest = balance.daily_interest(rate);
            total_interest += daily_interest;

            if due_dates.contains(&date) {
                balance = (balance - payment + daily_interest).max(Money::ZERO);
            }
            days_walked += 1;
        }

        Ok(AmortizedWalk {
            payment,
            total_interest,
            closing_balance: balance,
            days_walked,
        })
    }
}

impl AccrualStrategy for AmortizedMonthly {
    fn strategy(&self) -> CalculationStrategy {
        CalculationStrategy::AmortizedMonthly
    }

    fn calculate(&self, input: &LoanInput, schedule: &Schedule) -> Result<LoanSummary> {
        let principal = input.principal();
        let walk = self.walk(input, schedule)?;

        debug!(
            %principal,
            payment = %walk.payment,
            total_interest = %walk.total_interest,
            closing_balance = %walk.closing_balance,
            days_walked = walk.days_walked,
            payments = schedule.payment_count(),
            "amortized walk complete"
        );

        Ok(LoanSummary::new(
            self.strategy(),
            principal,
            walk.payment,
            walk.total_interest,
            schedule.end_date,
        ))
    }
}
