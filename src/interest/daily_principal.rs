use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::Money;
use crate::errors::Result;
use crate::interest::AccrualStrategy;
use crate::schedule::Schedule;
use crate::types::{CalculationStrategy, DailyRecord, LoanInput, LoanSummary};

/// Fixed principal, daily interest.
///
/// Principal is repaid in equal installments on every day of the term and
/// interest accrues daily on the balance left at the start of each day. The
/// reported periodic payment is the total outlay averaged over the monthly
/// periods of the term.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDailyPrincipal;

impl FixedDailyPrincipal {
    /// day-by-day ledger for the term, with the per-day principal installment
    pub fn ledger(&self, input: &LoanInput, schedule: &Schedule) -> (Money, Vec<DailyRecord>) {
        let rate = input.annual_rate();
        let daily_principal = input.principal().split(schedule.total_days);

        let mut balance = input.principal();
        let mut ledger = Vec::with_capacity(schedule.total_days as usize);

        for (date, day_index) in schedule.days().zip(1..) {
            let daily_interest = balance.daily_interest(rate);
            ledger.push(DailyRecord {
                day_index,
                date,
                balance_before: balance,
                daily_interest,
                principal_payment: daily_principal,
                total_payment: daily_principal + daily_interest,
            });
            // may end a few units of the last decimal place off zero
            balance -= daily_principal;
        }

        (daily_principal, ledger)
    }
}

impl AccrualStrategy for FixedDailyPrincipal {
    fn strategy(&self) -> CalculationStrategy {
        CalculationStrategy::FixedDailyPrincipal
    }

    fn calculate(&self, input: &LoanInput, schedule: &Schedule) -> Result<LoanSummary> {
        let principal = input.principal();
        let (daily_principal, ledger) = self.ledger(input, schedule);

        let total_interest: Money = ledger.iter().map(|r| r.daily_interest).sum();
        let average_monthly_payment =
            (total_interest + principal) / Decimal::from(schedule.total_months);

        debug!(
            %principal,
            %daily_principal,
            %total_interest,
            %average_monthly_payment,
            total_days = ledger.len(),
            months = schedule.total_months,
            "daily principal ledger complete"
        );

        Ok(LoanSummary::new(
            self.strategy(),
            principal,
            average_monthly_payment,
            total_interest,
            schedule.end_date,
        )
        .with_ledger(daily_principal, ledger))
    }
}
