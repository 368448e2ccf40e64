use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::errors::{LoanError, Result};
use crate::interest::engine_for;
use crate::request::{LoanRequest, LoanResponse};
use crate::schedule::Schedule;
use crate::types::{CalculationStrategy, LoanInput, LoanSummary, RepaymentType, TermPolicy};

/// Dispatches a loan to the accrual engine for its repayment type.
///
/// Holds no state besides its configuration, so one calculator can serve
/// any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct LoanCalculator {
    config: CalculatorConfig,
}

impl LoanCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// calculate with the configured strategy
    pub fn calculate(&self, input: &LoanInput) -> Result<LoanSummary> {
        self.calculate_with(input, self.config.strategy)
    }

    /// calculate with an explicit strategy for the `repayment` type
    pub fn calculate_with(&self, input: &LoanInput, strategy: CalculationStrategy) -> Result<LoanSummary> {
        match input.repayment_type() {
            RepaymentType::Repayment => {}
            unsupported @ (RepaymentType::InterestOnly | RepaymentType::InterestRetained) => {
                warn!(repayment_type = %unsupported, "repayment type not implemented");
                return Err(LoanError::RepaymentTypeNotImplemented {
                    repayment_type: unsupported,
                });
            }
        }

        let schedule = Schedule::build(input.start_date(), input.end_date());
        if schedule.is_shorter_than_one_month() {
            match self.config.term_policy {
                TermPolicy::CoerceToOnePeriod => {
                    debug!(
                        start_date = %input.start_date(),
                        end_date = %input.end_date(),
                        "term shorter than one month, treating as a single period"
                    );
                }
                TermPolicy::RejectShortTerm => {
                    warn!(
                        start_date = %input.start_date(),
                        end_date = %input.end_date(),
                        "rejecting term with no monthly payment date"
                    );
                    return Err(LoanError::DegenerateTerm {
                        start_date: input.start_date(),
                        end_date: input.end_date(),
                    });
                }
            }
        }

        debug!(
            ?strategy,
            principal = %input.principal(),
            annual_rate = %input.annual_rate(),
            total_days = schedule.total_days,
            total_months = schedule.total_months,
            "calculating loan summary"
        );

        engine_for(strategy).calculate(input, &schedule)
    }

    /// validate a boundary request, calculate, and wrap the result
    pub fn handle(&self, request: &LoanRequest) -> Result<LoanResponse> {
        let input = request.validate(&self.config)?;
        let strategy = request.strategy.unwrap_or(self.config.strategy);
        let summary = self.calculate_with(&input, strategy)?;

        Ok(LoanResponse {
            summary,
            borrower_name: input.borrower_name().to_string(),
        })
    }

    /// JSON request in, JSON response out
    pub fn handle_json(&self, body: &str) -> Result<String> {
        let request: LoanRequest = serde_json::from_str(body)?;
        let response = self.handle(&request)?;
        Ok(serde_json::to_string(&response)?)
    }
}

/// calculate with the default configuration
pub fn calculate_loan_summary(input: &LoanInput) -> Result<LoanSummary> {
    LoanCalculator::default().calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(repayment_type: RepaymentType, start: NaiveDate, end: NaiveDate) -> LoanInput {
        LoanInput::new(
            Money::from_major(100_000),
            Rate::from_decimal(dec!(0.09)),
            start,
            end,
            repayment_type,
            "Test Borrower",
        )
        .unwrap()
    }

    fn fixture(repayment_type: RepaymentType) -> LoanInput {
        input(repayment_type, date(2025, 6, 1), date(2025, 11, 30))
    }

    #[test]
    fn test_default_strategy_is_daily_principal() {
        let summary = calculate_loan_summary(&fixture(RepaymentType::Repayment)).unwrap();

        assert_eq!(summary.strategy, CalculationStrategy::FixedDailyPrincipal);
        assert_eq!(summary.total_interest.round_dp(2), Money::from_str_exact("2268.49").unwrap());
        assert_eq!(summary.periodic_payment.round_dp(2), Money::from_str_exact("17044.75").unwrap());
    }

    #[test]
    fn test_configured_strategy_is_used() {
        let calculator = LoanCalculator::new(CalculatorConfig::amortized()).unwrap();
        let summary = calculator.calculate(&fixture(RepaymentType::Repayment)).unwrap();

        assert_eq!(summary.strategy, CalculationStrategy::AmortizedMonthly);
        assert_eq!(summary.periodic_payment.round_dp(2), Money::from_str_exact("20452.24").unwrap());
    }

    #[test]
    fn test_century_term_at_full_rate_is_a_calculation_error() {
        let calculator = LoanCalculator::new(CalculatorConfig::amortized().with_max_term_days(None)).unwrap();
        let input = LoanInput::new(
            Money::from_major(100_000),
            Rate::ONE,
            date(2000, 1, 1),
            date(2099, 12, 31),
            RepaymentType::Repayment,
            "Test Borrower",
        )
        .unwrap();

        let err = calculator.calculate(&input).unwrap_err();
        assert!(matches!(err, LoanError::CalculationError { .. }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_unimplemented_types_fail() {
        let calculator = LoanCalculator::default();

        for repayment_type in [RepaymentType::InterestOnly, RepaymentType::InterestRetained] {
            let err = calculator.calculate(&fixture(repayment_type)).unwrap_err();
            assert!(
                matches!(err, LoanError::RepaymentTypeNotImplemented { repayment_type: t } if t == repayment_type)
            );
            assert!(err.is_client_error());
        }
    }

    #[test]
    fn test_short_term_coerced_by_default() {
        let short = input(RepaymentType::Repayment, date(2025, 1, 1), date(2025, 1, 20));
        let summary = LoanCalculator::default().calculate(&short).unwrap();

        assert_eq!(summary.total_days, Some(20));
        // one period, so the average monthly figure is the whole outlay
        assert_eq!(summary.periodic_payment, summary.total_paid);
    }

    #[test]
    fn test_short_term_rejected_when_strict() {
        let calculator = LoanCalculator::new(CalculatorConfig::default().strict()).unwrap();
        let short = input(RepaymentType::Repayment, date(2025, 1, 1), date(2025, 1, 20));

        let err = calculator.calculate(&short).unwrap_err();
        assert!(matches!(err, LoanError::DegenerateTerm { .. }));

        // a full month is accepted
        let month = input(RepaymentType::Repayment, date(2025, 1, 1), date(2025, 2, 1));
        assert!(calculator.calculate(&month).is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CalculatorConfig::default().with_max_term_days(Some(0));
        assert!(LoanCalculator::new(config).is_err());
    }

    #[test]
    fn test_shared_across_threads() {
        let calculator = LoanCalculator::default();
        let loan = fixture(RepaymentType::Repayment);
        let expected = calculator.calculate(&loan).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| calculator.calculate(&loan).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
