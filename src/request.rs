use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::schedule::day_count;
use crate::types::{CalculationStrategy, LoanInput, LoanSummary, RepaymentType};

/// status reported with a successful calculation ("created")
pub const STATUS_CREATED: u16 = 201;

/// calculation request as received by the calculate endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub loan_amount: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_interest_rate: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub repayment_type: String,
    pub name: String,
    /// overrides the configured strategy for this request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<CalculationStrategy>,
}

impl LoanRequest {
    /// check field ranges and build the immutable loan input
    pub fn validate(&self, config: &CalculatorConfig) -> Result<LoanInput> {
        let result = self.check(config);
        if let Err(err) = &result {
            warn!(error = %err, "loan request rejected");
        }
        result
    }

    fn check(&self, config: &CalculatorConfig) -> Result<LoanInput> {
        if self.loan_amount < 1 {
            return Err(LoanError::invalid_input("loan_amount", "must be at least 1"));
        }

        let rate = Rate::from_decimal(self.annual_interest_rate);
        if !rate.is_unit_fraction() {
            return Err(LoanError::invalid_input(
                "annual_interest_rate",
                "must be between 0 and 1",
            ));
        }

        if self.end_date <= self.start_date {
            return Err(LoanError::invalid_input("end_date", "must be a date after start_date"));
        }

        if let Some(max_days) = config.max_term_days {
            let days = day_count(self.start_date, self.end_date);
            if days > max_days {
                return Err(LoanError::invalid_input(
                    "end_date",
                    format!("term of {} days exceeds the maximum of {}", days, max_days),
                ));
            }
        }

        let repayment_type: RepaymentType = self.repayment_type.parse()?;

        if self.name.trim().is_empty() {
            return Err(LoanError::invalid_input("name", "is required"));
        }
        if self.name.chars().count() > config.max_name_length {
            return Err(LoanError::invalid_input(
                "name",
                format!("may not be greater than {} characters", config.max_name_length),
            ));
        }

        LoanInput::new(
            Money::from_major(self.loan_amount),
            rate,
            self.start_date,
            self.end_date,
            repayment_type,
            self.name.clone(),
        )
    }
}

/// calculation result returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResponse {
    pub summary: LoanSummary,
    pub borrower_name: String,
}

impl LoanResponse {
    pub fn status(&self) -> u16 {
        STATUS_CREATED
    }
}
