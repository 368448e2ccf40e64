use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// repayment type requested for a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentType {
    /// principal and interest repaid over the term
    Repayment,
    /// interest paid periodically, principal at maturity (not implemented)
    InterestOnly,
    /// interest deducted up front from the advance (not implemented)
    InterestRetained,
}

impl RepaymentType {
    pub const ALL: [RepaymentType; 3] = [
        RepaymentType::Repayment,
        RepaymentType::InterestOnly,
        RepaymentType::InterestRetained,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RepaymentType::Repayment => "repayment",
            RepaymentType::InterestOnly => "interest-only",
            RepaymentType::InterestRetained => "interest-retained",
        }
    }
}

impl fmt::Display for RepaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepaymentType {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self> {
        RepaymentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| LoanError::InvalidRepaymentType {
                repayment_type: s.to_string(),
            })
    }
}

/// algorithm used for the `repayment` type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationStrategy {
    /// level annuity payment, true interest from a daily walk
    AmortizedMonthly,
    /// equal principal every day, interest on the declining balance
    #[default]
    FixedDailyPrincipal,
}

/// what to do when the term holds no monthly payment date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermPolicy {
    /// treat the term as a single period
    #[default]
    CoerceToOnePeriod,
    /// fail with `DegenerateTerm`
    RejectShortTerm,
}

/// validated loan parameters, immutable once constructed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanInput {
    principal: Money,
    annual_rate: Rate,
    start_date: NaiveDate,
    end_date: NaiveDate,
    repayment_type: RepaymentType,
    borrower_name: String,
}

impl LoanInput {
    pub fn new(
        principal: Money,
        annual_rate: Rate,
        start_date: NaiveDate,
        end_date: NaiveDate,
        repayment_type: RepaymentType,
        borrower_name: impl Into<String>,
    ) -> Result<Self> {
        if !principal.is_positive() {
            return Err(LoanError::invalid_input("principal", "must be positive"));
        }
        if !annual_rate.is_unit_fraction() {
            return Err(LoanError::invalid_input(
                "annual_rate",
                format!("{} is outside [0, 1]", annual_rate.as_decimal()),
            ));
        }
        if end_date <= start_date {
            return Err(LoanError::InvalidDate {
                message: format!("end date {} must be after start date {}", end_date, start_date),
            });
        }

        Ok(Self {
            principal,
            annual_rate,
            start_date,
            end_date,
            repayment_type,
            borrower_name: borrower_name.into(),
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn repayment_type(&self) -> RepaymentType {
        self.repayment_type
    }

    pub fn borrower_name(&self) -> &str {
        &self.borrower_name
    }
}

/// one day of the fixed daily principal ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "day")]
    pub day_index: u32,
    pub date: NaiveDate,
    #[serde(rename = "balance_start")]
    pub balance_before: Money,
    pub daily_interest: Money,
    pub principal_payment: Money,
    pub total_payment: Money,
}

/// result of a single loan calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub strategy: CalculationStrategy,
    /// level monthly payment, or the average monthly outlay for the daily ledger
    #[serde(rename = "monthly_payment")]
    pub periodic_payment: Money,
    pub total_interest: Money,
    pub total_paid: Money,
    #[serde(rename = "final_payment")]
    pub final_payment_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_principal_payment: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_payments: Option<Vec<DailyRecord>>,
}

impl LoanSummary {
    /// summary without a ledger; `total_paid` is derived from the principal
    pub fn new(
        strategy: CalculationStrategy,
        principal: Money,
        periodic_payment: Money,
        total_interest: Money,
        final_payment_date: NaiveDate,
    ) -> Self {
        Self {
            strategy,
            periodic_payment,
            total_interest,
            total_paid: principal + total_interest,
            final_payment_date,
            daily_principal_payment: None,
            total_days: None,
            daily_payments: None,
        }
    }

    pub fn with_ledger(mut self, daily_principal: Money, ledger: Vec<DailyRecord>) -> Self {
        self.daily_principal_payment = Some(daily_principal);
        self.total_days = Some(ledger.len() as u32);
        self.daily_payments = Some(ledger);
        self
    }

    pub fn ledger(&self) -> &[DailyRecord] {
        self.daily_payments.as_deref().unwrap_or(&[])
    }
}
