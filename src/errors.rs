use chrono::NaiveDate;
use thiserror::Error;

use crate::types::RepaymentType;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid repayment type: {repayment_type}")]
    InvalidRepaymentType {
        repayment_type: String,
    },

    #[error("repayment type not implemented: {repayment_type}")]
    RepaymentTypeNotImplemented {
        repayment_type: RepaymentType,
    },

    #[error("degenerate term: {start_date} to {end_date} contains no monthly payment date")]
    DegenerateTerm {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },

    #[error("invalid input: {field}: {reason}")]
    InvalidInput {
        field: String,
        reason: String,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl LoanError {
    pub(crate) fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// errors caused by the request itself (a "bad request" at the boundary)
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            LoanError::CalculationError { .. }
                | LoanError::InvalidConfiguration { .. }
        )
    }
}

impl From<serde_json::Error> for LoanError {
    fn from(e: serde_json::Error) -> Self {
        LoanError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_type() {
        let err = LoanError::InvalidRepaymentType {
            repayment_type: "balloon".to_string(),
        };
        assert_eq!(err.to_string(), "invalid repayment type: balloon");

        let err = LoanError::RepaymentTypeNotImplemented {
            repayment_type: RepaymentType::InterestOnly,
        };
        assert_eq!(err.to_string(), "repayment type not implemented: interest-only");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(LoanError::invalid_input("loan_amount", "must be at least 1").is_client_error());
        assert!(LoanError::Serialization("eof".to_string()).is_client_error());
        assert!(!LoanError::CalculationError { message: "overflow".to_string() }.is_client_error());
    }
}
