use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};
use crate::types::{CalculationStrategy, TermPolicy};

/// default cap on the term length accepted at the request boundary (100 years)
pub const DEFAULT_MAX_TERM_DAYS: u32 = 36_525;

/// default cap on the borrower name length
pub const DEFAULT_MAX_NAME_LENGTH: usize = 255;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// algorithm used for the `repayment` type
    pub strategy: CalculationStrategy,
    pub term_policy: TermPolicy,
    /// longest term, in days, a request may ask for; `None` disables the check
    pub max_term_days: Option<u32>,
    pub max_name_length: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            strategy: CalculationStrategy::default(),
            term_policy: TermPolicy::default(),
            max_term_days: Some(DEFAULT_MAX_TERM_DAYS),
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

impl CalculatorConfig {
    /// level monthly payment with a daily interest true-up
    pub fn amortized() -> Self {
        Self {
            strategy: CalculationStrategy::AmortizedMonthly,
            ..Self::default()
        }
    }

    /// equal daily principal with the full ledger
    pub fn daily_principal() -> Self {
        Self {
            strategy: CalculationStrategy::FixedDailyPrincipal,
            ..Self::default()
        }
    }

    /// reject terms that hold no monthly payment date
    pub fn strict(mut self) -> Self {
        self.term_policy = TermPolicy::RejectShortTerm;
        self
    }

    pub fn with_max_term_days(mut self, days: Option<u32>) -> Self {
        self.max_term_days = days;
        self
    }

    /// load from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_term_days == Some(0) {
            return Err(LoanError::InvalidConfiguration {
                message: "max_term_days must be positive".to_string(),
            });
        }
        if self.max_name_length == 0 {
            return Err(LoanError::InvalidConfiguration {
                message: "max_name_length must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.strategy, CalculationStrategy::FixedDailyPrincipal);
        assert_eq!(config.term_policy, TermPolicy::CoerceToOnePeriod);
        assert_eq!(config.max_term_days, Some(DEFAULT_MAX_TERM_DAYS));
        assert_eq!(config.max_name_length, 255);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(CalculatorConfig::amortized().strategy, CalculationStrategy::AmortizedMonthly);

        let strict = CalculatorConfig::daily_principal().strict();
        assert_eq!(strict.strategy, CalculationStrategy::FixedDailyPrincipal);
        assert_eq!(strict.term_policy, TermPolicy::RejectShortTerm);
    }

    #[test]
    fn test_from_json_partial() {
        let config = CalculatorConfig::from_json(r#"{ "strategy": "amortized_monthly" }"#).unwrap();
        assert_eq!(config.strategy, CalculationStrategy::AmortizedMonthly);
        assert_eq!(config.max_name_length, DEFAULT_MAX_NAME_LENGTH);

        let config = CalculatorConfig::from_json(
            r#"{ "term_policy": "reject_short_term", "max_term_days": null }"#,
        )
        .unwrap();
        assert_eq!(config.term_policy, TermPolicy::RejectShortTerm);
        assert_eq!(config.max_term_days, None);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CalculatorConfig::amortized().strict().with_max_term_days(Some(3_650));
        let restored = CalculatorConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            CalculatorConfig::from_json(r#"{ "max_term_days": 0 }"#),
            Err(LoanError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            CalculatorConfig::from_json(r#"{ "strategy": "weekly" }"#),
            Err(LoanError::Serialization(_))
        ));
    }
}
