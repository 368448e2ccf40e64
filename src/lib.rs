pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod request;
pub mod schedule;
pub mod types;

// re-export key types
pub use calculator::{calculate_loan_summary, LoanCalculator};
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use interest::{AccrualStrategy, AmortizedMonthly, FixedDailyPrincipal};
pub use request::{LoanRequest, LoanResponse, STATUS_CREATED};
pub use schedule::Schedule;
pub use types::{
    CalculationStrategy, DailyRecord, LoanInput, LoanSummary, RepaymentType, TermPolicy,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
