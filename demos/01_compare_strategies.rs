/// compare strategies - the two repayment algorithms side by side
use loan_summary_rs::chrono::NaiveDate;
use loan_summary_rs::{CalculationStrategy, LoanCalculator, LoanInput, Money, Rate, RepaymentType};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows the dispatch and walk events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let calculator = LoanCalculator::default();
    let loan = LoanInput::new(
        Money::from_major(250_000),
        Rate::from_percentage(6),
        NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("bad start date")?,
        NaiveDate::from_ymd_opt(2026, 1, 30).ok_or("bad end date")?,
        RepaymentType::Repayment,
        "Comparison Borrower",
    )?;

    println!("=== strategy comparison ===\n");
    for strategy in [CalculationStrategy::AmortizedMonthly, CalculationStrategy::FixedDailyPrincipal] {
        let summary = calculator.calculate_with(&loan, strategy)?;
        println!("{:?}", strategy);
        println!("  monthly payment: {}", summary.periodic_payment.round_dp(2));
        println!("  total interest:  {}", summary.total_interest.round_dp(2));
        println!("  total paid:      {}\n", summary.total_paid.round_dp(2));
    }

    // unimplemented repayment types fail explicitly
    let interest_only = LoanInput::new(
        loan.principal(),
        loan.annual_rate(),
        loan.start_date(),
        loan.end_date(),
        RepaymentType::InterestOnly,
        loan.borrower_name(),
    )?;
    match calculator.calculate(&interest_only) {
        Ok(_) => println!("interest-only unexpectedly succeeded"),
        Err(err) => println!("interest-only: {}", err),
    }

    Ok(())
}
