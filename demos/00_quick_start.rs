/// quick start - minimal example to get started
use loan_summary_rs::chrono::NaiveDate;
use loan_summary_rs::{calculate_loan_summary, Decimal, LoanInput, Money, Rate, RepaymentType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $100,000 over six months at 9%
    let loan = LoanInput::new(
        Money::from_major(100_000),
        Rate::from_decimal(Decimal::new(9, 2)),
        NaiveDate::from_ymd_opt(2025, 6, 1).ok_or("bad start date")?,
        NaiveDate::from_ymd_opt(2025, 11, 30).ok_or("bad end date")?,
        RepaymentType::Repayment,
        "Test Borrower",
    )?;

    let summary = calculate_loan_summary(&loan)?;

    println!("monthly payment: {}", summary.periodic_payment.round_dp(2));
    println!("total interest:  {}", summary.total_interest.round_dp(2));
    println!("total paid:      {}", summary.total_paid.round_dp(2));
    println!("days in term:    {}", summary.total_days.unwrap_or_default());

    Ok(())
}
