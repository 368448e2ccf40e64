/// json request - the calculate endpoint from request body to response body
use loan_summary_rs::{CalculatorConfig, LoanCalculator, STATUS_CREATED};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::from_json(r#"{ "term_policy": "reject_short_term" }"#)?;
    let calculator = LoanCalculator::new(config)?;

    let body = r#"{
        "loan_amount": 5000,
        "annual_interest_rate": 0.12,
        "start_date": "2025-01-01",
        "end_date": "2025-03-31",
        "repayment_type": "repayment",
        "name": "Json Borrower"
    }"#;

    let response = calculator.handle_json(body)?;
    println!("status {}", STATUS_CREATED);
    println!("{}\n", response);

    // a rejected request carries the offending value
    let bad = body.replace("\"repayment\"", "\"balloon\"");
    if let Err(err) = calculator.handle_json(&bad) {
        println!("rejected (client error: {}): {}", err.is_client_error(), err);
    }

    Ok(())
}
