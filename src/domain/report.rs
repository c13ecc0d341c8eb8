//! Text and JSON views over customers and loans.
//!
//! Three customer views exist and they disagree about eligibility:
//! - [`format_customer`] shows the computed debt-to-income eligibility.
//! - [`format_customer_listing`] (lookup and show-all) always prints `YES`.
//! - [`format_update_summary`] (after an update) prints the override flag.
//!
//! Callers pick the view; nothing here reconciles them.

use crate::domain::eligibility::{computed_eligibility, total_outstanding};
use crate::domain::model::{Customer, Loan};
use serde::Serialize;
use std::fmt::Write;

const LABEL_WIDTH: usize = 28;
const TABLE_HEADER: &str = "RecordID | LoanType | IntRate | AmountLeft | TimeLeft\n\
                            ------- | -------- | -------- | ---------- | --------\n";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

fn push_field(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let _ = writeln!(out, "{:<width$}{}", label, value, width = LABEL_WIDTH);
}

pub fn format_loan_summary(loan: &Loan) -> String {
    let mut out = String::new();
    push_field(&mut out, "Record ID:", format!("{:06}", loan.record_id()));
    push_field(&mut out, "Loan Type:", loan.kind());
    push_field(&mut out, "Interest Rate:", format!("{:.2}", loan.interest_rate()));
    push_field(
        &mut out,
        "Amount Left to Pay:",
        format!("{:.2}", loan.amount_left_to_pay()),
    );
    push_field(
        &mut out,
        "Loan Term Left (in years):",
        format!("{:.2}", loan.term_remaining_years()),
    );
    if let Some(percent) = loan.overpayment_option_percent() {
        push_field(&mut out, "Overpayment Option:", format!("{:.2}%", percent));
    }
    out
}

/// The customer's own details, judged by computed eligibility.
pub fn format_customer(customer: &Customer) -> String {
    let mut out = String::new();
    out.push_str("================================\n");
    let _ = writeln!(out, "CustomerID\t{}", customer.customer_id());
    let _ = writeln!(
        out,
        "Eligible to arrange new loans -\t{}",
        yes_no(computed_eligibility(customer))
    );
    out.push_str("RecordID\tLoanType\tIntRate\tAmountLeft\tTimeLeft\n");
    for loan in customer.loans() {
        let _ = writeln!(
            out,
            "{:06}\t\t{}\t\t{:.2}\t\t{:.2}\t\t{:.2}",
            loan.record_id(),
            loan.kind(),
            loan.interest_rate(),
            loan.amount_left_to_pay(),
            loan.term_remaining_years()
        );
    }
    out
}

fn push_loan_table(out: &mut String, customer: &Customer) {
    out.push_str(TABLE_HEADER);
    for loan in customer.loans() {
        let _ = writeln!(
            out,
            "{:07} | {:<8} | {:.2} | {:.0} | {:.0}",
            loan.record_id(),
            loan.kind().as_str(),
            loan.interest_rate(),
            loan.amount_left_to_pay(),
            loan.term_remaining_years()
        );
    }
}

/// Lookup and show-all view. The eligibility line is always `YES`.
pub fn format_customer_listing(customer: &Customer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Customer ID: {}", customer.customer_id());
    out.push_str("Eligible to arrange new loans - YES\n");
    push_loan_table(&mut out, customer);
    out
}

/// Shown after an update; reports the eligibility override flag.
pub fn format_update_summary(customer: &Customer) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Customer ID: {}", customer.customer_id());
    let _ = writeln!(
        out,
        "Eligible to arrange new loans - {}",
        yes_no(customer.eligibility_override())
    );
    push_loan_table(&mut out, customer);
    out
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSnapshot<'a> {
    pub customer_id: &'a str,
    pub annual_income: u64,
    pub eligibility_override: bool,
    pub computed_eligibility: bool,
    pub total_outstanding: f64,
    pub loans: &'a [Loan],
}

impl<'a> CustomerSnapshot<'a> {
    pub fn of(customer: &'a Customer) -> Self {
        Self {
            customer_id: customer.customer_id(),
            annual_income: customer.annual_income(),
            eligibility_override: customer.eligibility_override(),
            computed_eligibility: computed_eligibility(customer),
            total_outstanding: total_outstanding(customer),
            loans: customer.loans(),
        }
    }
}
