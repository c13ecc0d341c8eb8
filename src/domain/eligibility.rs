use crate::domain::model::Customer;

/// Outstanding debt may not exceed this multiple of annual income.
pub const DEBT_TO_INCOME_MULTIPLIER: u64 = 4;

pub fn total_outstanding(customer: &Customer) -> f64 {
    customer
        .loans()
        .iter()
        .map(|loan| loan.amount_left_to_pay())
        .sum()
}

/// Debt-to-income eligibility: total amount left to pay <= 4 x annual income.
///
/// This is independent of [`Customer::eligibility_override`], which is the
/// flag that actually gates new loans.
pub fn computed_eligibility(customer: &Customer) -> bool {
    let limit = DEBT_TO_INCOME_MULTIPLIER.saturating_mul(customer.annual_income()) as f64;
    total_outstanding(customer) <= limit
}
