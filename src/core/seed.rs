use crate::core::bank::BankEngine;
use crate::domain::model::{LoanKind, LoanRequest};
use crate::domain::ports::CustomerRepository;
use crate::utils::error::{BankError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerFixture {
    pub customer_id: String,
    pub annual_income: u64,
    #[serde(default = "default_override")]
    pub eligibility_override: bool,
    #[serde(default)]
    pub loans: Vec<LoanRequest>,
}

fn default_override() -> bool {
    true
}

fn request(
    kind: LoanKind,
    record_id: u32,
    interest_rate: f64,
    term_remaining_years: f64,
    amount_left_to_pay: f64,
    overpayment_option_percent: Option<f64>,
) -> LoanRequest {
    LoanRequest {
        record_id,
        kind,
        interest_rate,
        term_remaining_years,
        amount_left_to_pay,
        overpayment_option_percent,
    }
}

/// The two demo customers every session starts with unless seeding is turned off.
pub fn builtin_fixtures() -> Vec<CustomerFixture> {
    vec![
        CustomerFixture {
            customer_id: "AAA001".to_string(),
            annual_income: 50000,
            eligibility_override: true,
            loans: vec![
                request(LoanKind::Auto, 1001, 5.5, 3.0, 15000.0, None),
                request(LoanKind::Mortgage, 1002, 4.0, 20.0, 200000.0, Some(10.0)),
                request(LoanKind::Personal, 1003, 8.0, 2.0, 5000.0, None),
            ],
        },
        CustomerFixture {
            customer_id: "BBB002".to_string(),
            annual_income: 75000,
            eligibility_override: true,
            loans: vec![
                request(LoanKind::Builder, 2001, 6.25, 5.0, 100000.0, Some(5.0)),
                request(LoanKind::Other, 2002, 7.5, 1.0, 7000.0, None),
            ],
        },
    ]
}

/// Loads fixtures through the regular engine operations. Stops at the first
/// error, reported as a `ConfigError` naming the fixture.
pub fn seed_engine<R: CustomerRepository>(
    engine: &mut BankEngine<R>,
    fixtures: &[CustomerFixture],
) -> Result<usize> {
    for fixture in fixtures {
        seed_fixture(engine, fixture).map_err(|e| BankError::ConfigError {
            message: format!(
                "cannot seed customer {}: {}",
                fixture.customer_id,
                e.user_friendly_message()
            ),
        })?;
    }
    tracing::debug!("Seeded {} customer(s)", fixtures.len());
    Ok(fixtures.len())
}

fn seed_fixture<R: CustomerRepository>(
    engine: &mut BankEngine<R>,
    fixture: &CustomerFixture,
) -> Result<()> {
    engine.register_customer(&fixture.customer_id, fixture.annual_income)?;
    for loan in &fixture.loans {
        engine.register_loan(&fixture.customer_id, loan.clone())?;
    }
    // Set last, or a closed gate would block the fixture's own loans.
    if !fixture.eligibility_override {
        engine.set_eligibility_override(&fixture.customer_id, false)?;
    }
    Ok(())
}
