use crate::utils::error::{BankError, Result};
use crate::utils::validation::{validate_customer_id, validate_non_negative};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum LoanKind {
    Auto,
    Builder,
    Mortgage,
    Personal,
    Other,
}

impl LoanKind {
    pub const ALL: [LoanKind; 5] = [
        LoanKind::Auto,
        LoanKind::Builder,
        LoanKind::Mortgage,
        LoanKind::Personal,
        LoanKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanKind::Auto => "Auto",
            LoanKind::Builder => "Builder",
            LoanKind::Mortgage => "Mortgage",
            LoanKind::Personal => "Personal",
            LoanKind::Other => "Other",
        }
    }

    /// Only Builder and Mortgage loans carry an overpayment option.
    pub fn carries_overpayment(&self) -> bool {
        matches!(self, LoanKind::Builder | LoanKind::Mortgage)
    }
}

impl fmt::Display for LoanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanKind {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        LoanKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                BankError::validation(format!(
                    "Invalid Loan Type '{}'. Must be: Auto, Builder, Mortgage, Personal, or Other",
                    s
                ))
            })
    }
}

impl TryFrom<String> for LoanKind {
    type Error = BankError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Per-kind payload. The loan kind is read off this, so it cannot drift after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "loan_type")]
pub enum LoanTerms {
    Auto,
    Builder { overpayment_option_percent: f64 },
    Mortgage { overpayment_option_percent: f64 },
    Personal,
    Other,
}

impl LoanTerms {
    pub fn kind(&self) -> LoanKind {
        match self {
            LoanTerms::Auto => LoanKind::Auto,
            LoanTerms::Builder { .. } => LoanKind::Builder,
            LoanTerms::Mortgage { .. } => LoanKind::Mortgage,
            LoanTerms::Personal => LoanKind::Personal,
            LoanTerms::Other => LoanKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loan {
    record_id: u32,
    interest_rate: f64,
    term_remaining_years: f64,
    amount_left_to_pay: f64,
    #[serde(flatten)]
    terms: LoanTerms,
}

impl Loan {
    /// Builds a loan of the given kind.
    ///
    /// `overpayment_option_percent` is required for Builder and Mortgage loans
    /// and ignored for every other kind. All amounts must be non-negative.
    pub fn new(
        kind: LoanKind,
        record_id: u32,
        interest_rate: f64,
        term_remaining_years: f64,
        amount_left_to_pay: f64,
        overpayment_option_percent: Option<f64>,
    ) -> Result<Self> {
        validate_non_negative("Interest rate", interest_rate)?;
        validate_non_negative("Loan term left", term_remaining_years)?;
        validate_non_negative("Amount left to pay", amount_left_to_pay)?;

        let overpayment = if kind.carries_overpayment() {
            let percent = overpayment_option_percent.ok_or_else(|| {
                BankError::validation(format!("{} loans require an overpayment option", kind))
            })?;
            validate_non_negative("Overpayment option", percent)?;
            percent
        } else {
            0.0
        };

        let terms = match kind {
            LoanKind::Auto => LoanTerms::Auto,
            LoanKind::Builder => LoanTerms::Builder {
                overpayment_option_percent: overpayment,
            },
            LoanKind::Mortgage => LoanTerms::Mortgage {
                overpayment_option_percent: overpayment,
            },
            LoanKind::Personal => LoanTerms::Personal,
            LoanKind::Other => LoanTerms::Other,
        };

        Ok(Loan {
            record_id,
            interest_rate,
            term_remaining_years,
            amount_left_to_pay,
            terms,
        })
    }

    pub fn record_id(&self) -> u32 {
        self.record_id
    }

    pub fn kind(&self) -> LoanKind {
        self.terms.kind()
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn term_remaining_years(&self) -> f64 {
        self.term_remaining_years
    }

    pub fn amount_left_to_pay(&self) -> f64 {
        self.amount_left_to_pay
    }

    pub fn overpayment_option_percent(&self) -> Option<f64> {
        match self.terms {
            LoanTerms::Builder {
                overpayment_option_percent,
            }
            | LoanTerms::Mortgage {
                overpayment_option_percent,
            } => Some(overpayment_option_percent),
            _ => None,
        }
    }
}

/// Unvalidated loan input as it arrives from a prompt or a fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub record_id: u32,
    pub kind: LoanKind,
    pub interest_rate: f64,
    pub term_remaining_years: f64,
    pub amount_left_to_pay: f64,
    #[serde(default)]
    pub overpayment_option_percent: Option<f64>,
}

impl LoanRequest {
    pub fn into_loan(self) -> Result<Loan> {
        Loan::new(
            self.kind,
            self.record_id,
            self.interest_rate,
            self.term_remaining_years,
            self.amount_left_to_pay,
            self.overpayment_option_percent,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    customer_id: String,
    annual_income: u64,
    eligibility_override: bool,
    loans: Vec<Loan>,
}

impl Customer {
    /// New customer with no loans. The eligibility override starts out `true`.
    pub fn new(customer_id: &str, annual_income: u64) -> Result<Self> {
        Self::from_parts(customer_id, annual_income, true, Vec::new())
    }

    /// Assembles a customer from existing records.
    ///
    /// Record IDs are taken as given; duplicates are kept and every copy is
    /// later matched by [`Customer::remove_loans`].
    pub fn from_parts(
        customer_id: &str,
        annual_income: u64,
        eligibility_override: bool,
        loans: Vec<Loan>,
    ) -> Result<Self> {
        validate_customer_id(customer_id)?;
        Ok(Customer {
            customer_id: customer_id.to_string(),
            annual_income,
            eligibility_override,
            loans,
        })
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn annual_income(&self) -> u64 {
        self.annual_income
    }

    pub fn eligibility_override(&self) -> bool {
        self.eligibility_override
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn loan(&self, record_id: u32) -> Option<&Loan> {
        self.loans.iter().find(|loan| loan.record_id == record_id)
    }

    pub(crate) fn set_annual_income(&mut self, annual_income: u64) {
        self.annual_income = annual_income;
    }

    pub(crate) fn set_eligibility_override(&mut self, flag: bool) {
        self.eligibility_override = flag;
    }

    /// Gate for new loans. Checks the override flag only, never the computed eligibility.
    pub fn ensure_accepts_new_loans(&self) -> Result<()> {
        if self.eligibility_override {
            Ok(())
        } else {
            Err(BankError::EligibilityDenied {
                customer_id: self.customer_id.clone(),
            })
        }
    }

    pub fn ensure_record_id_free(&self, record_id: u32) -> Result<()> {
        if self.loan(record_id).is_some() {
            return Err(BankError::DuplicateKeyError {
                kind: "record ID",
                key: record_id.to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn add_loan(&mut self, loan: Loan) -> Result<()> {
        self.ensure_record_id_free(loan.record_id)?;
        self.loans.push(loan);
        Ok(())
    }

    /// Drops every loan carrying `record_id` and returns how many went.
    pub(crate) fn remove_loans(&mut self, record_id: u32) -> usize {
        let before = self.loans.len();
        self.loans.retain(|loan| loan.record_id != record_id);
        before - self.loans.len()
    }
}
