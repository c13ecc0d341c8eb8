// Domain layer: customers, loans and the eligibility rule. No I/O here.

pub mod eligibility;
pub mod model;
pub mod ports;
pub mod report;

pub use eligibility::{computed_eligibility, total_outstanding, DEBT_TO_INCOME_MULTIPLIER};
pub use model::{Customer, Loan, LoanKind, LoanRequest, LoanTerms};
pub use ports::CustomerRepository;
