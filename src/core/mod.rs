pub mod bank;
pub mod seed;

pub use crate::domain::model::{Customer, Loan, LoanKind, LoanRequest};
pub use crate::domain::ports::CustomerRepository;
pub use crate::utils::error::Result;
pub use bank::BankEngine;
pub use seed::{builtin_fixtures, seed_engine, CustomerFixture};
