pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::InMemoryRepository;
pub use crate::app::MenuDriver;
pub use crate::config::toml_config::BankConfig;
pub use crate::core::{bank::BankEngine, seed::seed_engine};
pub use crate::domain::{
    computed_eligibility, Customer, CustomerRepository, Loan, LoanKind, LoanRequest,
};
pub use crate::utils::error::{BankError, Result};
