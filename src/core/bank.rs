use crate::domain::model::{Customer, Loan, LoanRequest};
use crate::domain::ports::CustomerRepository;
use crate::utils::error::Result;

/// Entry point for drivers. Owns the repository and logs every operation.
pub struct BankEngine<R: CustomerRepository> {
    repository: R,
}

impl<R: CustomerRepository> BankEngine<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn register_customer(&mut self, customer_id: &str, annual_income: u64) -> Result<()> {
        let customer = Customer::new(customer_id, annual_income)?;
        self.repository.add_customer(customer).inspect_err(|e| {
            tracing::warn!("Rejected customer {}: {}", customer_id, e);
        })?;
        tracing::info!("Registered customer {} (income {})", customer_id, annual_income);
        Ok(())
    }

    pub fn update_income(&mut self, customer_id: &str, new_income: u64) -> Result<()> {
        self.repository.update_income(customer_id, new_income)?;
        tracing::info!("Updated income of {} to {}", customer_id, new_income);
        Ok(())
    }

    pub fn set_eligibility_override(&mut self, customer_id: &str, flag: bool) -> Result<()> {
        self.repository.set_eligibility_override(customer_id, flag)?;
        tracing::info!("Eligibility override of {} set to {}", customer_id, flag);
        Ok(())
    }

    /// Validates the request, stores the loan and hands back a copy of it.
    pub fn register_loan(&mut self, customer_id: &str, request: LoanRequest) -> Result<Loan> {
        let loan = request.into_loan()?;
        self.repository
            .add_loan_to_customer(customer_id, loan.clone())
            .inspect_err(|e| {
                tracing::warn!(
                    "Rejected loan {} for {}: {}",
                    loan.record_id(),
                    customer_id,
                    e
                );
            })?;
        tracing::info!(
            "Registered {} loan {} for {}",
            loan.kind(),
            loan.record_id(),
            customer_id
        );
        Ok(loan)
    }

    pub fn remove_loan(&mut self, customer_id: &str, record_id: u32) -> Result<usize> {
        let removed = self
            .repository
            .remove_loan_from_customer(customer_id, record_id)?;
        if removed == 0 {
            tracing::debug!("No loan {} on {}", record_id, customer_id);
        } else {
            tracing::info!("Removed {} loan(s) {} from {}", removed, record_id, customer_id);
        }
        Ok(removed)
    }

    /// Fails early with `NotFound` or `EligibilityDenied`, before any loan details are asked for.
    pub fn check_loan_gate(&self, customer_id: &str) -> Result<()> {
        self.repository
            .find_customer(customer_id)?
            .ensure_accepts_new_loans()
    }

    pub fn check_record_id(&self, customer_id: &str, record_id: u32) -> Result<()> {
        self.repository
            .find_customer(customer_id)?
            .ensure_record_id_free(record_id)
    }

    pub fn customer(&self, customer_id: &str) -> Result<&Customer> {
        self.repository.find_customer(customer_id)
    }

    pub fn customers(&self) -> Vec<&Customer> {
        self.repository.list_all()
    }

    pub fn has_customers(&self) -> bool {
        !self.repository.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}
