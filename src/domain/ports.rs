use crate::domain::model::{Customer, Loan};
use crate::utils::error::Result;

/// Canonical store of customers, keyed by customer ID.
///
/// Mutations take `&mut self`, so whoever owns the repository runs one
/// operation to completion before the next begins.
pub trait CustomerRepository: Send + Sync {
    /// Fails with `DuplicateKeyError` if the ID is taken; the store is left untouched.
    fn add_customer(&mut self, customer: Customer) -> Result<()>;

    fn find_customer(&self, customer_id: &str) -> Result<&Customer>;

    fn update_income(&mut self, customer_id: &str, new_income: u64) -> Result<()>;

    fn set_eligibility_override(&mut self, customer_id: &str, flag: bool) -> Result<()>;

    /// Checks, in order: customer exists, override flag allows new loans,
    /// record ID is unused for this customer.
    fn add_loan_to_customer(&mut self, customer_id: &str, loan: Loan) -> Result<()>;

    /// Removes every loan with `record_id`. Zero matches is `Ok(0)`.
    fn remove_loan_from_customer(&mut self, customer_id: &str, record_id: u32) -> Result<usize>;

    /// Customers in insertion order.
    fn list_all(&self) -> Vec<&Customer>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
