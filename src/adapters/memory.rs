use crate::domain::model::{Customer, Loan};
use crate::domain::ports::CustomerRepository;
use crate::utils::error::{BankError, Result};
use std::collections::HashMap;

/// Process-lifetime store. Customers keep their insertion order; the index
/// maps customer IDs to positions in `customers`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRepository {
    customers: Vec<Customer>,
    index: HashMap<String, usize>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn customer_mut(&mut self, customer_id: &str) -> Result<&mut Customer> {
        let position = *self
            .index
            .get(customer_id)
            .ok_or_else(|| BankError::not_found(customer_id))?;
        Ok(&mut self.customers[position])
    }
}

impl CustomerRepository for InMemoryRepository {
    fn add_customer(&mut self, customer: Customer) -> Result<()> {
        if self.index.contains_key(customer.customer_id()) {
            return Err(BankError::DuplicateKeyError {
                kind: "customer ID",
                key: customer.customer_id().to_string(),
            });
        }
        self.index
            .insert(customer.customer_id().to_string(), self.customers.len());
        self.customers.push(customer);
        Ok(())
    }

    fn find_customer(&self, customer_id: &str) -> Result<&Customer> {
        self.index
            .get(customer_id)
            .map(|&position| &self.customers[position])
            .ok_or_else(|| BankError::not_found(customer_id))
    }

    fn update_income(&mut self, customer_id: &str, new_income: u64) -> Result<()> {
        self.customer_mut(customer_id)?.set_annual_income(new_income);
        Ok(())
    }

    fn set_eligibility_override(&mut self, customer_id: &str, flag: bool) -> Result<()> {
        self.customer_mut(customer_id)?.set_eligibility_override(flag);
        Ok(())
    }

    fn add_loan_to_customer(&mut self, customer_id: &str, loan: Loan) -> Result<()> {
        let customer = self.customer_mut(customer_id)?;
        customer.ensure_accepts_new_loans()?;
        customer.add_loan(loan)
    }

    fn remove_loan_from_customer(&mut self, customer_id: &str, record_id: u32) -> Result<usize> {
        Ok(self.customer_mut(customer_id)?.remove_loans(record_id))
    }

    fn list_all(&self) -> Vec<&Customer> {
        self.customers.iter().collect()
    }

    fn len(&self) -> usize {
        self.customers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LoanKind;

    fn loan(kind: LoanKind, record_id: u32, amount: f64) -> Loan {
        let overpayment = kind.carries_overpayment().then_some(5.0);
        Loan::new(kind, record_id, 5.0, 2.0, amount, overpayment).unwrap()
    }

    fn repository_with(ids: &[&str]) -> InMemoryRepository {
        let mut repository = InMemoryRepository::new();
        for id in ids {
            repository
                .add_customer(Customer::new(id, 50000).unwrap())
                .unwrap();
        }
        repository
    }

    #[test]
    fn test_add_and_find_customer() {
        let repository = repository_with(&["AAA001"]);

        let customer = repository.find_customer("AAA001").unwrap();
        assert_eq!(customer.annual_income(), 50000);
        assert!(matches!(
            repository.find_customer("ZZZ999"),
            Err(BankError::NotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_customer_leaves_repository_unchanged() {
        let mut repository = repository_with(&["AAA001", "BBB002"]);
        let before: Vec<Customer> = repository.list_all().into_iter().cloned().collect();

        let err = repository
            .add_customer(Customer::new("AAA001", 1).unwrap())
            .unwrap_err();

        assert!(matches!(err, BankError::DuplicateKeyError { kind: "customer ID", .. }));
        let after: Vec<Customer> = repository.list_all().into_iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(repository.find_customer("AAA001").unwrap().annual_income(), 50000);
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let repository = repository_with(&["CCC003", "AAA001", "BBB002"]);
        let ids: Vec<&str> = repository
            .list_all()
            .into_iter()
            .map(|c| c.customer_id())
            .collect();
        assert_eq!(ids, vec!["CCC003", "AAA001", "BBB002"]);
        assert_eq!(repository.len(), 3);
        assert!(!repository.is_empty());
    }

    #[test]
    fn test_update_income_and_override() {
        let mut repository = repository_with(&["AAA001"]);

        repository.update_income("AAA001", 60000).unwrap();
        repository.set_eligibility_override("AAA001", false).unwrap();

        let customer = repository.find_customer("AAA001").unwrap();
        assert_eq!(customer.annual_income(), 60000);
        assert!(!customer.eligibility_override());

        assert!(matches!(
            repository.update_income("ZZZ999", 1),
            Err(BankError::NotFound { .. })
        ));
        assert!(matches!(
            repository.set_eligibility_override("ZZZ999", true),
            Err(BankError::NotFound { .. })
        ));
    }

    #[test]
    fn test_add_loan_check_order() {
        let mut repository = repository_with(&["AAA001"]);
        repository
            .add_loan_to_customer("AAA001", loan(LoanKind::Auto, 1001, 100.0))
            .unwrap();

        assert!(matches!(
            repository.add_loan_to_customer("ZZZ999", loan(LoanKind::Auto, 1, 1.0)),
            Err(BankError::NotFound { .. })
        ));

        // Gate wins over the duplicate record ID.
        repository.set_eligibility_override("AAA001", false).unwrap();
        assert!(matches!(
            repository.add_loan_to_customer("AAA001", loan(LoanKind::Auto, 1001, 1.0)),
            Err(BankError::EligibilityDenied { .. })
        ));

        repository.set_eligibility_override("AAA001", true).unwrap();
        assert!(matches!(
            repository.add_loan_to_customer("AAA001", loan(LoanKind::Auto, 1001, 1.0)),
            Err(BankError::DuplicateKeyError { kind: "record ID", .. })
        ));
        assert_eq!(repository.find_customer("AAA001").unwrap().loans().len(), 1);
    }

    #[test]
    fn test_record_ids_are_scoped_per_customer() {
        let mut repository = repository_with(&["AAA001", "BBB002"]);
        repository
            .add_loan_to_customer("AAA001", loan(LoanKind::Builder, 2001, 1.0))
            .unwrap();
        repository
            .add_loan_to_customer("BBB002", loan(LoanKind::Builder, 2001, 1.0))
            .unwrap();
    }

    #[test]
    fn test_remove_loan_removes_all_matches() {
        let mut repository = InMemoryRepository::new();
        let customer = Customer::from_parts(
            "AAA001",
            50000,
            true,
            vec![
                loan(LoanKind::Auto, 5, 1.0),
                loan(LoanKind::Other, 6, 2.0),
                loan(LoanKind::Personal, 5, 3.0),
            ],
        )
        .unwrap();
        repository.add_customer(customer).unwrap();

        assert_eq!(repository.remove_loan_from_customer("AAA001", 5).unwrap(), 2);
        assert_eq!(repository.remove_loan_from_customer("AAA001", 5).unwrap(), 0);
        let remaining = repository.find_customer("AAA001").unwrap().loans();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].record_id(), 6);

        assert!(matches!(
            repository.remove_loan_from_customer("ZZZ999", 5),
            Err(BankError::NotFound { .. })
        ));
    }
}
