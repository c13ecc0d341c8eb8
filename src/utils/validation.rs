use crate::utils::error::{BankError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static CUSTOMER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{3}$").expect("customer id pattern is valid"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn is_valid_customer_id(customer_id: &str) -> bool {
    CUSTOMER_ID_PATTERN.is_match(customer_id)
}

/// Three uppercase letters followed by three digits, e.g. `AAA001`.
pub fn validate_customer_id(customer_id: &str) -> Result<()> {
    if is_valid_customer_id(customer_id) {
        Ok(())
    } else {
        Err(BankError::validation(format!(
            "Invalid Customer ID '{}'. Please use the format AAAXXX.",
            customer_id
        )))
    }
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BankError::validation(format!(
            "{} must be a non-negative number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BankError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("AAA001").is_ok());
        assert!(validate_customer_id("ZZZ999").is_ok());
        assert!(validate_customer_id("aaa001").is_err());
        assert!(validate_customer_id("AA0001").is_err());
        assert!(validate_customer_id("AAA0011").is_err());
        assert!(validate_customer_id(" AAA001").is_err());
        assert!(validate_customer_id("bad-id").is_err());
        assert!(validate_customer_id("").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("interest rate", 0.0).is_ok());
        assert!(validate_non_negative("interest rate", 5.5).is_ok());
        assert!(validate_non_negative("interest rate", -0.1).is_err());
        assert!(validate_non_negative("interest rate", f64::NAN).is_err());
        assert!(validate_non_negative("interest rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("bank.name", "XYZ Bank").is_ok());
        assert!(validate_non_empty_string("bank.name", "   ").is_err());
    }
}
