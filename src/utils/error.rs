use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Duplicate {kind}: {key}")]
    DuplicateKeyError { kind: &'static str, key: String },

    #[error("Customer not found: {customer_id}")]
    NotFound { customer_id: String },

    #[error("Customer {customer_id} is not eligible for a new loan")]
    EligibilityDenied { customer_id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BankError {
    pub fn validation(message: impl Into<String>) -> Self {
        BankError::ValidationError {
            message: message.into(),
        }
    }

    pub fn not_found(customer_id: &str) -> Self {
        BankError::NotFound {
            customer_id: customer_id.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BankError::ValidationError { .. }
            | BankError::DuplicateKeyError { .. }
            | BankError::NotFound { .. }
            | BankError::EligibilityDenied { .. } => ErrorCategory::Domain,
            BankError::ConfigError { .. } | BankError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            BankError::IoError(_) | BankError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Domain => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Domain errors are reported back to the operator; the session carries on.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Domain
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BankError::ValidationError { message } => message.clone(),
            BankError::DuplicateKeyError { kind, key } => {
                format!("A {} '{}' already exists.", kind, key)
            }
            BankError::NotFound { .. } => "Customer not found.".to_string(),
            BankError::EligibilityDenied { .. } => {
                "Customer is not eligible for a new loan.".to_string()
            }
            BankError::ConfigError { message } => format!("Configuration problem: {}", message),
            BankError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            BankError::IoError(e) => format!("Could not read or write data: {}", e),
            BankError::SerializationError(e) => format!("Could not render data: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BankError::ValidationError { .. } => {
                "Check the input format (customer IDs look like AAA001)"
            }
            BankError::DuplicateKeyError { .. } => "Choose an identifier that is not already in use",
            BankError::NotFound { .. } => "Use option 5 to list the registered customers",
            BankError::EligibilityDenied { .. } => {
                "Update the customer's eligibility status before registering a loan"
            }
            BankError::ConfigError { .. } | BankError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and start again"
            }
            BankError::IoError(_) => "Check that the terminal or file is readable",
            BankError::SerializationError(_) => "Report the snapshot failure",
        }
    }
}

pub type Result<T> = std::result::Result<T, BankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_recoverable() {
        let errors = [
            BankError::validation("bad id"),
            BankError::DuplicateKeyError {
                kind: "customer ID",
                key: "AAA001".to_string(),
            },
            BankError::not_found("ZZZ999"),
            BankError::EligibilityDenied {
                customer_id: "AAA001".to_string(),
            },
        ];

        for error in errors {
            assert_eq!(error.category(), ErrorCategory::Domain);
            assert_eq!(error.severity(), ErrorSeverity::Low);
            assert!(error.is_recoverable());
        }
    }

    #[test]
    fn test_system_errors_are_critical() {
        let error = BankError::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "closed",
        ));
        assert_eq!(error.category(), ErrorCategory::System);
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_user_friendly_messages() {
        assert_eq!(
            BankError::not_found("ZZZ999").user_friendly_message(),
            "Customer not found."
        );
        let duplicate = BankError::DuplicateKeyError {
            kind: "record ID",
            key: "1001".to_string(),
        };
        assert_eq!(duplicate.to_string(), "Duplicate record ID: 1001");
        assert!(duplicate.user_friendly_message().contains("1001"));
    }
}
