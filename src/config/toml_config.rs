use crate::core::seed::{builtin_fixtures, CustomerFixture};
use crate::utils::error::{BankError, Result};
use crate::utils::validation::{
    validate_customer_id, validate_non_empty_string, validate_non_negative, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankConfig {
    #[serde(default)]
    pub bank: BankSection,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankSection {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Load the built-in demo customers before any listed here.
    #[serde(default = "default_builtin")]
    pub builtin: bool,
    #[serde(default)]
    pub customers: Vec<CustomerFixture>,
}

fn default_builtin() -> bool {
    true
}

impl Default for BankSection {
    fn default() -> Self {
        Self {
            name: "XYZ Bank".to_string(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            customers: Vec::new(),
        }
    }
}

impl BankConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BankError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BankError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        use once_cell::sync::Lazy;
        use regex::Regex;

        static ENV_VAR: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Built-in fixtures (when enabled) followed by the ones from the file.
    pub fn fixtures(&self) -> Vec<CustomerFixture> {
        let mut fixtures = if self.seed.builtin {
            builtin_fixtures()
        } else {
            Vec::new()
        };
        fixtures.extend(self.seed.customers.iter().cloned());
        fixtures
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("bank.name", &self.bank.name)?;

        for (i, customer) in self.seed.customers.iter().enumerate() {
            let field = format!("seed.customers[{}]", i);
            validate_customer_id(&customer.customer_id).map_err(|e| invalid(&field, e))?;

            let mut record_ids = HashSet::new();
            for loan in &customer.loans {
                let loan_field = format!("{}.loans[{}]", field, loan.record_id);
                if !record_ids.insert(loan.record_id) {
                    return Err(BankError::InvalidConfigValueError {
                        field: loan_field,
                        value: loan.record_id.to_string(),
                        reason: "record ID is listed more than once for this customer".to_string(),
                    });
                }
                for (name, value) in [
                    ("interest_rate", loan.interest_rate),
                    ("term_remaining_years", loan.term_remaining_years),
                    ("amount_left_to_pay", loan.amount_left_to_pay),
                ] {
                    validate_non_negative(name, value).map_err(|e| invalid(&loan_field, e))?;
                }
                match loan.overpayment_option_percent {
                    Some(percent) => validate_non_negative("overpayment_option_percent", percent)
                        .map_err(|e| invalid(&loan_field, e))?,
                    None if loan.kind.carries_overpayment() => {
                        return Err(BankError::InvalidConfigValueError {
                            field: loan_field,
                            value: loan.kind.to_string(),
                            reason: "overpayment_option_percent is required for this loan type"
                                .to_string(),
                        });
                    }
                    None => {}
                }
            }
        }

        // Built-in customers count too: file entries may not reuse their IDs.
        let mut customer_ids = HashSet::new();
        for fixture in self.fixtures() {
            if !customer_ids.insert(fixture.customer_id.clone()) {
                return Err(BankError::InvalidConfigValueError {
                    field: "seed.customers".to_string(),
                    value: fixture.customer_id,
                    reason: "customer ID is already seeded".to_string(),
                });
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, error: BankError) -> BankError {
    BankError::InvalidConfigValueError {
        field: field.to_string(),
        value: String::new(),
        reason: error.user_friendly_message(),
    }
}

impl Validate for BankConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
