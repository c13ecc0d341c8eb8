use anyhow::Result;
use tempfile::TempDir;
use xyz_bank::utils::error::ErrorSeverity;
use xyz_bank::utils::validation::Validate;
use xyz_bank::{computed_eligibility, seed_engine, BankConfig, BankEngine, BankError, InMemoryRepository};

#[test]
fn test_seed_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("bank.toml");
    std::fs::write(
        &config_path,
        r#"
[bank]
name = "Harbour Savings"

[[seed.customers]]
customer_id = "CCC003"
annual_income = 10000
eligibility_override = false

[[seed.customers.loans]]
record_id = 3001
kind = "Personal"
interest_rate = 9.5
term_remaining_years = 2.0
amount_left_to_pay = 45000.0
"#,
    )?;

    let config = BankConfig::from_file(&config_path)?;
    config.validate()?;

    let mut engine = BankEngine::new(InMemoryRepository::new());
    let seeded = seed_engine(&mut engine, &config.fixtures())?;
    assert_eq!(seeded, 3);

    let ids: Vec<&str> = engine.customers().into_iter().map(|c| c.customer_id()).collect();
    assert_eq!(ids, vec!["AAA001", "BBB002", "CCC003"]);

    // The closed override is applied after the fixture's own loans went in.
    let ccc = engine.customer("CCC003")?;
    assert_eq!(ccc.loans().len(), 1);
    assert!(!ccc.eligibility_override());
    assert!(!computed_eligibility(ccc));
    Ok(())
}

#[test]
fn test_builtin_seed_matches_demo_data() -> Result<()> {
    let mut engine = BankEngine::new(InMemoryRepository::new());
    seed_engine(&mut engine, &BankConfig::default().fixtures())?;

    let aaa = engine.customer("AAA001")?;
    assert_eq!(aaa.annual_income(), 50000);
    assert_eq!(aaa.loans().len(), 3);
    assert_eq!(aaa.loan(1002).and_then(|l| l.overpayment_option_percent()), Some(10.0));
    assert!(!computed_eligibility(aaa));

    let bbb = engine.customer("BBB002")?;
    assert_eq!(bbb.annual_income(), 75000);
    assert_eq!(bbb.loans().len(), 2);
    assert!(computed_eligibility(bbb));
    Ok(())
}

#[test]
fn test_fixture_colliding_with_builtin_customer_fails() -> Result<()> {
    let config = BankConfig::from_toml_str(
        r#"
[[seed.customers]]
customer_id = "AAA001"
annual_income = 1
"#,
    )?;
    assert!(matches!(
        config.validate(),
        Err(BankError::InvalidConfigValueError { .. })
    ));

    // Seeding without validating first still fails as a configuration problem.
    let mut engine = BankEngine::new(InMemoryRepository::new());
    let err = seed_engine(&mut engine, &config.fixtures()).unwrap_err();
    assert!(matches!(err, BankError::ConfigError { .. }));
    assert_eq!(err.severity(), ErrorSeverity::High);
    assert!(err.user_friendly_message().contains("AAA001"));
    assert_eq!(engine.customer("AAA001")?.annual_income(), 50000);
    Ok(())
}

#[test]
fn test_bad_fixture_loan_fails_as_config_error() -> Result<()> {
    let config = BankConfig::from_toml_str(
        r#"
[seed]
builtin = false

[[seed.customers]]
customer_id = "CCC003"
annual_income = 40000

[[seed.customers.loans]]
record_id = 1
kind = "Mortgage"
interest_rate = 1.0
term_remaining_years = 1.0
amount_left_to_pay = 1.0
overpayment_option_percent = -5.0
"#,
    )?;
    assert!(config.validate().is_err());

    let mut engine = BankEngine::new(InMemoryRepository::new());
    let err = seed_engine(&mut engine, &config.fixtures()).unwrap_err();
    assert!(matches!(err, BankError::ConfigError { .. }));
    assert!(!err.is_recoverable());
    Ok(())
}
