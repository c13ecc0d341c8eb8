use clap::Parser;
use std::io;
use xyz_bank::domain::report::{format_customer, CustomerSnapshot};
use xyz_bank::utils::error::ErrorSeverity;
use xyz_bank::utils::{logger, validation::Validate};
use xyz_bank::{seed_engine, BankEngine, BankError, CliConfig, InMemoryRepository, MenuDriver};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ xyz-bank failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<(), BankError> {
    let config = cli.load_bank_config()?;
    config.validate()?;

    let mut engine = BankEngine::new(InMemoryRepository::new());
    let seeded = seed_engine(&mut engine, &config.fixtures())?;
    tracing::info!("{} ready with {} customer(s)", config.bank.name, seeded);

    if cli.snapshot {
        let snapshot: Vec<CustomerSnapshot> = engine
            .customers()
            .into_iter()
            .map(CustomerSnapshot::of)
            .collect();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if cli.report {
        for customer in engine.customers() {
            print!("{}", format_customer(customer));
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut driver = MenuDriver::new(&mut engine, stdin.lock(), io::stdout(), &config.bank.name);
    driver.run()
}
