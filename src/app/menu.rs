use crate::app::prompt::Prompter;
use crate::core::bank::BankEngine;
use crate::domain::model::{LoanKind, LoanRequest};
use crate::domain::ports::CustomerRepository;
use crate::domain::report::{format_customer_listing, format_loan_summary, format_update_summary};
use crate::utils::error::{BankError, Result};
use crate::utils::validation::is_valid_customer_id;
use std::io::{BufRead, ErrorKind, Write};

pub struct MenuDriver<'a, R: CustomerRepository, I, W> {
    engine: &'a mut BankEngine<R>,
    prompter: Prompter<I, W>,
    title: String,
}

impl<'a, R: CustomerRepository, I: BufRead, W: Write> MenuDriver<'a, R, I, W> {
    pub fn new(engine: &'a mut BankEngine<R>, input: I, output: W, bank_name: &str) -> Self {
        Self {
            engine,
            prompter: Prompter::new(input, output),
            title: format!("{} Management System", bank_name),
        }
    }

    /// Runs until the operator picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(BankError::IoError(e)) if e.kind() == ErrorKind::UnexpectedEof => {
                    tracing::debug!("Input closed, leaving menu");
                    break;
                }
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn report(&mut self, error: &BankError) -> Result<()> {
        tracing::debug!("Operation rejected: {}", error);
        self.prompter.say(&error.user_friendly_message())
    }

    fn step(&mut self) -> Result<bool> {
        let menu = format!(
            "\n{}\n\
             1. Register a new customer\n\
             2. Update information about existing customer\n\
             3. Register a credit record\n\
             4. Print information about a particular customer and their loans\n\
             5. Print information about all customers\n\
             6. Exit",
            self.title
        );
        self.prompter.say(&menu)?;

        let choice: i64 = self.prompter.read_int("\nEnter your choice: ")?;
        match choice {
            1 => self.register_customer()?,
            2 => self.update_customer()?,
            3 => self.register_loan()?,
            4 => self.show_customer()?,
            5 => self.show_all_customers()?,
            6 => return Ok(false),
            _ => self
                .prompter
                .say("Invalid choice. Please enter a number between 1 and 6.")?,
        }
        Ok(true)
    }

    fn register_customer(&mut self) -> Result<()> {
        let customer_id = self
            .prompter
            .read_line("Enter Customer ID (in the format AAAXXX): ")?;
        if !is_valid_customer_id(&customer_id) {
            return self
                .prompter
                .say("Invalid Customer ID format. Please use the format AAAXXX.");
        }

        let annual_income: u64 = self.prompter.read_int("Enter Annual Income: ")?;
        self.engine.register_customer(&customer_id, annual_income)?;
        self.prompter.say("Customer registered successfully.")
    }

    fn read_known_customer(&mut self) -> Result<Option<String>> {
        if !self.engine.has_customers() {
            self.prompter.say("No customers registered yet.")?;
            return Ok(None);
        }
        let customer_id = self.prompter.read_line("Enter Customer ID: ")?;
        self.engine.customer(&customer_id)?;
        Ok(Some(customer_id))
    }

    fn update_customer(&mut self) -> Result<()> {
        let Some(customer_id) = self.read_known_customer()? else {
            return Ok(());
        };

        self.prompter.say(
            "Update Options:\n\
             1. Update Annual Income\n\
             2. Update Eligibility Status\n\
             3. Add a new Loan Record\n\
             4. Remove an old Loan Record",
        )?;
        let choice: i64 = self.prompter.read_int("Enter your choice: ")?;

        let outcome = match choice {
            1 => self.update_income(&customer_id),
            2 => self.update_eligibility(&customer_id),
            3 => self.register_loan_for(&customer_id),
            4 => self.remove_loan_for(&customer_id),
            _ => self.prompter.say("Invalid choice."),
        };
        match outcome {
            Err(e) if e.is_recoverable() => self.report(&e)?,
            other => other?,
        }

        self.print_update_summary()
    }

    fn update_income(&mut self, customer_id: &str) -> Result<()> {
        let new_income: u64 = self.prompter.read_int("Enter New Annual Income: ")?;
        self.engine.update_income(customer_id, new_income)?;
        self.prompter.say("Annual Income updated successfully.")
    }

    fn update_eligibility(&mut self, customer_id: &str) -> Result<()> {
        let flag = self
            .prompter
            .read_bool("Enter New Eligibility Status (true/false): ")?;
        self.engine.set_eligibility_override(customer_id, flag)?;
        self.prompter.say("Eligibility Status updated successfully.")
    }

    fn print_update_summary(&mut self) -> Result<()> {
        self.prompter.say("Updated Customer and Loan Information:")?;
        for customer in self.engine.customers() {
            self.prompter.write(&format_update_summary(customer))?;
            self.prompter.say("")?;
        }
        Ok(())
    }

    fn register_loan(&mut self) -> Result<()> {
        match self.read_known_customer()? {
            Some(customer_id) => self.register_loan_for(&customer_id),
            None => Ok(()),
        }
    }

    fn register_loan_for(&mut self, customer_id: &str) -> Result<()> {
        self.engine.check_loan_gate(customer_id)?;

        let record_id: u32 = self.prompter.read_int("Record ID: ")?;
        self.engine.check_record_id(customer_id, record_id)?;

        let kind = loop {
            let answer = self
                .prompter
                .read_line("Loan Type (Auto/Builder/Mortgage/Personal/Other): ")?;
            match answer.parse::<LoanKind>() {
                Ok(kind) => break kind,
                Err(e) => self.prompter.say(&e.user_friendly_message())?,
            }
        };

        let interest_rate = self.prompter.read_number("Interest Rate: ")?;
        let term_remaining_years = self.prompter.read_number("Loan Term Left (in years): ")?;
        let amount_left_to_pay = self.prompter.read_number("Amount Left to Pay: ")?;
        let overpayment_option_percent = if kind.carries_overpayment() {
            Some(self.prompter.read_number("Overpayment Option (%): ")?)
        } else {
            None
        };

        let loan = self.engine.register_loan(
            customer_id,
            LoanRequest {
                record_id,
                kind,
                interest_rate,
                term_remaining_years,
                amount_left_to_pay,
                overpayment_option_percent,
            },
        )?;
        self.prompter.say("Loan registered successfully.")?;
        self.prompter.write(&format_loan_summary(&loan))
    }

    fn remove_loan_for(&mut self, customer_id: &str) -> Result<()> {
        if self.engine.customer(customer_id)?.loans().is_empty() {
            return self.prompter.say("No loans to remove for this customer.");
        }

        let record_id: u32 = self
            .prompter
            .read_int("Enter Record ID of the Loan to Remove: ")?;
        if self.engine.remove_loan(customer_id, record_id)? > 0 {
            self.prompter.say("Loan(s) removed successfully.")
        } else {
            self.prompter
                .say("Loan with the specified Record ID not found.")
        }
    }

    fn show_customer(&mut self) -> Result<()> {
        let customer_id = self.prompter.read_line("Enter Customer ID: ")?;
        let customer = self.engine.customer(&customer_id)?;
        self.prompter.write(&format_customer_listing(customer))
    }

    fn show_all_customers(&mut self) -> Result<()> {
        if !self.engine.has_customers() {
            return self.prompter.say("No customers registered yet.");
        }
        for customer in self.engine.customers() {
            self.prompter.write(&format_customer_listing(customer))?;
            self.prompter.say("")?;
        }
        Ok(())
    }
}
