use anyhow::Result;
use taskdesk_core::{coerce_integer, Calculator};

use crate::console;

const INVALID_MENU: &str = "ERROR: Please enter a valid number between 1 and 6.";
const INVALID_NUMBER: &str = "ERROR: Please enter valid numbers!";
const INVALID_OPTION: &str = "ERROR: Invalid option!";

/// Menu-driven controller for the running-total calculator.
pub struct CalcApp {
    calc: Calculator,
    error: Option<String>,
}

impl CalcApp {
    pub fn new() -> Self {
        Self {
            calc: Calculator::new(),
            error: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            console::clear_screen()?;
            if let Some(message) = self.error.take() {
                console::banner(&message);
            }

            println!(
                "What would you like to do? (Current total: {})\n",
                self.calc.result()
            );
            println!("1. Add");
            println!("2. Subtract");
            println!("3. Multiply");
            println!("4. Divide");
            println!("5. Show final result");
            println!("6. Exit\n");

            let raw = console::prompt(">> Enter a number: ")?;
            let Some(choice) = coerce_integer(&raw) else {
                self.error = Some(INVALID_MENU.to_string());
                continue;
            };

            match choice {
                1 => self.operation("Add", |calc, a, b| {
                    calc.add(a, b);
                    Ok(())
                })?,
                2 => self.operation("Subtract", |calc, a, b| {
                    calc.subtract(a, b);
                    Ok(())
                })?,
                3 => self.operation("Multiply", |calc, a, b| {
                    calc.multiply(a, b);
                    Ok(())
                })?,
                4 => self.operation("Divide", |calc, a, b| calc.divide(a, b))?,
                5 => self.show_result()?,
                6 => {
                    println!("\nLeaving the program...\n");
                    return Ok(());
                }
                _ => self.error = Some(INVALID_OPTION.to_string()),
            }
        }
    }

    /// Reads the operands and applies one operation. Before the first
    /// completed operation two numbers are read; afterwards one number folds
    /// into the running total.
    fn operation<F>(&mut self, name: &str, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Calculator, f64, Option<f64>) -> Result<()>,
    {
        console::clear_screen()?;
        println!("[{name} numbers]\n\n");

        let first_prompt = if self.calc.has_operations() {
            ">> Enter a number: "
        } else {
            ">> Enter the first number: "
        };
        let Some(first) = self.read_number(first_prompt)? else {
            return Ok(());
        };

        let second = if self.calc.has_operations() {
            None
        } else {
            match self.read_number(">> Enter the second number: ")? {
                Some(n) => Some(n),
                None => return Ok(()),
            }
        };

        if let Err(err) = apply(&mut self.calc, first, second) {
            self.error = Some(format!("ERROR: {err}!"));
        }
        Ok(())
    }

    /// `Ok(None)` means the input was rejected; the error banner is already
    /// set and the operation is abandoned with the total unchanged.
    fn read_number(&mut self, message: &str) -> Result<Option<f64>> {
        let raw = console::prompt(message)?;
        match coerce_integer(&raw) {
            Some(n) => Ok(Some(n as f64)),
            None => {
                self.error = Some(INVALID_NUMBER.to_string());
                Ok(None)
            }
        }
    }

    fn show_result(&mut self) -> Result<()> {
        if self.calc.has_operations() {
            println!("\n- The final result is: {}\n", self.calc.result());
        } else {
            println!("\nERROR: No operation has been performed yet.\n");
        }
        console::pause()
    }
}

impl Default for CalcApp {
    fn default() -> Self {
        Self::new()
    }
}
