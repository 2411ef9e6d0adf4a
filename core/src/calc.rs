use anyhow::{bail, Result};

/// Running-total calculator. The first completed operation consumes two
/// operands and seeds the total; every later operation folds a single
/// operand into it.
#[derive(Debug, Default)]
pub struct Calculator {
    result: f64,
    seeded: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: f64, b: Option<f64>) {
        match b {
            Some(b) if !self.seeded => {
                self.result = a + b;
                self.seeded = true;
            }
            _ => self.result += a,
        }
    }

    pub fn subtract(&mut self, a: f64, b: Option<f64>) {
        match b {
            Some(b) if !self.seeded => {
                self.result = a - b;
                self.seeded = true;
            }
            _ => self.result -= a,
        }
    }

    pub fn multiply(&mut self, a: f64, b: Option<f64>) {
        match b {
            Some(b) if !self.seeded => {
                self.result = a * b;
                self.seeded = true;
            }
            _ => self.result *= a,
        }
    }

    /// A zero divisor is rejected and the running total is left unchanged.
    pub fn divide(&mut self, a: f64, b: Option<f64>) -> Result<()> {
        match b {
            Some(b) if !self.seeded => {
                if b == 0.0 {
                    bail!("Cannot divide by zero");
                }
                self.result = a / b;
                self.seeded = true;
            }
            _ => {
                if a == 0.0 {
                    bail!("Cannot divide by zero");
                }
                self.result /= a;
            }
        }
        Ok(())
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn has_operations(&self) -> bool {
        self.seeded
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_operation_seeds_from_two_operands() {
        let mut calc = Calculator::new();
        assert!(!calc.has_operations());
        calc.add(2.0, Some(3.0));
        assert_eq!(calc.result(), 5.0);
        assert!(calc.has_operations());
    }

    #[test]
    fn test_later_operations_fold_single_operand() {
        let mut calc = Calculator::new();
        calc.add(2.0, Some(3.0));
        calc.subtract(1.0, None);
        assert_eq!(calc.result(), 4.0);
        calc.multiply(10.0, None);
        assert_eq!(calc.result(), 40.0);
        calc.divide(4.0, None).unwrap();
        assert_eq!(calc.result(), 10.0);
    }

    #[test]
    fn test_subtract_and_multiply_seed() {
        let mut calc = Calculator::new();
        calc.subtract(10.0, Some(4.0));
        assert_eq!(calc.result(), 6.0);

        let mut calc = Calculator::new();
        calc.multiply(6.0, Some(7.0));
        assert_eq!(calc.result(), 42.0);
    }

    #[test]
    fn test_divide_seeds_from_two_operands() {
        let mut calc = Calculator::new();
        calc.divide(9.0, Some(3.0)).unwrap();
        assert_eq!(calc.result(), 3.0);
    }

    #[test]
    fn test_divide_by_zero_leaves_total_unchanged() {
        let mut calc = Calculator::new();
        calc.add(4.0, Some(6.0));
        assert!(calc.divide(0.0, None).is_err());
        assert_eq!(calc.result(), 10.0);
        assert!(calc.has_operations());
    }

    #[test]
    fn test_seeding_divide_by_zero_leaves_calculator_unseeded() {
        let mut calc = Calculator::new();
        assert!(calc.divide(5.0, Some(0.0)).is_err());
        assert_eq!(calc.result(), 0.0);
        assert!(!calc.has_operations());
    }

    #[test]
    fn test_reset_returns_to_unseeded_zero() {
        let mut calc = Calculator::new();
        calc.add(1.0, Some(2.0));
        calc.reset();
        assert_eq!(calc.result(), 0.0);
        assert!(!calc.has_operations());
        // The next operation seeds again.
        calc.add(7.0, Some(1.0));
        assert_eq!(calc.result(), 8.0);
    }
}
