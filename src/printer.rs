use crate::types::{CalcError, Op};
use itertools::Itertools;

pub const OPERATION_PROMPT: &str = "Operation: ";
pub const FIRST_NUMBER_PROMPT: &str = "First number: ";
pub const SECOND_NUMBER_PROMPT: &str = "Second number: ";
pub const GOODBYE: &str = "Goodbye.";

pub fn banner() -> [String; 2] {
    [
        String::from("Calculator REPL. Type 'q' to quit."),
        format!(
            "Operations: {} (or {})",
            Op::ALL.iter().map(|op| op.symbol()).join(", "),
            Op::ALL.iter().map(|op| op.short_name()).join("/")
        ),
    ]
}

// Debug表現は整数値でも小数部を残す (5.0, 1e20, inf, NaN)
pub fn pr_number(n: f64) -> String {
    format!("{:?}", n)
}

pub fn pr_result(n: f64) -> String {
    format!("Result: {}", pr_number(n))
}

pub fn pr_error(err: &CalcError) -> String {
    match err {
        CalcError::InvalidOperation(_) => format!(
            "Invalid operation. Try {}.",
            Op::ALL.iter().map(|op| op.symbol()).join(", ")
        ),
        CalcError::InvalidNumber(_) => {
            String::from("Invalid number input. Please enter a valid numeric value.")
        }
        CalcError::DivisionByZero => String::from("Error: division by zero."),
    }
}
