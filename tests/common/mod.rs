//! Common test utilities for bigcalc integration tests

pub use bigcalc::{evaluate, evaluate_with, EvalError, Fallback, Session, VariableTable};
use num_bigint::BigInt;

/// Helper to evaluate an expression with no variables and render the result
pub fn calc(input: &str) -> Result<String, EvalError> {
    let vars = VariableTable::new();
    evaluate(input, &vars).map(|n| n.to_string())
}

/// Helper to evaluate with the given variables
#[allow(dead_code)]
pub fn calc_with(input: &str, vars: &[(&str, i64)]) -> Result<String, EvalError> {
    let mut table = VariableTable::new();
    for (name, value) in vars {
        table.set(*name, BigInt::from(*value));
    }
    evaluate(input, &table).map(|n| n.to_string())
}

/// Run several lines through one session and collect what each printed
#[allow(dead_code)]
pub fn run_lines(lines: &[&str]) -> Vec<String> {
    let mut session = Session::new();
    lines
        .iter()
        .map(|line| match session.execute(line) {
            Ok(bigcalc::Reply::Value(n)) => n.to_string(),
            Ok(bigcalc::Reply::Message(m)) => m.to_string(),
            Ok(bigcalc::Reply::Exit) => "Bye!".to_string(),
            Ok(bigcalc::Reply::Nothing) => String::new(),
            Err(e) => e.to_string(),
        })
        .collect()
}
