//! bigcalc - arbitrary-precision integer calculator
//!
//! # Overview
//!
//! bigcalc reads lines of text, keeps a table of named integer variables,
//! and evaluates infix arithmetic over integers of any size.
//!
//! # Pipeline
//!
//! ```text
//! raw line  -> normalize   "2 -- 3*(4+1)"  -> "2+3*(4+1)"
//!           -> to_postfix                  -> "2 3 4 1 +*+"
//!           -> Evaluator                   -> 17
//! ```
//!
//! - [`lexer`] classifies characters and collapses redundant signs
//! - [`postfix`] converts infix to postfix with an operator stack
//! - [`eval`] runs the postfix form on an operand stack
//!
//! # Quirks
//!
//! By default `x / 0` is `0` and an operator with a missing operand uses
//! `0` in its place. [`Fallback::STRICT`] turns both into errors.
//!
//! # Example
//!
//! ```rust
//! use bigcalc::{evaluate, VariableTable};
//! use num_bigint::BigInt;
//!
//! let mut vars = VariableTable::new();
//! vars.set("a", BigInt::from(10));
//! assert_eq!(evaluate("a + 5", &vars).unwrap(), BigInt::from(15));
//! assert_eq!(evaluate("(2 + 2) * 2", &vars).unwrap(), BigInt::from(8));
//! ```

pub mod eval;
pub mod lexer;
pub mod postfix;
pub mod session;
pub mod state;
pub mod statement;

// Re-export commonly used items
pub use eval::{ErrorKind, EvalError, Evaluator, Fallback};
pub use lexer::{classify, normalize, CharClass, Operator};
pub use postfix::{to_postfix, Postfix};
pub use session::{CalcError, Reply, Session};
pub use state::VariableTable;
pub use statement::{classify_line, parse_assignment, AssignError, Command, Line};

use num_bigint::BigInt;

/// Evaluate an infix expression with the default zero fallbacks
pub fn evaluate(expression: &str, vars: &VariableTable) -> Result<BigInt, EvalError> {
    evaluate_with(expression, vars, Fallback::LENIENT)
}

/// Evaluate an infix expression with an explicit fallback policy
pub fn evaluate_with(
    expression: &str,
    vars: &VariableTable,
    fallback: Fallback,
) -> Result<BigInt, EvalError> {
    let normalized = normalize(expression);
    log::debug!("normalized: {:?} -> {:?}", expression, normalized);
    let postfix = to_postfix(&normalized)?;
    Evaluator::new(vars).with_fallback(fallback).evaluate(&postfix)
}
