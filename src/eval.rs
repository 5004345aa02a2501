//! Postfix evaluation over arbitrary-precision integers
//!
//! The evaluator walks postfix text left to right with an operand stack:
//! - operand characters collect into a pending operand
//! - a separator resolves the pending operand and pushes it
//! - an operator pushes any pending operand, pops right then left, and
//!   pushes the result
//!
//! Two situations that would normally be errors are absorbed by default,
//! see [`Fallback`].

use crate::lexer::{classify, CharClass, Operator};
use crate::postfix::Postfix;
use crate::state::{is_identifier, VariableTable};
use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Unmatched closing parenthesis")]
    UnmatchedParenthesis,
    #[error("Unclosed opening parenthesis")]
    UnmatchedOpenParen,
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Stack underflow: '{0}' needs two operands")]
    StackUnderflow(char),
}

/// Broad category of an [`EvalError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Parentheses do not balance
    Structural,
    /// Operand text is neither a number nor a known variable
    Operand,
    /// Only raised under [`Fallback::STRICT`]
    Arithmetic,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UnmatchedParenthesis | EvalError::UnmatchedOpenParen => ErrorKind::Structural,
            EvalError::InvalidOperand(_) => ErrorKind::Operand,
            EvalError::DivisionByZero | EvalError::StackUnderflow(_) => ErrorKind::Arithmetic,
        }
    }
}

/// Which failures silently evaluate to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    /// `x / 0` yields 0
    pub zero_on_division_by_zero: bool,
    /// An operator missing an operand uses 0 in its place
    pub zero_on_underflow: bool,
}

impl Fallback {
    pub const LENIENT: Fallback = Fallback {
        zero_on_division_by_zero: true,
        zero_on_underflow: true,
    };

    pub const STRICT: Fallback = Fallback {
        zero_on_division_by_zero: false,
        zero_on_underflow: false,
    };
}

impl Default for Fallback {
    fn default() -> Self {
        Fallback::LENIENT
    }
}

/// Evaluates postfix expressions against a borrowed variable table
pub struct Evaluator<'a> {
    vars: &'a VariableTable,
    fallback: Fallback,
    stack: Vec<BigInt>,
    pending: String,
}

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a VariableTable) -> Self {
        Evaluator {
            vars,
            fallback: Fallback::default(),
            stack: Vec::new(),
            pending: String::new(),
        }
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Evaluate a postfix expression. An empty stack at the end yields 0.
    pub fn evaluate(&mut self, postfix: &Postfix) -> Result<BigInt, EvalError> {
        self.stack.clear();
        self.pending.clear();

        for c in postfix.as_str().chars() {
            match classify(c) {
                CharClass::Operand => self.pending.push(c),
                CharClass::Whitespace => self.push_pending()?,
                CharClass::Operator(op) => {
                    self.push_pending()?;
                    self.apply(op)?;
                }
                CharClass::OpenParen | CharClass::CloseParen | CharClass::Other => {}
            }
        }
        self.push_pending()?;

        Ok(self.stack.pop().unwrap_or_default())
    }

    fn push_pending(&mut self) -> Result<(), EvalError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.pending);
        let value = self.resolve(&text)?;
        log::trace!("push {} ({})", value, text);
        self.stack.push(value);
        Ok(())
    }

    /// A known variable name, else a base-10 literal
    fn resolve(&self, text: &str) -> Result<BigInt, EvalError> {
        if is_identifier(text) {
            if let Some(value) = self.vars.get(text) {
                return Ok(value.clone());
            }
        }
        text.parse::<BigInt>()
            .map_err(|_| EvalError::InvalidOperand(text.to_string()))
    }

    fn pop_operand(&mut self, op: Operator) -> Result<BigInt, EvalError> {
        match self.stack.pop() {
            Some(value) => Ok(value),
            None if self.fallback.zero_on_underflow => {
                log::trace!("'{}' missing an operand, using 0", op.symbol());
                Ok(BigInt::ZERO)
            }
            None => Err(EvalError::StackUnderflow(op.symbol())),
        }
    }

    fn apply(&mut self, op: Operator) -> Result<(), EvalError> {
        let right = self.pop_operand(op)?;
        let left = self.pop_operand(op)?;

        let result = match op {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => {
                if right == BigInt::ZERO {
                    if !self.fallback.zero_on_division_by_zero {
                        return Err(EvalError::DivisionByZero);
                    }
                    BigInt::ZERO
                } else {
                    // truncates toward zero
                    left / right
                }
            }
        };

        log::trace!("apply '{}' -> {}", op.symbol(), result);
        self.stack.push(result);
        Ok(())
    }
}
