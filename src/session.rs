//! A calculator session: one variable table plus the evaluation policy
//!
//! `Session::execute` takes one line of user input and returns what the
//! front end should show. Errors carry the exact user-facing message.

use crate::eval::{EvalError, Fallback};
use crate::state::VariableTable;
use crate::statement::{classify_line, parse_assignment, AssignError, Command, Line};
use num_bigint::BigInt;
use thiserror::Error;

pub const HELP_TEXT: &str = "\
The program evaluates integer expressions of any size.
  Operators: + - * / and parentheses; / truncates toward zero
  Variables: name = 12 or name = other (names are letters only)
  Print a variable by typing its name
  Repeated signs collapse: 2 -- 3 is 2 + 3
Commands: /help, /exit";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid expression")]
    InvalidExpression(#[from] EvalError),
    #[error(transparent)]
    Assign(#[from] AssignError),
    #[error("Unknown variable")]
    UnknownVariable(String),
    #[error("Unknown command")]
    UnknownCommand(String),
}

/// What a successfully executed line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank line or assignment
    Nothing,
    Value(BigInt),
    Message(&'static str),
    Exit,
}

#[derive(Debug, Default)]
pub struct Session {
    vars: VariableTable,
    fallback: Fallback,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(fallback: Fallback) -> Self {
        Session {
            vars: VariableTable::new(),
            fallback,
        }
    }

    pub fn vars(&self) -> &VariableTable {
        &self.vars
    }

    /// Execute one line of input. Surrounding whitespace is ignored.
    pub fn execute(&mut self, line: &str) -> Result<Reply, CalcError> {
        match classify_line(line.trim()) {
            Line::Blank => Ok(Reply::Nothing),
            Line::Command(Command::Help) => Ok(Reply::Message(HELP_TEXT)),
            Line::Command(Command::Exit) => Ok(Reply::Exit),
            Line::Command(Command::Unknown(name)) => Err(CalcError::UnknownCommand(name)),
            Line::Print(name) => self
                .vars
                .get(name)
                .cloned()
                .map(Reply::Value)
                .ok_or_else(|| CalcError::UnknownVariable(name.to_string())),
            Line::Assign(text) => {
                let (name, value) = parse_assignment(text, &self.vars)?;
                log::debug!("assign {} = {}", name, value);
                self.vars.set(name, value);
                Ok(Reply::Nothing)
            }
            Line::Expression(text) => {
                let value = self.calculate(text).map_err(|e| {
                    log::debug!("{:?} rejected: {}", text, e);
                    e
                })?;
                Ok(Reply::Value(value))
            }
        }
    }

    /// Evaluate an infix expression against this session's variables
    pub fn calculate(&self, expression: &str) -> Result<BigInt, EvalError> {
        crate::evaluate_with(expression, &self.vars, self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(n: i64) -> Result<Reply, CalcError> {
        Ok(Reply::Value(BigInt::from(n)))
    }

    #[test]
    fn assign_then_print() {
        let mut session = Session::new();
        assert_eq!(session.execute("n = 4"), Ok(Reply::Nothing));
        assert_eq!(session.execute("n"), value(4));
        assert_eq!(session.execute("n * n"), value(16));
    }

    #[test]
    fn reassign_overwrites() {
        let mut session = Session::new();
        session.execute("a = 1").unwrap();
        session.execute("a = 2").unwrap();
        assert_eq!(session.execute("a"), value(2));
    }

    #[test]
    fn failed_assignment_keeps_old_value() {
        let mut session = Session::new();
        session.execute("a = 1").unwrap();
        assert!(session.execute("a = b").is_err());
        assert_eq!(session.execute("a"), value(1));
    }

    #[test]
    fn unknown_variable() {
        let mut session = Session::new();
        let err = session.execute("missing").unwrap_err();
        assert_eq!(err.to_string(), "Unknown variable");
    }

    #[test]
    fn commands() {
        let mut session = Session::new();
        assert_eq!(session.execute("/exit"), Ok(Reply::Exit));
        assert_eq!(session.execute("/help"), Ok(Reply::Message(HELP_TEXT)));
        assert_eq!(
            session.execute("/go").unwrap_err().to_string(),
            "Unknown command"
        );
    }

    #[test]
    fn messages() {
        let mut session = Session::new();
        assert_eq!(session.execute("(1+2").unwrap_err().to_string(), "Invalid expression");
        assert_eq!(session.execute("a1 = 3").unwrap_err().to_string(), "Invalid identifier");
        assert_eq!(session.execute("a = 3x").unwrap_err().to_string(), "Invalid assignment");
    }

    #[test]
    fn blank_line() {
        let mut session = Session::new();
        assert_eq!(session.execute("   "), Ok(Reply::Nothing));
    }

    #[test]
    fn strict_session() {
        let mut session = Session::with_fallback(Fallback::STRICT);
        assert_eq!(
            session.execute("1/0"),
            Err(CalcError::InvalidExpression(EvalError::DivisionByZero))
        );
    }
}
