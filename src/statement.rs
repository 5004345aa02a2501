//! Line classification and assignment statements
//!
//! Every input line is one of: a `/command`, a bare variable name to print,
//! an assignment (`name = value`), a blank line, or an expression.

use crate::state::{is_identifier, VariableTable};
use nom::{
    branch::alt,
    bytes::complete::take_till,
    character::complete::{alpha1, char, digit1},
    combinator::{all_consuming, map, rest},
    sequence::separated_pair,
    IResult,
};
use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("Invalid identifier")]
    InvalidIdentifier,
    #[error("Invalid assignment")]
    InvalidAssignment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        match input {
            "/help" => Command::Help,
            "/exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// What a single input line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Command(Command),
    /// A bare identifier: print its value
    Print(&'a str),
    Assign(&'a str),
    Expression(&'a str),
}

/// Classify a trimmed input line. Checks run in a fixed order, so
/// `/a=1` is a command and `a` alone is a print request.
pub fn classify_line(line: &str) -> Line<'_> {
    if line.starts_with('/') {
        Line::Command(Command::parse(line))
    } else if is_identifier(line) {
        Line::Print(line)
    } else if line.contains('=') {
        Line::Assign(line)
    } else if line.is_empty() {
        Line::Blank
    } else {
        Line::Expression(line)
    }
}

/// Right-hand side of an assignment
#[derive(Debug, PartialEq)]
enum Source<'a> {
    Variable(&'a str),
    Literal(&'a str),
}

/// `lhs = rhs`, split on the first `=`
fn assignment(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c: char| c == '='), char('='), rest)(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    all_consuming(alpha1)(input)
}

fn source(input: &str) -> IResult<&str, Source<'_>> {
    alt((
        map(all_consuming(alpha1), Source::Variable),
        map(all_consuming(digit1), Source::Literal),
    ))(input)
}

/// Parse `name = value` and resolve the value.
///
/// The value is either a digit string or the name of a variable that
/// already exists. Signs and expressions are not accepted on the right.
pub fn parse_assignment(
    input: &str,
    vars: &VariableTable,
) -> Result<(String, BigInt), AssignError> {
    let (_, (lhs, rhs)) = assignment(input).map_err(|_| AssignError::InvalidAssignment)?;
    let lhs = lhs.trim_end();
    let rhs = rhs.trim_start();

    if rhs.is_empty() || rhs.contains('=') {
        return Err(AssignError::InvalidAssignment);
    }

    let (_, name) = identifier(lhs).map_err(|_| AssignError::InvalidIdentifier)?;
    let (_, src) = source(rhs).map_err(|_| AssignError::InvalidAssignment)?;

    let value = match src {
        Source::Variable(other) => vars
            .get(other)
            .cloned()
            .ok_or(AssignError::InvalidAssignment)?,
        Source::Literal(digits) => digits
            .parse::<BigInt>()
            .map_err(|_| AssignError::InvalidAssignment)?,
    };

    Ok((name.to_string(), value))
}
