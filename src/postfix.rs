//! Infix to postfix conversion (shunting-yard)
//!
//! The output is flat text: each operand run is followed by a single space,
//! operators are appended with no separator, and parentheses never appear.
//! `(2+2)*2` becomes `2 2 +2*`.

use crate::eval::EvalError;
use crate::lexer::{classify, CharClass, Operator};
use std::fmt;

/// Marks the end of an operand run in postfix text
pub const SEPARATOR: char = ' ';

/// A parenthesis-free postfix expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix(String);

impl Postfix {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    OpenParen,
    Op(Operator),
}

/// Convert a normalized infix expression to postfix.
///
/// Fails on a `)` with no matching `(` and on a `(` that is never closed.
pub fn to_postfix(infix: &str) -> Result<Postfix, EvalError> {
    let mut ops: Vec<Pending> = Vec::new();
    let mut out = String::with_capacity(infix.len() * 2);
    let mut operand = String::new();

    for c in infix.chars() {
        let class = classify(c);
        if class == CharClass::Operand {
            operand.push(c);
            continue;
        }

        if !operand.is_empty() {
            out.push_str(&operand);
            out.push(SEPARATOR);
            operand.clear();
        }

        match class {
            CharClass::Operator(op) => push_operator(&mut ops, &mut out, op),
            CharClass::CloseParen => close_paren(&mut ops, &mut out)?,
            CharClass::OpenParen => ops.push(Pending::OpenParen),
            // whitespace and stray symbols only end the operand
            _ => {}
        }
    }

    out.push_str(&operand);
    while let Some(pending) = ops.pop() {
        match pending {
            Pending::OpenParen => return Err(EvalError::UnmatchedOpenParen),
            Pending::Op(op) => out.push(op.symbol()),
        }
    }

    let postfix = Postfix(out.trim().to_string());
    log::debug!("postfix: {:?} -> {:?}", infix, postfix.as_str());
    Ok(postfix)
}

/// Pop every operator that binds at least as tightly as `op`, stopping at
/// `(`, then push `op`.
fn push_operator(ops: &mut Vec<Pending>, out: &mut String, op: Operator) {
    while let Some(&Pending::Op(top)) = ops.last() {
        if top.weight() < op.weight() {
            break;
        }
        ops.pop();
        out.push(top.symbol());
    }
    ops.push(Pending::Op(op));
}

fn close_paren(ops: &mut Vec<Pending>, out: &mut String) -> Result<(), EvalError> {
    loop {
        match ops.pop() {
            None => return Err(EvalError::UnmatchedParenthesis),
            Some(Pending::OpenParen) => return Ok(()),
            Some(Pending::Op(op)) => out.push(op.symbol()),
        }
    }
}
