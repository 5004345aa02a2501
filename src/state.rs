//! Variable table shared between assignments and expressions
//!
//! Names are case-sensitive and made of ASCII letters only. The table is
//! owned by the session; the evaluator only ever borrows it.

use num_bigint::BigInt;
use std::collections::HashMap;

/// Named integer values that persist between lines
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    vars: HashMap<String, BigInt>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.vars.get(name)
    }

    /// Store a value, returning the one it replaced
    pub fn set(&mut self, name: impl Into<String>, value: BigInt) -> Option<BigInt> {
        self.vars.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variable names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Whether `text` can name a variable: one or more ASCII letters
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}
