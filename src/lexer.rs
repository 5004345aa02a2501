//! Character classification and sign normalization for bigcalc
//!
//! Expressions are scanned one character at a time. Every character falls
//! into exactly one [`CharClass`]; runs of adjacent operand characters form
//! a single operand.

/// Precedence weight of `*` and `/`
pub const HIGH_WEIGHT: u8 = 100;
/// Precedence weight of `+` and `-`
pub const LOW_WEIGHT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength; equal weights associate left to right
    pub fn weight(self) -> u8 {
        match self {
            Operator::Mul | Operator::Div => HIGH_WEIGHT,
            Operator::Add | Operator::Sub => LOW_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII digit or letter: part of a numeral or identifier
    Operand,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Whitespace,
    /// Anything else. Only ends the operand in progress.
    Other,
}

/// Classify a single character of an expression
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_alphanumeric() {
        return CharClass::Operand;
    }
    if let Some(op) = Operator::from_char(c) {
        return CharClass::Operator(op);
    }
    match c {
        '(' => CharClass::OpenParen,
        ')' => CharClass::CloseParen,
        c if c.is_whitespace() => CharClass::Whitespace,
        _ => CharClass::Other,
    }
}

/// Collapse whitespace and redundant signs.
///
/// Four ordered rewrites, each applied once:
/// 1. drop all whitespace
/// 2. `--` becomes `+` (non-overlapping, left to right)
/// 3. runs of two or more `+` become a single `+`
/// 4. `+-` becomes `-`
///
/// This is not a fixed point: `5-+2` comes out unchanged.
pub fn normalize(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.replace("--", "+");
    let compact = squeeze_plus_runs(&compact);
    compact.replace("+-", "-")
}

fn squeeze_plus_runs(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut prev_plus = false;
    for c in input.chars() {
        if c == '+' && prev_plus {
            continue;
        }
        prev_plus = c == '+';
        result.push(c);
    }
    result
}
