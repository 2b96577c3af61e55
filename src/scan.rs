use std::fmt;

use itertools::Itertools;

use crate::RpnError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Literal(f64),
    /// Uppercased letter. Anything outside A-Z is rejected by the store, not here.
    Variable(char),
    Operator(Operator),
    LP,
    RP,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Power,
    Times,
    Divide,
    Plus,
    Minus,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        Some(match c {
            '^' => Operator::Power,
            '*' => Operator::Times,
            '/' => Operator::Divide,
            '+' => Operator::Plus,
            '-' => Operator::Minus,
            _ => return None,
        })
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Power => '^',
            Operator::Times => '*',
            Operator::Divide => '/',
            Operator::Plus => '+',
            Operator::Minus => '-',
        }
    }

    /// Precedence, highest binds tightest. Every operator is left-associative.
    /// Rank 1 is reserved for an open paren sitting on the operator stack.
    pub fn rank(self) -> u8 {
        match self {
            Operator::Power => 4,
            Operator::Times | Operator::Divide => 3,
            Operator::Plus | Operator::Minus => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // finite f64 `{}` never uses an exponent, so this re-parses to the same value
            Token::Literal(v) => write!(f, "{v}"),
            Token::Variable(c) => write!(f, "{c}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LP => write!(f, "("),
            Token::RP => write!(f, ")"),
        }
    }
}

pub fn scan(sentence: &str) -> Result<Vec<Token>, RpnError> {
    let mut tokens = Vec::new();
    let mut it = sentence.chars().peekable();

    while let Some(&c) = it.peek() {
        match c {
            c if c.is_whitespace() => {
                it.next();
            }
            '(' => {
                it.next();
                tokens.push(Token::LP);
            }
            ')' => {
                it.next();
                tokens.push(Token::RP);
            }
            '0'..='9' | '.' => {
                let run: String = it
                    .peeking_take_while(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                tokens.push(scan_literal(&run)?);
            }
            c if c.is_alphabetic() => {
                it.next();
                tokens.push(Token::Variable(c.to_ascii_uppercase()));
            }
            c => {
                it.next();
                let op = Operator::from_char(c).ok_or(RpnError::InvalidCharacter(c))?;
                tokens.push(Token::Operator(op));
            }
        }
    }
    Ok(tokens)
}

fn scan_literal(run: &str) -> Result<Token, RpnError> {
    if run.matches('.').count() > 1 || !run.chars().any(|c| c.is_ascii_digit()) {
        return Err(RpnError::InvalidNumber(run.to_string()));
    }
    match run.parse::<f64>() {
        // too many digits overflows to inf, which has no decimal spelling
        Ok(v) if v.is_finite() => Ok(Token::Literal(v)),
        _ => Err(RpnError::InvalidNumber(run.to_string())),
    }
}
