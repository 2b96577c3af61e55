use log::trace;

use crate::scan::Operator;
use crate::{RpnError, Variables};

/// Evaluate space separated postfix, e.g. `A B 2 * +`, against the store.
pub fn evaluate(postfix: &str, vars: &Variables) -> Result<f64, RpnError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix.split_whitespace() {
        trace!("token {token:?}, stack {stack:?}");
        let value = match operand(token, vars)? {
            Some(v) => v,
            None => {
                let op = operator(token)
                    .ok_or_else(|| RpnError::InvalidToken(token.to_string()))?;
                // first pop is the right hand side
                let (b, a) = match (stack.pop(), stack.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => return Err(RpnError::InsufficientOperands(op.symbol())),
                };
                apply(a, b, op)?
            }
        };
        stack.push(value);
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        rest => Err(RpnError::IncompleteExpression(rest.len())),
    }
}

/// The value of a variable or literal token, `None` if it is neither.
fn operand(token: &str, vars: &Variables) -> Result<Option<f64>, RpnError> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_alphabetic() {
            return vars.get(c).map(Some);
        }
    }
    let numeric = token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().any(|c| c.is_ascii_digit());
    if !numeric {
        return Ok(None);
    }
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(RpnError::InvalidNumber(token.to_string())),
    }
}

fn operator(token: &str) -> Option<Operator> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Operator::from_char(c),
        _ => None,
    }
}

pub fn apply(a: f64, b: f64, op: Operator) -> Result<f64, RpnError> {
    Ok(match op {
        Operator::Plus => a + b,
        Operator::Minus => a - b,
        Operator::Times => a * b,
        Operator::Divide if b == 0. => return Err(RpnError::DivisionByZero),
        Operator::Divide => a / b,
        Operator::Power => a.powf(b),
    })
}
