//! Infix to postfix, by shunting-yard.

use itertools::Itertools;
use log::trace;

use crate::scan::{scan, Operator, Token};
use crate::RpnError;

/// What can sit on the operator stack.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pending {
    Open,
    Op(Operator),
}

impl Pending {
    // an open paren ranks below every operator, so precedence never pops it
    fn rank(self) -> u8 {
        match self {
            Pending::Open => 1,
            Pending::Op(op) => op.rank(),
        }
    }
}

/// Space separated postfix for an infix sentence, e.g. `A+B*C` -> `A B C * +`.
pub fn convert(infix: &str) -> Result<String, RpnError> {
    Ok(to_postfix(&scan(infix)?)?.iter().join(" "))
}

/// The output never contains parens; they are consumed here.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, RpnError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::with_capacity(tokens.len());

    for &token in tokens {
        trace!("token {token:?}, stack {stack:?}");
        match token {
            Token::Literal(_) | Token::Variable(_) => out.push(token),
            Token::LP => stack.push(Pending::Open),
            Token::RP => loop {
                match stack.pop() {
                    Some(Pending::Open) => break,
                    Some(Pending::Op(op)) => out.push(Token::Operator(op)),
                    None => return Err(RpnError::UnbalancedParentheses),
                }
            },
            Token::Operator(op) => {
                // >= makes equal ranks pop first: left-associative
                while let Some(&Pending::Op(top)) = stack.last() {
                    if top.rank() < op.rank() {
                        break;
                    }
                    stack.pop();
                    out.push(Token::Operator(top));
                }
                stack.push(Pending::Op(op));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => out.push(Token::Operator(op)),
            Pending::Open => return Err(RpnError::UnbalancedParentheses),
        }
    }
    Ok(out)
}
