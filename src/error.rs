use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RpnError {
    #[error("invalid character: {0:?}")]
    InvalidCharacter(char),
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("variable {0} is not defined")]
    UndefinedVariable(char),
    #[error("not enough operands for {0}")]
    InsufficientOperands(char),
    #[error("incomplete expression: {0} values left on the stack")]
    IncompleteExpression(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid token: {0:?}")]
    InvalidToken(String),
    #[error("invalid variable: {0:?}, only A to Z can hold values")]
    InvalidVariable(char),
    #[error("malformed number: {0:?}")]
    InvalidNumber(String),
}

impl RpnError {
    /// The first typed error in an anyhow chain, if there is one.
    pub fn extract(err: &anyhow::Error) -> Option<&RpnError> {
        err.chain().find_map(|e| e.downcast_ref::<RpnError>())
    }
}
