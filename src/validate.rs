//! Cheap pre-checks on a raw line, run before conversion.

use crate::RpnError;

pub fn valid_parentheses(text: &str) -> bool {
    let mut depth: i64 = 0;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => (),
        }
    }
    depth == 0
}

pub fn valid_characters(text: &str) -> bool {
    first_invalid_character(text).is_none()
}

fn first_invalid_character(text: &str) -> Option<char> {
    text.chars().find(|&c| {
        !(c.is_alphanumeric()
            || c.is_whitespace()
            || matches!(c, '+' | '-' | '*' | '/' | '^' | '=' | '(' | ')' | '.'))
    })
}

/// Both checks, characters first so the reason names the offending character.
pub fn validate(text: &str) -> Result<(), RpnError> {
    if let Some(c) = first_invalid_character(text) {
        return Err(RpnError::InvalidCharacter(c));
    }
    if !valid_parentheses(text) {
        return Err(RpnError::UnbalancedParentheses);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parens() {
        assert!(valid_parentheses("(A+(B*C))"));
        assert!(valid_parentheses("no parens"));
        assert!(!valid_parentheses("(A+B"));
        assert!(!valid_parentheses("A+B)"));
        // closes before it opens, even though the count ends at zero
        assert!(!valid_parentheses(")A+B("));
    }

    #[test]
    fn characters() {
        assert!(valid_characters("a = 3.5 ^ (b - 2) / c * 1"));
        assert!(!valid_characters("A % B"));
        assert!(!valid_characters("A, B"));
    }

    #[test]
    fn reasons() {
        assert_eq!(validate("A & (B"), Err(RpnError::InvalidCharacter('&')));
        assert_eq!(validate("(A + B"), Err(RpnError::UnbalancedParentheses));
        assert_eq!(validate("(A + B) * 2"), Ok(()));
    }
}
