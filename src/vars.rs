use std::fmt;

use crate::RpnError;

const SLOTS: usize = 26;

/// A variable name, one of A to Z. Lowercase input is folded to uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Var(u8);

impl Var {
    pub fn new(letter: char) -> Result<Var, RpnError> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Var(upper as u8 - b'A'))
        } else {
            Err(RpnError::InvalidVariable(letter))
        }
    }

    pub fn letter(self) -> char {
        (b'A' + self.0) as char
    }

    fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<char> for Var {
    type Error = RpnError;

    fn try_from(letter: char) -> Result<Var, RpnError> {
        Var::new(letter)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One `A = 3.00` line of a listing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binding(pub Var, pub f64);

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:.2}", self.0, self.1)
    }
}

/// The 26 single-letter slots. Lives as long as the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    slots: [Option<f64>; SLOTS],
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, letter: char, value: f64) -> Result<Var, RpnError> {
        let var = Var::new(letter)?;
        self.slots[var.index()] = Some(value);
        Ok(var)
    }

    pub fn get(&self, letter: char) -> Result<f64, RpnError> {
        let var = Var::new(letter)?;
        self.slots[var.index()].ok_or(RpnError::UndefinedVariable(var.letter()))
    }

    pub fn is_defined(&self, letter: char) -> bool {
        matches!(Var::new(letter), Ok(var) if self.slots[var.index()].is_some())
    }

    pub fn reset(&mut self) {
        self.slots = [None; SLOTS];
    }

    /// Defined variables, A through Z.
    pub fn list_defined(&self) -> Vec<Binding> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|v| Binding(Var(i as u8), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_get() {
        let mut vars = Variables::new();
        assert_eq!(vars.get('A'), Err(RpnError::UndefinedVariable('A')));
        vars.define('a', 5.).unwrap();
        assert_eq!(vars.get('A'), Ok(5.));
        assert_eq!(vars.get('a'), Ok(5.));
        assert!(vars.is_defined('A'));
        assert!(!vars.is_defined('B'));
    }

    #[test]
    fn redefine_overwrites() {
        let mut vars = Variables::new();
        vars.define('Q', 1.).unwrap();
        vars.define('q', 2.).unwrap();
        assert_eq!(vars.get('Q'), Ok(2.));
        assert_eq!(vars.list_defined().len(), 1);
    }

    #[test]
    fn reset_clears() {
        let mut vars = Variables::new();
        vars.define('A', 5.).unwrap();
        vars.reset();
        assert!(!vars.is_defined('A'));
        assert_eq!(vars.get('A'), Err(RpnError::UndefinedVariable('A')));
        assert!(vars.list_defined().is_empty());
    }

    #[test]
    fn outside_a_to_z() {
        let mut vars = Variables::new();
        assert_eq!(vars.define('é', 1.), Err(RpnError::InvalidVariable('é')));
        assert_eq!(vars.get('1'), Err(RpnError::InvalidVariable('1')));
        assert!(!vars.is_defined('_'));
    }

    #[test]
    fn listing_is_ordered_and_formatted() {
        let mut vars = Variables::new();
        vars.define('z', -0.126).unwrap();
        vars.define('B', 4.).unwrap();
        vars.define('A', 3.).unwrap();
        let lines: Vec<String> = vars.list_defined().iter().map(|b| b.to_string()).collect();
        assert_eq!(lines, ["A = 3.00", "B = 4.00", "Z = -0.13"]);
    }
}
