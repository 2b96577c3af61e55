//! Per-line dispatch for the interactive driver.
//!
//! A line is a command (`EXIT`, `VARS`, `RESET`), an assignment (`A = 3`), or
//! an expression. Nothing here reads or prints; the binary owns the terminal.

use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::vars::Binding;
use crate::{convert, evaluate, validate, RpnError, Variables};

lazy_static! {
    // a letter, `=`, then a plain decimal: optional sign, fraction, exponent
    static ref ASSIGNMENT: Regex =
        Regex::new(r"^(\p{Alphabetic})\s*=\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$")
            .expect("static regex");
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line<'a> {
    Empty,
    Exit,
    Vars,
    Reset,
    Assign(char, f64),
    Expression(&'a str),
}

pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Line::Empty;
    }
    for (word, cmd) in [("EXIT", Line::Exit), ("VARS", Line::Vars), ("RESET", Line::Reset)] {
        if line.eq_ignore_ascii_case(word) {
            return cmd;
        }
    }
    if let Some(caps) = ASSIGNMENT.captures(line) {
        let letter = caps[1].chars().next();
        if let (Some(letter), Ok(value)) = (letter, caps[2].parse::<f64>()) {
            return Line::Assign(letter, value);
        }
    }
    Line::Expression(line)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Nothing,
    Value(f64),
    Assigned(Binding),
    Listing(Vec<Binding>),
    Reset,
    Exit,
}

impl Outcome {
    /// The text the driver prints for this turn.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::Nothing | Outcome::Exit => vec![],
            Outcome::Value(v) => vec![format_value(*v)],
            Outcome::Assigned(b) => vec![b.to_string()],
            Outcome::Listing(bs) if bs.is_empty() => vec!["no variables defined".to_string()],
            Outcome::Listing(bs) => bs.iter().map(|b| b.to_string()).collect(),
            Outcome::Reset => vec!["variables reset".to_string()],
        }
    }
}

/// Default float rendering: always a fraction digit, `11.0` rather than `11`.
pub fn format_value(v: f64) -> String {
    match v {
        v if v.is_nan() => "NaN".to_string(),
        v if v == f64::INFINITY => "Infinity".to_string(),
        v if v == f64::NEG_INFINITY => "-Infinity".to_string(),
        v => format!("{v:?}"),
    }
}

/// validate, convert, evaluate.
pub fn expression(text: &str, vars: &Variables) -> Result<f64, RpnError> {
    validate(text)?;
    let postfix = convert(text)?;
    debug!("postfix: {postfix:?}");
    evaluate(&postfix, vars)
}

/// The message for a failed turn: the innermost cause, usually an [`RpnError`].
pub fn error_message(err: &anyhow::Error) -> String {
    match RpnError::extract(err) {
        Some(e) => e.to_string(),
        None => err.root_cause().to_string(),
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    vars: Variables,
    state: State,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            vars: Variables::new(),
            state: State::Running,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn vars(&self) -> &Variables {
        &self.vars
    }

    /// Run one line. Errors leave the store untouched and the session running.
    pub fn feed(&mut self, line: &str) -> Result<Outcome> {
        if !self.is_running() {
            return Ok(Outcome::Exit);
        }
        let line = classify(line);
        debug!("line: {line:?}");
        Ok(match line {
            Line::Empty => Outcome::Nothing,
            Line::Exit => {
                self.state = State::Terminated;
                Outcome::Exit
            }
            Line::Vars => Outcome::Listing(self.vars.list_defined()),
            Line::Reset => {
                self.vars.reset();
                Outcome::Reset
            }
            Line::Assign(letter, value) => {
                let var = self
                    .vars
                    .define(letter, value)
                    .with_context(|| anyhow!("assigning {value} to {letter:?}"))?;
                Outcome::Assigned(Binding(var, value))
            }
            Line::Expression(text) => Outcome::Value(
                expression(text, &self.vars).with_context(|| anyhow!("evaluating {text:?}"))?,
            ),
        })
    }
}
