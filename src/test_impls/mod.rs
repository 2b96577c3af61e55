mod scenarios;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::repl::{error_message, expression};
use crate::{Outcome, Session, Variables};

pub use scenarios::{Scenario, ScenarioList};

/// Evaluate an expression against an empty store.
pub fn scan_eval(sentence: &str) -> Result<f64> {
    eval_with(sentence, &Variables::new())
}

/// The same validate, convert, evaluate pipeline a session runs for an expression.
pub fn eval_with(sentence: &str, vars: &Variables) -> Result<f64> {
    debug!("sentence: {:?}", sentence);
    expression(sentence, vars).with_context(|| anyhow!("evaluating {:?}", sentence))
}

/// Everything the driver would print for these lines, errors included.
/// Stops at the first `EXIT`.
pub fn transcript<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut session = Session::new();
    let mut out = Vec::new();
    for line in lines {
        match session.feed(line.as_ref()) {
            Ok(Outcome::Exit) => break,
            Ok(outcome) => out.extend(outcome.lines()),
            Err(e) => out.push(format!("error: {}", error_message(&e))),
        }
    }
    out
}
