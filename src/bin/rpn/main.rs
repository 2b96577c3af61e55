use anyhow::Result;
use cfg_if::cfg_if;
use log::warn;
use rpn::repl::error_message;
use rpn::{Outcome, Session};

#[cfg(feature = "tui")]
mod tui;

fn main() -> Result<()> {
    env_logger::init();

    println!("rpn {} (type EXIT to quit)", env!("CARGO_PKG_VERSION"));

    cfg_if! {
    if #[cfg(feature = "tui")] {
        tui::drive()?
    } else {
        plain_drive()?
    }
    }

    println!("bye");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn plain_drive() -> Result<()> {
    use std::io::{self, Write};

    let mut session = Session::new();

    let mut buffer = String::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        stdout.write_all(b"> ")?;
        stdout.flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            break;
        }

        if turn(&buffer, &mut session) == EvalState::Done {
            break;
        }
        buffer.truncate(0);
    }

    Ok(())
}

#[derive(Debug, Eq, PartialEq)]
enum EvalState {
    Regular,
    Done,
}

fn turn(line: &str, session: &mut Session) -> EvalState {
    match session.feed(line) {
        Ok(Outcome::Exit) => return EvalState::Done,
        Ok(outcome) => {
            for line in outcome.lines() {
                println!("{}", line);
            }
        }
        Err(e) => {
            warn!("{:?}", e);
            println!("{} {}", error_prefix(), error_message(&e));
        }
    }

    EvalState::Regular
}

#[cfg(feature = "tui")]
fn error_prefix() -> String {
    use colored::Colorize;
    "error:".red().bold().to_string()
}

#[cfg(not(feature = "tui"))]
fn error_prefix() -> String {
    "error:".to_string()
}
