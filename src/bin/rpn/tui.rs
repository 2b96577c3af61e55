use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, warn};
use rpn::Session;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;

use super::EvalState;

pub fn drive() -> Result<()> {
    let data_dir = match directories::ProjectDirs::from("github", "rpn", "rpn") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::new(),
    };
    let hist_file = history_file(&data_dir);
    debug!("history: {}", hist_file.display());

    let mut rl = rustyline::Editor::<()>::new()?;
    if hist_file.exists() {
        if let Err(e) = rl.load_history(&hist_file) {
            warn!("couldn't load history from {}: {e}", hist_file.display());
        }
    }
    rl.set_auto_add_history(true);

    let mut session = Session::new();

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(other) => Err(other)?,
        };
        if super::turn(&line, &mut session) == EvalState::Done {
            break;
        }
    }

    if let Err(e) = rl.save_history(&hist_file) {
        warn!("couldn't save history to {}: {e}", hist_file.display());
    }
    Ok(())
}

/// Where history lives. A data dir we can't create only costs us history.
fn history_file(data_dir: &Path) -> PathBuf {
    if let Err(e) = fs::create_dir_all(data_dir) {
        warn!("couldn't create {}: {e}", data_dir.display());
    }
    data_dir.join("rpn_history")
}
