use bigcalc::Session;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::{self, BufRead, IsTerminal};

use crate::rcfile::dirs_home;
use crate::terminal::{execute_line, Flow, GOODBYE};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = "> ";

/// Run the calculator on stdin: a line editor on a terminal, plain line
/// reads otherwise.
pub(crate) fn run(session: &mut Session) -> RlResult<()> {
    if io::stdin().is_terminal() {
        run_repl(session)
    } else {
        run_piped(session)?;
        Ok(())
    }
}

fn run_repl(session: &mut Session) -> RlResult<()> {
    let mut rl = DefaultEditor::new()?;

    // Try to load history
    let history_path = dirs_home().map(|h| h.join(".bigcalc_history"));
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    // Show banner only if BIGCALC_BANNER is set
    if std::env::var("BIGCALC_BANNER").is_ok() {
        println!("bigcalc {} - arbitrary-precision integer calculator", VERSION);
        println!("  Type '/exit' or Ctrl-D to quit, '/help' for usage");
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match execute_line(session, trimmed) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit) => break,
                    Err(e) => println!("{}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C abandons the current line only
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D - exit
                println!("{}", GOODBYE);
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// Non-interactive input: no prompt, no history
fn run_piped(session: &mut Session) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line?;
        match execute_line(session, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
