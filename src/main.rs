//! bigcalc - arbitrary-precision integer calculator
//!
//! Usage:
//!   bigcalc              Start interactive calculator
//!   bigcalc -c "line"    Execute a single line
//!   bigcalc script.calc  Execute a script file

mod cli;
mod rcfile;
mod repl;
mod terminal;

use bigcalc::{Fallback, Session};
use cli::{execute_command, execute_script, parse_args, print_help, print_version};
use rcfile::load_bigcalcrc;
use std::env;
use std::process::ExitCode;

fn init_logging(trace: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if trace {
        builder.filter_module("bigcalc", log::LevelFilter::Trace);
    }
    builder.init();
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);

    if cli.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if cli.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    init_logging(cli.trace);

    let fallback = if cli.strict {
        Fallback::STRICT
    } else {
        Fallback::LENIENT
    };
    let mut session = Session::with_fallback(fallback);

    if !cli.norc {
        load_bigcalcrc(&mut session);
    }

    if let Some(line) = cli.command {
        return execute_command(&mut session, &line);
    }

    if let Some(script) = cli.script {
        return execute_script(&mut session, &script);
    }

    match repl::run(&mut session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("REPL error: {}", e);
            ExitCode::FAILURE
        }
    }
}
