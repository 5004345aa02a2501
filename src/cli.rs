use bigcalc::Session;
use crate::terminal::{execute_line, Flow};
use std::fs;
use std::process::ExitCode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parsed command-line arguments
#[derive(Debug, Default, PartialEq)]
pub(crate) struct CliArgs {
    pub(crate) command: Option<String>,
    pub(crate) script: Option<String>,
    pub(crate) help: bool,
    pub(crate) version: bool,
    pub(crate) trace: bool,
    pub(crate) strict: bool,
    pub(crate) norc: bool,
}

/// Parse command-line arguments
pub(crate) fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1; // Skip program name
    while i < args.len() {
        match args[i].as_str() {
            "--trace" => {
                cli.trace = true;
            }
            "--strict" => {
                cli.strict = true;
            }
            "--norc" => {
                cli.norc = true;
            }
            "-c" => {
                // Everything after -c is the expression
                if i + 1 < args.len() {
                    cli.command = Some(args[i + 1..].join(" "));
                    break;
                }
            }
            "--help" | "-h" => {
                cli.help = true;
            }
            "--version" | "-V" => {
                cli.version = true;
            }
            path => {
                // Assume it's a script file if not a flag
                if !path.starts_with('-') {
                    cli.script = Some(path.to_string());
                }
            }
        }
        i += 1;
    }

    cli
}

pub(crate) fn print_help() {
    println!(
        r#"bigcalc {} - arbitrary-precision integer calculator

USAGE:
    bigcalc                 Start interactive calculator
    bigcalc -c <line>       Execute a single line
    bigcalc <script>        Execute a file line by line
    bigcalc --help          Show this help message
    bigcalc --version       Show version

OPTIONS:
    --strict                Division by zero and missing operands are errors
    --trace                 Log each evaluation step to stderr
    --norc                  Do not load ~/.bigcalcrc

STARTUP:
    ~/.bigcalcrc            Executed before the first line (if exists)
    BIGCALC_BANNER=1        Show startup banner
    RUST_LOG=debug          Log filter (env_logger syntax)

INPUT:
    1 + 2 * (3 - 4)         Evaluate an expression
    a = 42                  Assign a number
    b = a                   Copy a variable
    a                       Print a variable
    /help                   Short help
    /exit                   Quit
"#,
        VERSION
    );
}

pub(crate) fn print_version() {
    println!("bigcalc {}", VERSION);
}

/// Execute a single line passed with -c
pub(crate) fn execute_command(session: &mut Session, line: &str) -> ExitCode {
    match execute_line(session, line) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute a script file, stopping at the first failing line or /exit
pub(crate) fn execute_script(session: &mut Session, path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match execute_line(session, trimmed) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                eprintln!("Error at line {}: {}", line_num + 1, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
