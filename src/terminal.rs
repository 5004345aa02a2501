use bigcalc::{CalcError, Reply, Session};

/// Whether the front end should keep reading lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

pub(crate) const GOODBYE: &str = "Bye!";

/// Execute a single line and print its reply. Errors are returned to the
/// caller, which decides where they are reported.
pub(crate) fn execute_line(session: &mut Session, input: &str) -> Result<Flow, CalcError> {
    match session.execute(input)? {
        Reply::Nothing => {}
        Reply::Value(value) => println!("{}", value),
        Reply::Message(text) => println!("{}", text),
        Reply::Exit => {
            println!("{}", GOODBYE);
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}
