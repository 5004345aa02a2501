use bigcalc::Session;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Get home directory
pub(crate) fn dirs_home() -> Option<PathBuf> {
    env::var_os("HOME").map(PathBuf::from)
}

/// Load and execute ~/.bigcalcrc if it exists
pub(crate) fn load_bigcalcrc(session: &mut Session) {
    let rc_path = match dirs_home() {
        Some(home) => home.join(".bigcalcrc"),
        None => return,
    };

    let content = match fs::read_to_string(&rc_path) {
        Ok(c) => c,
        Err(_) => return,
    };

    load_rc_content(session, &content, "~/.bigcalcrc");
}

/// Execute rc content line by line. Replies are discarded; failures become
/// warnings on stderr and loading continues.
pub(crate) fn load_rc_content(session: &mut Session, content: &str, source_name: &str) {
    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // Skip empty lines and comments
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Err(e) = session.execute(trimmed) {
            eprintln!("Warning: {} line {}: {}", source_name, line_num + 1, e);
        }
    }
    log::debug!("{} loaded, {} variables", source_name, session.vars().len());
}
