//! Centralized warning and prompt messages for CLI output.

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow)
pub fn warn(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

/// Print an error message to stderr (red)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print clipboard copied confirmation
pub fn clipboard_copied() {
    println!("*** -COPIED TO CLIPBOARD- ***");
}

/// Print clipboard unavailable warning before falling back to the terminal
pub fn clipboard_unavailable() {
    warn("Clipboard unavailable, printing to terminal instead");
}

/// Print clipboard error
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}
