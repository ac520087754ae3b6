//! User-facing message formatting and stderr logging.

use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn error_message(msg: impl AsRef<str>) -> String {
    format!("docmap: {}", msg.as_ref())
}

pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

/// The INFO line for `msg`, or None when verbose output is off.
fn info_line(msg: &str) -> Option<String> {
    VERBOSE
        .load(Ordering::Relaxed)
        .then(|| format!("INFO: {}", msg))
}

pub fn info(msg: impl AsRef<str>) {
    if let Some(line) = info_line(msg.as_ref()) {
        eprintln!("{}", line);
    }
}

pub fn warn(msg: impl AsRef<str>) {
    eprintln!("WARN: {}", msg.as_ref());
}
