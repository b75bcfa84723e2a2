//! Labelled console output on stderr.
//!
//! Labels are bold and coloured when stderr is a terminal and plain text
//! otherwise, so CI logs stay readable. The bump flow talks to a `Reporter`
//! so tests can capture what would have been printed.

use console::{Color, Term, style};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

fn stderr_is_tty() -> bool {
    Term::stderr().is_term()
}

fn format_label(label: &str, color: Color, is_tty: bool) -> String {
    if is_tty {
        style(label).bold().fg(color).to_string()
    } else {
        label.to_string()
    }
}

fn write_labeled(
    label: &str,
    color: Color,
    msg: &str,
    w: &mut dyn Write,
    is_tty: bool,
) -> io::Result<()> {
    let label = format_label(label, color, is_tty);
    if msg.is_empty() {
        writeln!(w, "{label}")
    } else {
        writeln!(w, "{label} {msg}")
    }
}

pub fn action_to_with_tty(w: &mut dyn Write, label: &str, msg: &str, is_tty: bool) {
    let _ = write_labeled(label, Color::Cyan, msg, w, is_tty);
}

pub fn success_to_with_tty(w: &mut dyn Write, label: &str, msg: &str, is_tty: bool) {
    let _ = write_labeled(label, Color::Green, msg, w, is_tty);
}

pub fn warn_to_with_tty(w: &mut dyn Write, msg: &str, is_tty: bool) {
    let _ = write_labeled("Warning", Color::Yellow, msg, w, is_tty);
}

pub fn fail_to_with_tty(w: &mut dyn Write, label: &str, msg: &str, is_tty: bool) {
    let _ = write_labeled(label, Color::Red, msg, w, is_tty);
}

pub fn note_to_with_tty(w: &mut dyn Write, msg: &str, is_tty: bool) {
    let _ = write_labeled("Note", Color::Yellow, msg, w, is_tty);
}

pub fn detail_to_with_tty(w: &mut dyn Write, msg: &str, is_tty: bool) {
    let line = if is_tty {
        style(format!("  {msg}")).dim().to_string()
    } else {
        format!("  {msg}")
    };
    let _ = writeln!(w, "{line}");
}

pub fn action(label: &str, msg: &str) {
    action_to_with_tty(&mut io::stderr(), label, msg, stderr_is_tty());
}

pub fn success(label: &str, msg: &str) {
    success_to_with_tty(&mut io::stderr(), label, msg, stderr_is_tty());
}

pub fn warn(msg: &str) {
    warn_to_with_tty(&mut io::stderr(), msg, stderr_is_tty());
}

pub fn fail(label: &str, msg: &str) {
    fail_to_with_tty(&mut io::stderr(), label, msg, stderr_is_tty());
}

pub fn note(msg: &str) {
    note_to_with_tty(&mut io::stderr(), msg, stderr_is_tty());
}

/// Prints only when `--verbose` was given.
pub fn detail(msg: &str) {
    if is_verbose() {
        detail_to_with_tty(&mut io::stderr(), msg, stderr_is_tty());
    }
}

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

// ---------------------------------------------------------------------------
// Reporter seam
// ---------------------------------------------------------------------------

/// Sink for the progress lines of a bump run.
pub trait Reporter {
    fn action(&mut self, label: &str, msg: &str);
    fn success(&mut self, label: &str, msg: &str);
    fn warn(&mut self, msg: &str);
    fn detail(&mut self, msg: &str);
}

/// Writes to stderr through the module-level helpers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn action(&mut self, label: &str, msg: &str) {
        action(label, msg);
    }

    fn success(&mut self, label: &str, msg: &str) {
        success(label, msg);
    }

    fn warn(&mut self, msg: &str) {
        warn(msg);
    }

    fn detail(&mut self, msg: &str) {
        detail(msg);
    }
}

/// Collects plain-text lines in memory.
#[derive(Debug, Default)]
pub struct BufferReporter {
    pub lines: Vec<String>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    fn push(&mut self, write: impl FnOnce(&mut Vec<u8>)) {
        let mut buf = Vec::new();
        write(&mut buf);
        let text = String::from_utf8_lossy(&buf);
        self.lines.push(text.trim_end_matches('\n').to_string());
    }
}

impl Reporter for BufferReporter {
    fn action(&mut self, label: &str, msg: &str) {
        self.push(|w| action_to_with_tty(w, label, msg, false));
    }

    fn success(&mut self, label: &str, msg: &str) {
        self.push(|w| success_to_with_tty(w, label, msg, false));
    }

    fn warn(&mut self, msg: &str) {
        self.push(|w| warn_to_with_tty(w, msg, false));
    }

    fn detail(&mut self, msg: &str) {
        self.push(|w| detail_to_with_tty(w, msg, false));
    }
}
