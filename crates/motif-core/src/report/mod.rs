//! Console reporting -- the sink every demo narrates to.
//!
//! The console is the system's only user-visible output channel, so it is
//! treated as an external collaborator behind an object-safe trait. The
//! runner hands each demo a `&mut dyn Reporter`; production code uses
//! [`ConsoleReporter`] (stdout), tests use [`MemoryReporter`].

use std::io::{self, Write};

use crate::error::DemoError;

/// An ordered sink of human-readable text lines.
///
/// Lines must be emitted in the order they are produced; no other
/// buffering contract is required.
pub trait Reporter {
    /// Write one line of narration.
    fn line(&mut self, text: &str) -> Result<(), DemoError>;

    /// Write an empty spacer line.
    fn blank(&mut self) -> Result<(), DemoError> {
        self.line("")
    }
}

// Compile-time assertion: Reporter must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn Reporter) {}
};

/// Writes lines to stdout as they are produced.
pub struct ConsoleReporter {
    out: io::Stdout,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn line(&mut self, text: &str) -> Result<(), DemoError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }
}

/// Captures lines in memory so tests can assert on exact output.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines captured so far, in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the reporter and return the captured lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Count of captured lines that equal `text` exactly.
    pub fn count_of(&self, text: &str) -> usize {
        self.lines.iter().filter(|l| *l == text).count()
    }
}

impl Reporter for MemoryReporter {
    fn line(&mut self, text: &str) -> Result<(), DemoError> {
        self.lines.push(text.to_string());
        Ok(())
    }
}
