//! Command: file operations reified as objects and executed by a caller
//! that knows nothing about what each command does. A fixed pacing delay
//! between steps exists purely so console observers can follow along.

use std::thread;
use std::time::Duration;

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

/// Pause between command executions when running in the catalogue.
const DEMO_PACING: Duration = Duration::from_secs(1);

trait Command {
    fn execute(&self, out: &mut dyn Reporter) -> Result<(), DemoError>;
}

struct OpenFile {
    file: String,
}

struct SaveFile {
    file: String,
}

impl Command for OpenFile {
    fn execute(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line(&format!("Open: {}", self.file))
    }
}

impl Command for SaveFile {
    fn execute(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line(&format!("Save: {}", self.file))
    }
}

pub struct CommandDemo {
    pacing: Duration,
}

impl CommandDemo {
    pub fn new() -> Self {
        Self {
            pacing: DEMO_PACING,
        }
    }

    /// Override the pacing delay; tests use `Duration::ZERO`.
    pub fn with_pacing(pacing: Duration) -> Self {
        Self { pacing }
    }
}

impl Default for CommandDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for CommandDemo {
    fn name(&self) -> &str {
        "command"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(OpenFile {
                file: "diary.txt".to_string(),
            }),
            Box::new(SaveFile {
                file: "diary.txt".to_string(),
            }),
        ];
        for command in &commands {
            command.execute(out)?;
            thread::sleep(self.pacing);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    #[test]
    fn caller_executes_commands_without_knowing_them() {
        let commands: Vec<Box<dyn Command>> = vec![
            Box::new(SaveFile {
                file: "notes.md".to_string(),
            }),
            Box::new(OpenFile {
                file: "notes.md".to_string(),
            }),
        ];
        let mut out = MemoryReporter::new();
        for command in &commands {
            command.execute(&mut out).unwrap();
        }
        assert_eq!(out.lines(), ["Save: notes.md", "Open: notes.md"]);
    }

    #[test]
    fn demo_opens_then_saves_the_diary() {
        let mut out = MemoryReporter::new();
        CommandDemo::with_pacing(Duration::ZERO)
            .run(&mut out)
            .unwrap();
        assert_eq!(out.lines(), ["Open: diary.txt", "Save: diary.txt"]);
    }
}
