//! Prototype: copy an existing record instead of constructing from
//! scratch; the copy tags its fields so the provenance is visible.

use std::fmt;

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

trait Prototype {
    /// Produce a new instance derived from `self`.
    fn spawn_clone(&self) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DataRecord {
    primary: String,
    secondary: String,
}

impl DataRecord {
    fn new(primary: &str, secondary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }
}

impl Prototype for DataRecord {
    fn spawn_clone(&self) -> Self {
        Self {
            primary: format!("{} cloned", self.primary),
            secondary: format!("{} cloned", self.secondary),
        }
    }
}

impl fmt::Display for DataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DataRecord(primary={}, secondary={})",
            self.primary, self.secondary
        )
    }
}

pub struct PrototypeDemo;

impl Demo for PrototypeDemo {
    fn name(&self) -> &str {
        "prototype"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let prototype = DataRecord::new("This is data 1", "This is data 2");
        let copy = prototype.spawn_clone();
        out.line(&format!("Prototype: {prototype}"))?;
        out.line(&format!("Prototype clone: {copy}"))
    }
}
