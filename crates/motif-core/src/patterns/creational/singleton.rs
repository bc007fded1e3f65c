//! Singleton: explicit process-wide state with one-time initialization on
//! first access, rather than a language built-in. Every access observes
//! the same instance for the lifetime of the process.

use std::sync::OnceLock;

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

/// The single shared instance, created lazily by [`instance`].
static INSTANCE: OnceLock<ServiceHandle> = OnceLock::new();

#[derive(Debug)]
struct ServiceHandle {
    label: &'static str,
}

/// Access the process-wide instance, creating it on first call.
///
/// The creation notice is written at most once per process; later calls
/// return the already-initialized instance silently.
fn instance(out: &mut dyn Reporter) -> Result<&'static ServiceHandle, DemoError> {
    if INSTANCE.get().is_none() {
        out.line("ServiceHandle created")?;
    }
    Ok(INSTANCE.get_or_init(|| ServiceHandle {
        label: "shared-service",
    }))
}

pub struct SingletonDemo;

impl Demo for SingletonDemo {
    fn name(&self) -> &str {
        "singleton"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let first = instance(out)?;
        let second = instance(out)?;
        out.line(&format!(
            "{}@{first:p} == {}@{second:p}",
            first.label, second.label
        ))?;
        out.line(&format!(
            "same instance: {}",
            std::ptr::eq(first, second)
        ))
    }
}
