//! The `Demo` trait -- the uniform invocation contract for pattern
//! examples.
//!
//! Each demo is a closed illustration of one design pattern. The trait is
//! intentionally object-safe so units can be stored as `Box<dyn Demo>` in
//! the [`super::DemoRegistry`].

use crate::error::DemoError;
use crate::report::Reporter;

/// A single, self-contained pattern demonstration.
///
/// Implementors own whatever small cast of cooperating types the pattern
/// needs; nothing is shared between units, and a unit must be runnable in
/// isolation without state left over from another unit.
pub trait Demo {
    /// Short name, unique within the unit's category (e.g. "flyweight").
    fn name(&self) -> &str;

    /// Exercise the pattern once, narrating through `out`.
    ///
    /// The only observable effect is a deterministic sequence of lines
    /// written to the reporter. Invalid input inside the demo's closed
    /// domain surfaces as a [`DemoError`] value; no local recovery is
    /// attempted.
    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError>;
}

// Compile-time assertion: Demo must be object-safe.
// If this line compiles, the trait can be used as `dyn Demo`.
const _: () = {
    fn _assert_object_safe(_: &dyn Demo) {}
};
