//! motif-core -- the demonstration harness and pattern catalogue.
//!
//! A flat catalogue of named, independently runnable design-pattern
//! examples ("demo units"), grouped into the three classic categories
//! (creational, structural, behavioral) and driven in fixed order by the
//! catalogue runner. Demos never print directly: every line of narration
//! goes through the [`report::Reporter`] seam so callers decide where
//! output lands.

pub mod catalogue;
pub mod demo;
pub mod error;
pub mod patterns;
pub mod report;

pub use catalogue::{CatalogueError, CatalogueSummary, run_catalogue, run_category, run_demo};
pub use demo::{Category, Demo, DemoRegistry, RegistryError};
pub use error::DemoError;
pub use report::{ConsoleReporter, MemoryReporter, Reporter};
