//! Catalogue runner -- sequences categories and demo units in fixed order.
//!
//! The driver is deliberately linear: print a category banner, run each of
//! the category's demos behind a header line, move on. No error from one
//! unit is contained; the first failure aborts the whole run and
//! propagates to the caller, which is expected to halt.

use thiserror::Error;

use crate::demo::{Category, DemoRegistry};
use crate::error::DemoError;
use crate::report::Reporter;

/// Errors from running the catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("no demo named {0:?} in the catalogue")]
    UnknownDemo(String),

    #[error(transparent)]
    Demo(#[from] DemoError),
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueSummary {
    /// Number of demo units that ran to completion.
    pub demos_run: usize,
}

/// The banner line printed once per category.
pub fn banner(category: Category) -> String {
    format!("========== {} Patterns ==========", category.label())
}

/// The header line printed once per demo unit.
pub fn header(name: &str) -> String {
    format!("===== {name}")
}

/// Run every demo in the registry, category by category, in the fixed
/// order `{creational, structural, behavioral}`.
pub fn run_catalogue(
    registry: &DemoRegistry,
    out: &mut dyn Reporter,
) -> Result<CatalogueSummary, CatalogueError> {
    let mut demos_run = 0;
    for category in Category::ALL {
        demos_run += run_category(registry, category, out)?.demos_run;
    }
    tracing::info!(demos_run, "catalogue run complete");
    Ok(CatalogueSummary { demos_run })
}

/// Run one category: banner first, then each demo in declared order.
pub fn run_category(
    registry: &DemoRegistry,
    category: Category,
    out: &mut dyn Reporter,
) -> Result<CatalogueSummary, CatalogueError> {
    out.blank()?;
    out.line(&banner(category))?;

    let mut demos_run = 0;
    for demo in registry.demos(category) {
        tracing::debug!(category = %category, demo = demo.name(), "running demo");
        out.blank()?;
        out.line(&header(demo.name()))?;
        demo.run(out)?;
        demos_run += 1;
    }
    Ok(CatalogueSummary { demos_run })
}

/// Run a single demo looked up by name.
pub fn run_demo(
    registry: &DemoRegistry,
    name: &str,
    out: &mut dyn Reporter,
) -> Result<(), CatalogueError> {
    let (category, demo) = registry
        .find(name)
        .ok_or_else(|| CatalogueError::UnknownDemo(name.to_string()))?;
    tracing::debug!(category = %category, demo = demo.name(), "running demo");
    out.blank()?;
    out.line(&header(demo.name()))?;
    demo.run(out)?;
    Ok(())
}
