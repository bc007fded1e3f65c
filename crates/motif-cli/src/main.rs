//! motif -- console catalogue of classic design pattern demonstrations.
//!
//! Invoked with no arguments it runs the entire catalogue top to bottom
//! and exits 0; the first demo failure propagates out and exits non-zero.

use anyhow::Context;
use clap::{Parser, Subcommand};

use motif_core::catalogue::{run_catalogue, run_category, run_demo};
use motif_core::patterns::builtin_registry;
use motif_core::{Category, ConsoleReporter, DemoRegistry, Reporter};

#[derive(Parser)]
#[command(name = "motif", about = "Design pattern demonstration catalogue")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the catalogue (all categories, or one with --category)
    Run {
        /// Only run this category: creational, structural, or behavioral
        #[arg(long)]
        category: Option<String>,
    },
    /// Run a single demo by name (e.g. flyweight)
    Demo {
        /// Demo name as shown by `motif list`
        name: String,
    },
    /// List the registered demos, grouped by category
    List,
}

/// Execute `motif run`: the whole catalogue, or a single category.
fn cmd_run(registry: &DemoRegistry, category: Option<&str>) -> anyhow::Result<()> {
    let mut out = ConsoleReporter::new();
    match category {
        Some(name) => {
            let category: Category = name.parse()?;
            let summary = run_category(registry, category, &mut out)?;
            tracing::debug!(category = %category, demos_run = summary.demos_run, "category complete");
        }
        None => {
            run_catalogue(registry, &mut out)?;
        }
    }
    Ok(())
}

/// Execute `motif list`: demo names grouped by category, in run order.
fn cmd_list(registry: &DemoRegistry, out: &mut dyn Reporter) -> anyhow::Result<()> {
    for category in Category::ALL {
        out.line(&format!("{category}:"))?;
        for demo in registry.demos(category) {
            out.line(&format!("  {}", demo.name()))?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let registry = builtin_registry().context("failed to build the demo catalogue")?;

    match cli.command {
        // The bare invocation runs everything, same as `motif run`.
        None | Some(Commands::Run { category: None }) => {
            cmd_run(&registry, None)?;
        }
        Some(Commands::Run { category }) => {
            cmd_run(&registry, category.as_deref())?;
        }
        Some(Commands::Demo { name }) => {
            let mut out = ConsoleReporter::new();
            run_demo(&registry, &name, &mut out)?;
        }
        Some(Commands::List) => {
            let mut out = ConsoleReporter::new();
            cmd_list(&registry, &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use motif_core::MemoryReporter;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["motif"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_accepts_a_category_filter() {
        let cli = Cli::try_parse_from(["motif", "run", "--category", "structural"]).unwrap();
        match cli.command {
            Some(Commands::Run { category }) => assert_eq!(category.as_deref(), Some("structural")),
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn list_is_grouped_by_category_in_run_order() {
        let registry = builtin_registry().unwrap();
        let mut out = MemoryReporter::new();
        cmd_list(&registry, &mut out).unwrap();
        let lines = out.into_lines();

        assert_eq!(lines.first().map(String::as_str), Some("creational:"));
        let structural_at = lines.iter().position(|l| l == "structural:").unwrap();
        let behavioral_at = lines.iter().position(|l| l == "behavioral:").unwrap();
        assert!(structural_at < behavioral_at);
        assert!(lines.contains(&"  flyweight".to_string()));

        // 3 category lines + 23 demo lines.
        assert_eq!(lines.len(), 26);
    }

    #[test]
    fn unknown_category_fails_before_running_anything() {
        let registry = builtin_registry().unwrap();
        let err = cmd_run(&registry, Some("ornamental")).unwrap_err();
        assert!(err.to_string().contains("ornamental"));
    }
}
