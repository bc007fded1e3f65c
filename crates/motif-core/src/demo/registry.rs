//! Demo registry -- ordered, validated collections of demo units.
//!
//! Units are grouped by [`Category`], and registration order within a
//! category is the run order. Registration validates the demo-unit
//! invariants up front: a non-empty name, unique within its category.

use std::fmt;

use thiserror::Error;

use super::{Category, Demo};

/// Errors raised when registering a demo unit.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("demo name must not be empty")]
    EmptyName,

    #[error("duplicate demo {name:?} in the {category} category")]
    DuplicateName { category: Category, name: String },
}

/// One category's ordered sequence of demo units.
struct CategoryGroup {
    category: Category,
    demos: Vec<Box<dyn Demo>>,
}

/// A collection of registered [`Demo`] units, grouped by category.
///
/// Constructed once at process start, consumed by the catalogue runner,
/// and discarded after the run.
pub struct DemoRegistry {
    groups: [CategoryGroup; 3],
}

fn slot(category: Category) -> usize {
    match category {
        Category::Creational => 0,
        Category::Structural => 1,
        Category::Behavioral => 2,
    }
}

impl DemoRegistry {
    /// Create an empty registry with a group per category.
    pub fn new() -> Self {
        let group = |category| CategoryGroup {
            category,
            demos: Vec::new(),
        };
        Self {
            groups: [
                group(Category::Creational),
                group(Category::Structural),
                group(Category::Behavioral),
            ],
        }
    }

    /// Register a demo at the end of its category's run order.
    pub fn register(
        &mut self,
        category: Category,
        demo: impl Demo + 'static,
    ) -> Result<(), RegistryError> {
        let name = demo.name().to_string();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        let group = &mut self.groups[slot(category)];
        if group.demos.iter().any(|d| d.name() == name) {
            return Err(RegistryError::DuplicateName { category, name });
        }
        group.demos.push(Box::new(demo));
        Ok(())
    }

    /// The demos registered under `category`, in run order.
    pub fn demos(&self, category: Category) -> &[Box<dyn Demo>] {
        &self.groups[slot(category)].demos
    }

    /// Look up a demo by name across all categories.
    ///
    /// Categories are searched in run order, so a name shared across
    /// categories resolves to the earliest category's unit.
    pub fn find(&self, name: &str) -> Option<(Category, &dyn Demo)> {
        self.groups.iter().find_map(|group| {
            group
                .demos
                .iter()
                .find(|d| d.name() == name)
                .map(|d| (group.category, d.as_ref()))
        })
    }

    /// Total number of registered demos across all categories.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.demos.len()).sum()
    }

    /// Return `true` if no demos are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DemoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DemoRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DemoRegistry");
        for group in &self.groups {
            s.field(
                group.category.label(),
                &group.demos.iter().map(|d| d.name()).collect::<Vec<_>>(),
            );
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DemoError;
    use crate::report::Reporter;

    struct FakeDemo {
        demo_name: String,
    }

    impl FakeDemo {
        fn new(name: &str) -> Self {
            Self {
                demo_name: name.to_string(),
            }
        }
    }

    impl Demo for FakeDemo {
        fn name(&self) -> &str {
            &self.demo_name
        }

        fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
            out.line(&self.demo_name)
        }
    }

    #[test]
    fn registry_starts_empty() {
        let registry = DemoRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        for category in Category::ALL {
            assert!(registry.demos(category).is_empty());
        }
    }

    #[test]
    fn register_and_find() {
        let mut registry = DemoRegistry::new();
        registry
            .register(Category::Structural, FakeDemo::new("alpha"))
            .unwrap();

        let (category, demo) = registry.find("alpha").unwrap();
        assert_eq!(category, Category::Structural);
        assert_eq!(demo.name(), "alpha");
        assert!(registry.find("nonexistent").is_none());
    }

    #[test]
    fn registration_order_is_run_order() {
        let mut registry = DemoRegistry::new();
        for name in ["first", "second", "third"] {
            registry
                .register(Category::Behavioral, FakeDemo::new(name))
                .unwrap();
        }
        let names: Vec<&str> = registry
            .demos(Category::Behavioral)
            .iter()
            .map(|d| d.name())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn duplicate_name_in_category_is_rejected() {
        let mut registry = DemoRegistry::new();
        registry
            .register(Category::Creational, FakeDemo::new("alpha"))
            .unwrap();
        let err = registry
            .register(Category::Creational, FakeDemo::new("alpha"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_name_is_allowed_across_categories() {
        let mut registry = DemoRegistry::new();
        registry
            .register(Category::Creational, FakeDemo::new("alpha"))
            .unwrap();
        registry
            .register(Category::Behavioral, FakeDemo::new("alpha"))
            .unwrap();
        assert_eq!(registry.len(), 2);

        // find resolves to the earliest category in run order
        let (category, _) = registry.find("alpha").unwrap();
        assert_eq!(category, Category::Creational);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut registry = DemoRegistry::new();
        let err = registry
            .register(Category::Structural, FakeDemo::new(""))
            .unwrap_err();
        assert!(matches!(err, RegistryError::EmptyName));
    }

    #[test]
    fn registry_debug_shows_names() {
        let mut registry = DemoRegistry::new();
        registry
            .register(Category::Structural, FakeDemo::new("bridge"))
            .unwrap();
        let debug = format!("{registry:?}");
        assert!(debug.contains("bridge"));
    }
}
