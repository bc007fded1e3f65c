//! The pattern catalogue -- 23 demo units across the three groups.
//!
//! Each submodule file is one isolated demonstration: a small cast of
//! cooperating types private to the unit, plus a `*Demo` type implementing
//! [`Demo`](crate::demo::Demo).

pub mod behavioral;
pub mod creational;
pub mod structural;

use crate::demo::{DemoRegistry, RegistryError};

/// Build the full built-in catalogue in its declared run order.
pub fn builtin_registry() -> Result<DemoRegistry, RegistryError> {
    let mut registry = DemoRegistry::new();
    creational::register(&mut registry)?;
    structural::register(&mut registry)?;
    behavioral::register(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::Category;

    #[test]
    fn builtin_registry_holds_the_whole_catalogue() {
        let registry = builtin_registry().unwrap();
        assert_eq!(registry.demos(Category::Creational).len(), 5);
        assert_eq!(registry.demos(Category::Structural).len(), 7);
        assert_eq!(registry.demos(Category::Behavioral).len(), 11);
        assert_eq!(registry.len(), 23);
    }

    #[test]
    fn builtin_names_are_unique_within_each_category() {
        // register() would have rejected duplicates, so building at all
        // proves the invariant; spot-check a couple of lookups too.
        let registry = builtin_registry().unwrap();
        assert!(registry.find("flyweight").is_some());
        assert!(registry.find("chain-of-responsibility").is_some());
        assert!(registry.find("not-a-pattern").is_none());
    }
}
