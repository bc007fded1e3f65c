//! Creational patterns: ways of constructing objects.

mod abstract_factory;
mod builder;
mod factory_method;
mod prototype;
mod singleton;

pub use abstract_factory::AbstractFactoryDemo;
pub use builder::BuilderDemo;
pub use factory_method::FactoryMethodDemo;
pub use prototype::PrototypeDemo;
pub use singleton::SingletonDemo;

use crate::demo::{Category, DemoRegistry, RegistryError};

/// Register the creational demos in their declared run order.
pub fn register(registry: &mut DemoRegistry) -> Result<(), RegistryError> {
    registry.register(Category::Creational, AbstractFactoryDemo)?;
    registry.register(Category::Creational, BuilderDemo)?;
    registry.register(Category::Creational, FactoryMethodDemo)?;
    registry.register(Category::Creational, PrototypeDemo)?;
    registry.register(Category::Creational, SingletonDemo)?;
    Ok(())
}
