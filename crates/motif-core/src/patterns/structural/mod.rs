//! Structural patterns: ways of composing objects.

mod adapter;
mod bridge;
mod composite;
mod decorator;
mod facade;
mod flyweight;
mod proxy;

pub use adapter::AdapterDemo;
pub use bridge::BridgeDemo;
pub use composite::CompositeDemo;
pub use decorator::DecoratorDemo;
pub use facade::FacadeDemo;
pub use flyweight::FlyweightDemo;
pub use proxy::ProxyDemo;

use crate::demo::{Category, DemoRegistry, RegistryError};

/// Register the structural demos in their declared run order.
pub fn register(registry: &mut DemoRegistry) -> Result<(), RegistryError> {
    registry.register(Category::Structural, AdapterDemo)?;
    registry.register(Category::Structural, BridgeDemo)?;
    registry.register(Category::Structural, CompositeDemo)?;
    registry.register(Category::Structural, DecoratorDemo)?;
    registry.register(Category::Structural, FacadeDemo)?;
    registry.register(Category::Structural, FlyweightDemo)?;
    registry.register(Category::Structural, ProxyDemo)?;
    Ok(())
}
