//! Behavioral patterns: ways objects interact and distribute
//! responsibility.

mod chain;
mod command;
mod interpreter;
mod iterator;
mod mediator;
mod memento;
mod observer;
mod state;
mod strategy;
mod template_method;
mod visitor;

pub use chain::ChainDemo;
pub use command::CommandDemo;
pub use interpreter::InterpreterDemo;
pub use iterator::IteratorDemo;
pub use mediator::MediatorDemo;
pub use memento::MementoDemo;
pub use observer::ObserverDemo;
pub use state::StateDemo;
pub use strategy::StrategyDemo;
pub use template_method::TemplateMethodDemo;
pub use visitor::VisitorDemo;

use crate::demo::{Category, DemoRegistry, RegistryError};

/// Register the behavioral demos in their declared run order.
pub fn register(registry: &mut DemoRegistry) -> Result<(), RegistryError> {
    registry.register(Category::Behavioral, ChainDemo)?;
    registry.register(Category::Behavioral, CommandDemo::new())?;
    registry.register(Category::Behavioral, InterpreterDemo)?;
    registry.register(Category::Behavioral, IteratorDemo)?;
    registry.register(Category::Behavioral, MediatorDemo)?;
    registry.register(Category::Behavioral, MementoDemo)?;
    registry.register(Category::Behavioral, ObserverDemo)?;
    registry.register(Category::Behavioral, StateDemo)?;
    registry.register(Category::Behavioral, StrategyDemo)?;
    registry.register(Category::Behavioral, TemplateMethodDemo)?;
    registry.register(Category::Behavioral, VisitorDemo)?;
    Ok(())
}
