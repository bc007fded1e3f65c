//! Decorator: armor pieces stack as an owned linked list of layers, each
//! adding its own bonus on top of whatever the wrapped layers provide.
//! The total comes from full chain delegation, not a flat sum.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

struct ArmorLayer {
    piece: &'static str,
    bonus: u32,
    inner: Option<Box<ArmorLayer>>,
}

impl ArmorLayer {
    /// The base capability: armor with nothing wrapped beneath it.
    fn base(piece: &'static str, bonus: u32) -> Self {
        Self {
            piece,
            bonus,
            inner: None,
        }
    }

    /// Wrap `self` in a new outer layer.
    fn wrap(self, piece: &'static str, bonus: u32) -> Self {
        Self {
            piece,
            bonus,
            inner: Some(Box::new(self)),
        }
    }

    /// Narrate this layer, delegate down the chain, and add this layer's
    /// bonus to whatever the chain reported.
    fn total(&self, out: &mut dyn Reporter) -> Result<u32, DemoError> {
        out.line(&format!("{}: {}", self.bonus, self.piece))?;
        let below = match &self.inner {
            Some(inner) => inner.total(out)?,
            None => 0,
        };
        Ok(below + self.bonus)
    }
}

pub struct DecoratorDemo;

impl Demo for DecoratorDemo {
    fn name(&self) -> &str {
        "decorator"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let armor = ArmorLayer::base("chainmail", 50)
            .wrap("head", 30)
            .wrap("gloves", 5)
            .wrap("chest", 75);
        let total = armor.total(out)?;
        out.line(&format!("{total}: full"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    #[test]
    fn total_is_base_plus_every_layer() {
        let armor = ArmorLayer::base("chainmail", 50)
            .wrap("head", 30)
            .wrap("gloves", 5)
            .wrap("chest", 75);
        let mut out = MemoryReporter::new();
        assert_eq!(armor.total(&mut out).unwrap(), 160);
    }

    #[test]
    fn narration_runs_outermost_layer_first() {
        let armor = ArmorLayer::base("chainmail", 50).wrap("head", 30);
        let mut out = MemoryReporter::new();
        armor.total(&mut out).unwrap();
        assert_eq!(out.lines(), ["30: head", "50: chainmail"]);
    }

    #[test]
    fn bare_base_needs_no_wrapping() {
        let armor = ArmorLayer::base("chainmail", 50);
        let mut out = MemoryReporter::new();
        assert_eq!(armor.total(&mut out).unwrap(), 50);
    }

    #[test]
    fn demo_reports_the_fixed_stack_total() {
        let mut out = MemoryReporter::new();
        DecoratorDemo.run(&mut out).unwrap();
        assert_eq!(out.lines().last().map(String::as_str), Some("160: full"));
    }
}
