//! Adapter: a special tank with an incompatible interface fights alongside
//! regular units once wrapped in an adapter.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

trait Enemy {
    fn attack(&self) -> String;
}

struct Tank;

impl Enemy for Tank {
    fn attack(&self) -> String {
        "Tank attack".to_string()
    }
}

/// The incompatible type: no `Enemy` implementation, different method.
struct SpecialTank;

impl SpecialTank {
    fn mega_attack(&self) -> String {
        "Special tank mega attack".to_string()
    }
}

struct SpecialTankAdapter {
    inner: SpecialTank,
}

impl Enemy for SpecialTankAdapter {
    fn attack(&self) -> String {
        self.inner.mega_attack()
    }
}

pub struct AdapterDemo;

impl Demo for AdapterDemo {
    fn name(&self) -> &str {
        "adapter"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let units: Vec<Box<dyn Enemy>> = vec![
            Box::new(Tank),
            Box::new(SpecialTankAdapter { inner: SpecialTank }),
        ];
        for unit in &units {
            out.line(&unit.attack())?;
        }
        Ok(())
    }
}
