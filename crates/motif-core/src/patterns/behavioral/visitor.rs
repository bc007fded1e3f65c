//! Visitor: the element set is a closed tagged enum, and `accept` matches
//! the tag against the visitor's operation table -- double dispatch
//! without inheritance.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weapon {
    GaussGun,
    Pistol,
}

/// One operation over the closed weapon set.
trait WeaponVisitor {
    fn visit_gauss_gun(&self) -> String;
    fn visit_pistol(&self) -> String;
}

impl Weapon {
    /// Dispatch on the tag, routing to the visitor's matching operation.
    fn accept(&self, visitor: &dyn WeaponVisitor) -> String {
        match self {
            Weapon::GaussGun => visitor.visit_gauss_gun(),
            Weapon::Pistol => visitor.visit_pistol(),
        }
    }
}

struct SoundVisitor;

impl WeaponVisitor for SoundVisitor {
    fn visit_gauss_gun(&self) -> String {
        "Bzzz".to_string()
    }

    fn visit_pistol(&self) -> String {
        "Peo".to_string()
    }
}

pub struct VisitorDemo;

impl Demo for VisitorDemo {
    fn name(&self) -> &str {
        "visitor"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let visitor = SoundVisitor;

        out.line("Gauss gun sound:")?;
        out.line(&Weapon::GaussGun.accept(&visitor))?;
        out.line("Pistol sound:")?;
        out.line(&Weapon::Pistol.accept(&visitor))
    }
}
