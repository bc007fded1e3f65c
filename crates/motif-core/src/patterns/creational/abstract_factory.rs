//! Abstract factory: one factory entry point builds any member of a
//! closed family of vehicles behind a common trait.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

/// The closed set of vehicle kinds the factory knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VehicleKind {
    Van,
    Sedan,
    Suv,
    Truck,
}

trait Vehicle {
    fn ready(&self) -> String;
}

struct Van;
struct Sedan;
struct Suv;
struct Truck;

impl Vehicle for Van {
    fn ready(&self) -> String {
        "Van is ready".to_string()
    }
}

impl Vehicle for Sedan {
    fn ready(&self) -> String {
        "Sedan is ready".to_string()
    }
}

impl Vehicle for Suv {
    fn ready(&self) -> String {
        "Suv is ready".to_string()
    }
}

impl Vehicle for Truck {
    fn ready(&self) -> String {
        "Truck is ready".to_string()
    }
}

/// Build a vehicle for the requested kind. The kind set is closed, so
/// there is no failure path.
fn create_vehicle(kind: VehicleKind) -> Box<dyn Vehicle> {
    match kind {
        VehicleKind::Van => Box::new(Van),
        VehicleKind::Sedan => Box::new(Sedan),
        VehicleKind::Suv => Box::new(Suv),
        VehicleKind::Truck => Box::new(Truck),
    }
}

pub struct AbstractFactoryDemo;

impl Demo for AbstractFactoryDemo {
    fn name(&self) -> &str {
        "abstract-factory"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        for kind in [
            VehicleKind::Van,
            VehicleKind::Sedan,
            VehicleKind::Suv,
            VehicleKind::Truck,
        ] {
            out.line(&create_vehicle(kind).ready())?;
        }
        Ok(())
    }
}
