//! Bridge: controllers (the abstraction) vary independently of the
//! remote-controlled devices they drive (the implementation).

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

trait RemoteDevice {
    fn engine_start(&self) -> String;
    fn engine_stop(&self) -> String;
    fn set_power(&self, power: u8) -> String;
}

struct Helicopter;
struct Buggy;

impl RemoteDevice for Helicopter {
    fn engine_start(&self) -> String {
        "Helicopter engine start".to_string()
    }

    fn engine_stop(&self) -> String {
        "Helicopter engine stop".to_string()
    }

    fn set_power(&self, power: u8) -> String {
        format!("Helicopter set power {power}")
    }
}

impl RemoteDevice for Buggy {
    fn engine_start(&self) -> String {
        "Buggy engine start".to_string()
    }

    fn engine_stop(&self) -> String {
        "Buggy engine stop".to_string()
    }

    fn set_power(&self, power: u8) -> String {
        format!("Buggy set power {power}")
    }
}

struct Controller {
    device: Box<dyn RemoteDevice>,
}

impl Controller {
    fn new(device: impl RemoteDevice + 'static) -> Self {
        Self {
            device: Box::new(device),
        }
    }

    fn start(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line(&self.device.engine_start())
    }

    fn stop(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line(&self.device.engine_stop())
    }

    fn set_power(&self, power: u8, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line(&self.device.set_power(power))
    }
}

/// A refined abstraction: same device seam, one extra operation.
struct TurboController {
    controller: Controller,
}

impl TurboController {
    fn new(device: impl RemoteDevice + 'static) -> Self {
        Self {
            controller: Controller::new(device),
        }
    }

    fn start(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        self.controller.start(out)
    }

    fn turbo(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        self.controller.set_power(100, out)
    }
}

pub struct BridgeDemo;

impl Demo for BridgeDemo {
    fn name(&self) -> &str {
        "bridge"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let controller = Controller::new(Helicopter);
        controller.start(out)?;
        controller.set_power(90, out)?;
        controller.stop(out)?;

        let modified = TurboController::new(Buggy);
        modified.start(out)?;
        modified.turbo(out)
    }
}
