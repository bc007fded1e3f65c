//! Facade: one `boot` call hides the four subsystem steps a workstation
//! needs to start.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

struct Workstation;

impl Workstation {
    fn power_supply(&self) -> &'static str {
        "electricity supply"
    }

    fn spin_fans(&self) -> &'static str {
        "starting fans"
    }

    fn run_bios(&self) -> &'static str {
        "starting bios"
    }

    fn load_os(&self) -> &'static str {
        "loading os"
    }
}

struct WorkstationFacade {
    workstation: Workstation,
}

impl WorkstationFacade {
    fn boot(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line("-=launching pc=-")?;
        out.line(self.workstation.power_supply())?;
        out.line(self.workstation.spin_fans())?;
        out.line(self.workstation.run_bios())?;
        out.line(self.workstation.load_os())
    }
}

pub struct FacadeDemo;

impl Demo for FacadeDemo {
    fn name(&self) -> &str {
        "facade"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let facade = WorkstationFacade {
            workstation: Workstation,
        };
        facade.boot(out)
    }
}
