//! Builder: assemble a computer part by part with a chainable builder,
//! then describe only the parts that were actually set.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

#[derive(Debug, Default)]
struct Computer {
    cpu: Option<String>,
    ram: Option<String>,
    ssd: Option<String>,
    motherboard: Option<String>,
    case: Option<String>,
}

impl Computer {
    fn builder() -> ComputerBuilder {
        ComputerBuilder::default()
    }

    /// One line per configured part, in fixed part order.
    fn describe(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let parts = [
            ("CPU", &self.cpu),
            ("RAM", &self.ram),
            ("SSD", &self.ssd),
            ("Motherboard", &self.motherboard),
            ("Case", &self.case),
        ];
        for (label, value) in parts {
            if let Some(value) = value {
                out.line(&format!("{label}: {value}"))?;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct ComputerBuilder {
    computer: Computer,
}

impl ComputerBuilder {
    fn cpu(mut self, name: &str) -> Self {
        self.computer.cpu = Some(name.to_string());
        self
    }

    fn ram(mut self, name: &str) -> Self {
        self.computer.ram = Some(name.to_string());
        self
    }

    fn ssd(mut self, name: &str) -> Self {
        self.computer.ssd = Some(name.to_string());
        self
    }

    fn motherboard(mut self, name: &str) -> Self {
        self.computer.motherboard = Some(name.to_string());
        self
    }

    fn case(mut self, name: &str) -> Self {
        self.computer.case = Some(name.to_string());
        self
    }

    fn build(self) -> Computer {
        self.computer
    }
}

pub struct BuilderDemo;

impl Demo for BuilderDemo {
    fn name(&self) -> &str {
        "builder"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let computer = Computer::builder()
            .cpu("Intel i7")
            .ram("8 GB")
            .ssd("500 GB")
            .motherboard("Gigabyte")
            .case("RGB Case")
            .build();
        computer.describe(out)
    }
}
