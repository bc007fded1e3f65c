//! Template method: the trait's provided method fixes the three-step
//! skeleton; implementors fill in the steps.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

trait Routine {
    fn step_one(&self) -> String;
    fn step_two(&self) -> String;
    fn step_three(&self) -> String;

    /// The template: steps always run in this order.
    fn run_all(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line(&self.step_one())?;
        out.line(&self.step_two())?;
        out.line(&self.step_three())
    }
}

struct BootRoutine;

impl Routine for BootRoutine {
    fn step_one(&self) -> String {
        "Operation 1 provided by BootRoutine".to_string()
    }

    fn step_two(&self) -> String {
        "Operation 2 provided by BootRoutine".to_string()
    }

    fn step_three(&self) -> String {
        "Operation 3 provided by BootRoutine".to_string()
    }
}

pub struct TemplateMethodDemo;

impl Demo for TemplateMethodDemo {
    fn name(&self) -> &str {
        "template-method"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        BootRoutine.run_all(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    struct ReversedRoutine;

    impl Routine for ReversedRoutine {
        fn step_one(&self) -> String {
            "z".to_string()
        }

        fn step_two(&self) -> String {
            "y".to_string()
        }

        fn step_three(&self) -> String {
            "x".to_string()
        }
    }

    #[test]
    fn template_fixes_the_step_order() {
        let mut out = MemoryReporter::new();
        ReversedRoutine.run_all(&mut out).unwrap();
        assert_eq!(out.lines(), ["z", "y", "x"]);
    }

    #[test]
    fn demo_runs_the_boot_routine() {
        let mut out = MemoryReporter::new();
        TemplateMethodDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "Operation 1 provided by BootRoutine",
                "Operation 2 provided by BootRoutine",
                "Operation 3 provided by BootRoutine"
            ]
        );
    }
}
