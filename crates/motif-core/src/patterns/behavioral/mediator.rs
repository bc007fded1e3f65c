//! Mediator: widgets never talk to each other directly; a dialog mediator
//! routes their events and owns the shared state (whether the checkbox
//! currently enables the OK button).

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidgetEvent {
    OkClicked,
    CheckboxToggled,
}

#[derive(Default)]
struct DialogMediator {
    checkbox_checked: bool,
}

impl DialogMediator {
    fn notify(&mut self, event: WidgetEvent, out: &mut dyn Reporter) -> Result<(), DemoError> {
        match event {
            WidgetEvent::OkClicked => {
                if self.checkbox_checked {
                    out.line("ButtonOk clicked")
                } else {
                    out.line("ButtonOk disabled, click ignored")
                }
            }
            WidgetEvent::CheckboxToggled => {
                let was = self.checkbox_checked;
                self.checkbox_checked = !was;
                out.line(&format!("CheckBox clicked: state {was} -> {}", !was))?;
                out.line(&format!("ButtonOk enabled: {}", self.checkbox_checked))
            }
        }
    }
}

struct OkButton;
struct CheckBox;

impl OkButton {
    fn click(&self, mediator: &mut DialogMediator, out: &mut dyn Reporter) -> Result<(), DemoError> {
        mediator.notify(WidgetEvent::OkClicked, out)
    }
}

impl CheckBox {
    fn click(&self, mediator: &mut DialogMediator, out: &mut dyn Reporter) -> Result<(), DemoError> {
        mediator.notify(WidgetEvent::CheckboxToggled, out)
    }
}

pub struct MediatorDemo;

impl Demo for MediatorDemo {
    fn name(&self) -> &str {
        "mediator"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let mut mediator = DialogMediator::default();
        let button = OkButton;
        let checkbox = CheckBox;

        button.click(&mut mediator, out)?;
        checkbox.click(&mut mediator, out)?;
        button.click(&mut mediator, out)
    }
}
