//! Chain of responsibility: handlers form an owned linked chain. A handler
//! with a message shows it and stops; one without forwards to the next
//! handler, and the chain ends silently when there is no next.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

struct Handler {
    message: Option<String>,
    next: Option<Box<Handler>>,
}

impl Handler {
    fn new(message: Option<&str>) -> Self {
        Self {
            message: message.map(str::to_string),
            next: None,
        }
    }

    /// Append `handler` at the end of the chain starting at `self`.
    fn chain(&mut self, handler: Handler) {
        match &mut self.next {
            Some(next) => next.chain(handler),
            None => self.next = Some(Box::new(handler)),
        }
    }

    /// The handler `n` links down the chain, if the chain is that long.
    fn nth(&self, n: usize) -> Option<&Handler> {
        if n == 0 {
            return Some(self);
        }
        self.next.as_deref()?.nth(n - 1)
    }

    fn show_message(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        match &self.message {
            Some(message) => out.line(message),
            None => {
                out.line("No message to show, go to next item")?;
                if let Some(next) = &self.next {
                    next.show_message(out)?;
                }
                Ok(())
            }
        }
    }
}

pub struct ChainDemo;

impl Demo for ChainDemo {
    fn name(&self) -> &str {
        "chain-of-responsibility"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        // Dialog -> OK -> (unnamed) -> Cancel; the request enters at the
        // unnamed middle button, which has nothing to show itself.
        let mut dialog = Handler::new(Some("Dialog"));
        dialog.chain(Handler::new(Some("OK")));
        dialog.chain(Handler::new(None));
        dialog.chain(Handler::new(Some("Cancel")));

        if let Some(middle) = dialog.nth(2) {
            middle.show_message(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    #[test]
    fn handler_with_message_stops_the_chain() {
        let mut first = Handler::new(Some("mine"));
        first.chain(Handler::new(Some("never shown")));

        let mut out = MemoryReporter::new();
        first.show_message(&mut out).unwrap();
        assert_eq!(out.lines(), ["mine"]);
    }

    #[test]
    fn empty_handler_forwards_to_the_next() {
        let mut first = Handler::new(None);
        first.chain(Handler::new(Some("downstream")));

        let mut out = MemoryReporter::new();
        first.show_message(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            ["No message to show, go to next item", "downstream"]
        );
    }

    #[test]
    fn chain_end_without_message_terminates_silently() {
        let lonely = Handler::new(None);
        let mut out = MemoryReporter::new();
        lonely.show_message(&mut out).unwrap();
        // Only the notice line, no message line and no error.
        assert_eq!(out.lines(), ["No message to show, go to next item"]);
    }

    #[test]
    fn nth_walks_the_chain() {
        let mut first = Handler::new(Some("a"));
        first.chain(Handler::new(Some("b")));
        first.chain(Handler::new(Some("c")));

        assert_eq!(first.nth(2).and_then(|h| h.message.as_deref()), Some("c"));
        assert!(first.nth(3).is_none());
    }

    #[test]
    fn demo_enters_at_the_messageless_middle() {
        let mut out = MemoryReporter::new();
        ChainDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            ["No message to show, go to next item", "Cancel"]
        );
    }
}
