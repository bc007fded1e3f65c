//! Observer: a news publisher pushes each published item to every
//! subscribed observer, in subscription order.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

trait NewsObserver {
    /// React to a news item; the reaction is the line to report.
    fn update(&self, news: &str) -> String;
}

struct LabeledObserver {
    label: String,
}

impl NewsObserver for LabeledObserver {
    fn update(&self, news: &str) -> String {
        format!("{} - News: {news}", self.label)
    }
}

#[derive(Default)]
struct NewsPublisher {
    observers: Vec<Box<dyn NewsObserver>>,
}

impl NewsPublisher {
    fn add_observer(&mut self, observer: impl NewsObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn publish(&self, news: &str, out: &mut dyn Reporter) -> Result<(), DemoError> {
        for observer in &self.observers {
            out.line(&observer.update(news))?;
        }
        Ok(())
    }
}

pub struct ObserverDemo;

impl Demo for ObserverDemo {
    fn name(&self) -> &str {
        "observer"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let mut publisher = NewsPublisher::default();
        publisher.add_observer(LabeledObserver {
            label: "observer 1".to_string(),
        });
        publisher.add_observer(LabeledObserver {
            label: "observer 2".to_string(),
        });

        publisher.publish("Hello News", out)?;
        publisher.publish("Rust released", out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    #[test]
    fn every_observer_sees_every_item_in_subscription_order() {
        let mut out = MemoryReporter::new();
        ObserverDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "observer 1 - News: Hello News",
                "observer 2 - News: Hello News",
                "observer 1 - News: Rust released",
                "observer 2 - News: Rust released"
            ]
        );
    }

    #[test]
    fn publisher_with_no_observers_reports_nothing() {
        let publisher = NewsPublisher::default();
        let mut out = MemoryReporter::new();
        publisher.publish("unheard", &mut out).unwrap();
        assert!(out.lines().is_empty());
    }
}
