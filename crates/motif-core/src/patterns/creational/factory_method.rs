//! Factory method: a dispatch station's template announces readiness; the
//! concrete station decides which transport actually does the delivery.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeliveryKind {
    Shipping,
    Trucking,
}

trait Transport {
    fn delivery(&self) -> &'static str;
}

struct TruckTransport;
struct ShipTransport;

impl Transport for TruckTransport {
    fn delivery(&self) -> &'static str {
        "Truck delivery"
    }
}

impl Transport for ShipTransport {
    fn delivery(&self) -> &'static str {
        "Ship delivery"
    }
}

/// The factory-method seam: `transport` is the overridable step, `ready`
/// the fixed template that uses whatever the station produced.
trait DispatchStation {
    fn transport(&self) -> Box<dyn Transport>;

    fn ready(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line(&format!("Ready to deliver by: {}", self.transport().delivery()))
    }
}

struct ShipStation;
struct TruckStation;

impl DispatchStation for ShipStation {
    fn transport(&self) -> Box<dyn Transport> {
        Box::new(ShipTransport)
    }
}

impl DispatchStation for TruckStation {
    fn transport(&self) -> Box<dyn Transport> {
        Box::new(TruckTransport)
    }
}

fn station_for(kind: DeliveryKind) -> Box<dyn DispatchStation> {
    match kind {
        DeliveryKind::Shipping => Box::new(ShipStation),
        DeliveryKind::Trucking => Box::new(TruckStation),
    }
}

pub struct FactoryMethodDemo;

impl Demo for FactoryMethodDemo {
    fn name(&self) -> &str {
        "factory-method"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        station_for(DeliveryKind::Shipping).ready(out)?;
        station_for(DeliveryKind::Trucking).ready(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    #[test]
    fn each_station_picks_its_own_transport() {
        let mut out = MemoryReporter::new();
        station_for(DeliveryKind::Shipping).ready(&mut out).unwrap();
        station_for(DeliveryKind::Trucking).ready(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "Ready to deliver by: Ship delivery",
                "Ready to deliver by: Truck delivery"
            ]
        );
    }

    #[test]
    fn demo_dispatches_from_both_stations() {
        let mut out = MemoryReporter::new();
        FactoryMethodDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "Ready to deliver by: Ship delivery",
                "Ready to deliver by: Truck delivery"
            ]
        );
    }
}
