//! Proxy: the expensive real service is not constructed until the first
//! call arrives; after that every call delegates to the one instance.

use std::cell::OnceCell;

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

struct RealService;

impl RealService {
    fn connect(out: &mut dyn Reporter) -> Result<Self, DemoError> {
        out.line("init RealService")?;
        Ok(Self)
    }

    fn some_operation(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        out.line("do some HARD work")
    }
}

struct ServiceProxy {
    real: OnceCell<RealService>,
}

impl ServiceProxy {
    fn new(out: &mut dyn Reporter) -> Result<Self, DemoError> {
        out.line("init ProxyService")?;
        Ok(Self {
            real: OnceCell::new(),
        })
    }

    /// Whether the real service has been constructed yet.
    fn is_initialized(&self) -> bool {
        self.real.get().is_some()
    }

    fn some_operation(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        if self.real.get().is_none() {
            // First use: construct the real service exactly once.
            let service = RealService::connect(out)?;
            let _ = self.real.set(service);
        }
        if let Some(service) = self.real.get() {
            service.some_operation(out)?;
        }
        Ok(())
    }
}

pub struct ProxyDemo;

impl Demo for ProxyDemo {
    fn name(&self) -> &str {
        "proxy"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let proxy = ServiceProxy::new(out)?;
        out.line("wait some time")?;
        proxy.some_operation(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    #[test]
    fn real_service_is_not_built_until_first_use() {
        let mut out = MemoryReporter::new();
        let proxy = ServiceProxy::new(&mut out).unwrap();
        assert!(!proxy.is_initialized());
        assert_eq!(out.count_of("init RealService"), 0);

        proxy.some_operation(&mut out).unwrap();
        assert!(proxy.is_initialized());
        assert_eq!(out.count_of("init RealService"), 1);
    }

    #[test]
    fn repeated_calls_reuse_the_one_instance() {
        let mut out = MemoryReporter::new();
        let proxy = ServiceProxy::new(&mut out).unwrap();
        proxy.some_operation(&mut out).unwrap();
        proxy.some_operation(&mut out).unwrap();
        proxy.some_operation(&mut out).unwrap();

        assert_eq!(out.count_of("init RealService"), 1);
        assert_eq!(out.count_of("do some HARD work"), 3);
    }

    #[test]
    fn demo_narrates_init_wait_then_work() {
        let mut out = MemoryReporter::new();
        ProxyDemo.run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "init ProxyService",
                "wait some time",
                "init RealService",
                "do some HARD work"
            ]
        );
    }
}
