use std::fmt;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::driver::driver::{Driver, ElementId};
use crate::driver::selector::Selector;
use crate::error::{DriverError, DriverResult};

/// Fixed wait windows shared by page objects and the crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Quick probes ("are we already on this screen?")
    pub short: Duration,
    /// Element readiness before an interaction
    pub element: Duration,
    /// Navigation controls after a screen change
    pub navigation: Duration,
    /// First control after the app launches
    pub launch: Duration,
    pub poll_interval: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            short: Duration::from_millis(2_000),
            element: Duration::from_millis(5_000),
            navigation: Duration::from_millis(10_000),
            launch: Duration::from_millis(15_000),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl Timeouts {
    /// Every window set to `window`, polled at a tenth of it.
    pub fn uniform(window: Duration) -> Self {
        Self {
            short: window,
            element: window,
            navigation: window,
            launch: window,
            poll_interval: (window / 10).max(Duration::from_millis(1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitCondition {
    Displayed,
    Enabled,
}

impl fmt::Display for WaitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitCondition::Displayed => f.write_str("displayed"),
            WaitCondition::Enabled => f.write_str("enabled"),
        }
    }
}

/// A lazily-resolved element reference.
///
/// Holds only the selector; each call below runs `find element` again.
pub struct Element<'a> {
    driver: &'a dyn Driver,
    selector: Selector,
}

impl<'a> Element<'a> {
    pub fn new(driver: &'a dyn Driver, selector: impl Into<Selector>) -> Self {
        Element {
            driver,
            selector: selector.into(),
        }
    }

    fn resolve(&self) -> DriverResult<ElementId> {
        self.driver.find_element(&self.selector)
    }

    /// Whether the element exists and is shown. A missing or detached
    /// element reads as `false`.
    pub fn is_displayed(&self) -> DriverResult<bool> {
        match self.probe(WaitCondition::Displayed) {
            Err(e) if e.is_retryable() => Ok(false),
            other => other,
        }
    }

    pub fn is_enabled(&self) -> DriverResult<bool> {
        let id = self.resolve()?;
        self.driver.is_enabled(&id)
    }

    pub fn text(&self) -> DriverResult<String> {
        let id = self.resolve()?;
        self.driver.text(&id)
    }

    pub fn click(&self) -> DriverResult<()> {
        let id = self.resolve()?;
        self.driver.click(&id)
    }

    /// Replace the field's content. An empty value leaves the field cleared.
    pub fn set_value(&self, value: &str) -> DriverResult<()> {
        let id = self.resolve()?;
        self.driver.clear(&id)?;
        if !value.is_empty() {
            self.driver.send_keys(&id, value)?;
        }
        Ok(())
    }

    pub fn wait_for_displayed(&self, timeout: Duration, poll: Duration) -> DriverResult<()> {
        self.wait_until(WaitCondition::Displayed, timeout, poll)
    }

    pub fn wait_for_enabled(&self, timeout: Duration, poll: Duration) -> DriverResult<()> {
        self.wait_until(WaitCondition::Enabled, timeout, poll)
    }

    fn probe(&self, condition: WaitCondition) -> DriverResult<bool> {
        let id = self.resolve()?;
        match condition {
            WaitCondition::Displayed => self.driver.is_displayed(&id),
            WaitCondition::Enabled => self.driver.is_enabled(&id),
        }
    }

    fn wait_until(
        &self,
        condition: WaitCondition,
        timeout: Duration,
        poll: Duration,
    ) -> DriverResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.probe(condition) {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(e) if e.is_retryable() => {}
                Err(e) => return Err(e),
            }

            let now = Instant::now();
            if now >= deadline {
                return Err(DriverError::Timeout {
                    selector: self.selector.to_string(),
                    condition,
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            trace!(selector = %self.selector, %condition, "not ready, polling again");
            std::thread::sleep(poll.min(deadline - now));
        }
    }
}
