use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use mobile_e2e::driver::driver::{Driver, ElementId};
use mobile_e2e::driver::selector::Selector;
use mobile_e2e::error::{DriverError, DriverResult};

#[derive(Debug, Clone)]
struct ScriptedElement {
    displayed: bool,
    enabled: bool,
    text: String,
    /// Lookups that report "no such element" before the element shows up
    hidden_for: usize,
    /// Every lookup fails with a non-retryable server error
    broken: bool,
    /// Found, but gone stale by the time it is queried
    detached: bool,
}

/// A driver whose screen is a fixed set of elements. Taps can reveal
/// further elements, which is enough to model tab navigation.
pub struct ScriptedDriver {
    elements: RefCell<HashMap<String, ScriptedElement>>,
    reveals: HashMap<String, Vec<String>>,
    taps: RefCell<Vec<String>>,
    typed: RefCell<Vec<(String, String)>>,
    clears: RefCell<Vec<String>>,
    pauses: RefCell<Vec<Duration>>,
    lookups: Cell<usize>,
    source: String,
}

impl ScriptedDriver {
    pub fn new(source: &str) -> Self {
        ScriptedDriver {
            elements: RefCell::new(HashMap::new()),
            reveals: HashMap::new(),
            taps: RefCell::new(Vec::new()),
            typed: RefCell::new(Vec::new()),
            clears: RefCell::new(Vec::new()),
            pauses: RefCell::new(Vec::new()),
            lookups: Cell::new(0),
            source: source.to_string(),
        }
    }

    pub fn with_element(self, selector: &str) -> Self {
        self.insert(selector, ScriptedElement {
            displayed: true,
            enabled: true,
            text: String::new(),
            hidden_for: 0,
            broken: false,
            detached: false,
        })
    }

    pub fn with_text(self, selector: &str, text: &str) -> Self {
        self.insert(selector, ScriptedElement {
            displayed: true,
            enabled: true,
            text: text.to_string(),
            hidden_for: 0,
            broken: false,
            detached: false,
        })
    }

    /// Present in the tree but not shown.
    pub fn with_invisible(self, selector: &str) -> Self {
        self.insert(selector, ScriptedElement {
            displayed: false,
            enabled: true,
            text: String::new(),
            hidden_for: 0,
            broken: false,
            detached: false,
        })
    }

    pub fn with_disabled(self, selector: &str) -> Self {
        self.insert(selector, ScriptedElement {
            displayed: true,
            enabled: false,
            text: String::new(),
            hidden_for: 0,
            broken: false,
            detached: false,
        })
    }

    /// Appears only after `lookups` failed lookups.
    pub fn with_late_element(self, selector: &str, lookups: usize) -> Self {
        self.insert(selector, ScriptedElement {
            displayed: true,
            enabled: true,
            text: String::new(),
            hidden_for: lookups,
            broken: false,
            detached: false,
        })
    }

    pub fn with_broken(self, selector: &str) -> Self {
        self.insert(selector, ScriptedElement {
            displayed: true,
            enabled: true,
            text: String::new(),
            hidden_for: 0,
            broken: true,
            detached: false,
        })
    }

    /// Resolves, then reports a stale reference on every follow-up command.
    pub fn with_detached(self, selector: &str) -> Self {
        self.insert(selector, ScriptedElement {
            displayed: true,
            enabled: true,
            text: String::new(),
            hidden_for: 0,
            broken: false,
            detached: true,
        })
    }

    /// Tapping `tapped` adds `revealed` to the screen.
    pub fn with_reveal(mut self, tapped: &str, revealed: &[&str]) -> Self {
        self.reveals.insert(
            tapped.to_string(),
            revealed.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    fn insert(self, selector: &str, element: ScriptedElement) -> Self {
        self.elements.borrow_mut().insert(selector.to_string(), element);
        self
    }

    pub fn set_enabled(&self, selector: &str, enabled: bool) {
        if let Some(el) = self.elements.borrow_mut().get_mut(selector) {
            el.enabled = enabled;
        }
    }

    pub fn taps(&self) -> Vec<String> {
        self.taps.borrow().clone()
    }

    pub fn typed(&self) -> Vec<(String, String)> {
        self.typed.borrow().clone()
    }

    pub fn clears(&self) -> Vec<String> {
        self.clears.borrow().clone()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.borrow().clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    fn with_el<T>(
        &self,
        id: &ElementId,
        f: impl FnOnce(&ScriptedElement) -> T,
    ) -> DriverResult<T> {
        let elements = self.elements.borrow();
        match elements.get(&id.0) {
            Some(el) if el.detached => Err(DriverError::Command {
                command: "element".into(),
                error: "stale element reference".into(),
                message: "element is not attached to the page document".into(),
            }),
            Some(el) => Ok(f(el)),
            None => Err(DriverError::NoSuchElement(id.0.clone())),
        }
    }
}

impl Driver for ScriptedDriver {
    fn find_element(&self, selector: &Selector) -> DriverResult<ElementId> {
        self.lookups.set(self.lookups.get() + 1);
        let mut elements = self.elements.borrow_mut();
        match elements.get_mut(selector.as_str()) {
            Some(el) if el.broken => Err(DriverError::Command {
                command: "find element".into(),
                error: "unknown error".into(),
                message: "instrumentation crashed".into(),
            }),
            Some(el) if el.hidden_for > 0 => {
                el.hidden_for -= 1;
                Err(DriverError::NoSuchElement(selector.to_string()))
            }
            Some(_) => Ok(ElementId(selector.as_str().to_string())),
            None => Err(DriverError::NoSuchElement(selector.to_string())),
        }
    }

    fn click(&self, element: &ElementId) -> DriverResult<()> {
        self.with_el(element, |_| ())?;
        self.taps.borrow_mut().push(element.0.clone());
        if let Some(revealed) = self.reveals.get(&element.0) {
            let mut elements = self.elements.borrow_mut();
            for selector in revealed {
                elements.insert(selector.clone(), ScriptedElement {
                    displayed: true,
                    enabled: true,
                    text: String::new(),
                    hidden_for: 0,
                    broken: false,
                    detached: false,
                });
            }
        }
        Ok(())
    }

    fn clear(&self, element: &ElementId) -> DriverResult<()> {
        self.with_el(element, |_| ())?;
        self.clears.borrow_mut().push(element.0.clone());
        Ok(())
    }

    fn send_keys(&self, element: &ElementId, text: &str) -> DriverResult<()> {
        self.with_el(element, |_| ())?;
        self.typed.borrow_mut().push((element.0.clone(), text.to_string()));
        Ok(())
    }

    fn text(&self, element: &ElementId) -> DriverResult<String> {
        self.with_el(element, |el| el.text.clone())
    }

    fn is_displayed(&self, element: &ElementId) -> DriverResult<bool> {
        self.with_el(element, |el| el.displayed)
    }

    fn is_enabled(&self, element: &ElementId) -> DriverResult<bool> {
        self.with_el(element, |el| el.enabled)
    }

    fn page_source(&self) -> DriverResult<String> {
        Ok(self.source.clone())
    }

    fn launch_app(&self) -> DriverResult<()> {
        Ok(())
    }

    fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}
