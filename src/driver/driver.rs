use std::time::Duration;

use crate::driver::selector::Selector;
use crate::error::DriverResult;

/// Opaque id of one `find element` resolution. Valid only until the device
/// rebuilds its UI tree, so callers resolve again for every action.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(pub String);

/// The automation commands the page objects and the crawl rely on.
///
/// Every method queries the device; nothing is memoized.
pub trait Driver {
    fn find_element(&self, selector: &Selector) -> DriverResult<ElementId>;

    fn click(&self, element: &ElementId) -> DriverResult<()>;

    fn clear(&self, element: &ElementId) -> DriverResult<()>;

    fn send_keys(&self, element: &ElementId, text: &str) -> DriverResult<()>;

    fn text(&self, element: &ElementId) -> DriverResult<String>;

    fn is_displayed(&self, element: &ElementId) -> DriverResult<bool>;

    fn is_enabled(&self, element: &ElementId) -> DriverResult<bool>;

    /// Current UI hierarchy as the server serializes it (XML for native apps).
    fn page_source(&self) -> DriverResult<String>;

    /// Bring the application under test to the foreground from a fresh start.
    fn launch_app(&self) -> DriverResult<()>;

    /// Fixed pause between navigation steps.
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
