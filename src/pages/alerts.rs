use std::time::Duration;

use tracing::debug;

use crate::driver::driver::Driver;
use crate::driver::element::Element;

const OK_BUTTONS: [&str; 2] = [r#"android=new UiSelector().text("OK")"#, "~OK"];

/// Tap away any "OK" popup left on screen. Nothing here can fail the caller.
pub fn dismiss_alerts(driver: &dyn Driver) {
    for selector in OK_BUTTONS {
        let button = Element::new(driver, selector);
        match button.is_displayed() {
            Ok(true) => {
                if let Err(e) = button.click() {
                    debug!("could not dismiss alert via {}: {}", selector, e);
                    continue;
                }
                driver.pause(Duration::from_millis(1_000));
            }
            Ok(false) => {}
            Err(e) => debug!("no alert via {}: {}", selector, e),
        }
    }
}
