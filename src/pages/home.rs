use std::time::Duration;

use crate::driver::driver::Driver;
use crate::driver::element::{Element, Timeouts};
use crate::error::DriverResult;
use crate::pages::alerts::dismiss_alerts;

pub const TEST_BUTTON: &str = "~Test Button";
pub const TEXT_BAR: &str = "~Text Bar";

/// Home screen of the native demo app.
pub struct HomePage<'a> {
    driver: &'a dyn Driver,
    timeouts: Timeouts,
}

impl<'a> HomePage<'a> {
    pub fn new(driver: &'a dyn Driver, timeouts: Timeouts) -> Self {
        HomePage { driver, timeouts }
    }

    pub fn test_button(&self) -> Element<'a> {
        Element::new(self.driver, TEST_BUTTON)
    }

    pub fn text_bar(&self) -> Element<'a> {
        Element::new(self.driver, TEXT_BAR)
    }

    /// Give the app time to load, then clear popups. Never fails.
    pub fn navigate_to_home(&self) {
        self.driver.pause(Duration::from_millis(2_000));
        dismiss_alerts(self.driver);
    }

    pub fn click_test_button(&self) -> DriverResult<()> {
        let button = self.test_button();
        button.wait_for_displayed(self.timeouts.element, self.timeouts.poll_interval)?;
        button.click()
    }

    pub fn type_in_text_bar(&self, value: &str) -> DriverResult<()> {
        let input = self.text_bar();
        input.wait_for_displayed(self.timeouts.element, self.timeouts.poll_interval)?;
        input.set_value(value)
    }
}
