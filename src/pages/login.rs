use crate::driver::driver::Driver;
use crate::driver::element::{Element, Timeouts};
use crate::error::DriverResult;

pub const INPUT_EMAIL: &str = "~login-email-input";
pub const INPUT_PASSWORD: &str = "~login-password-input";
pub const BUTTON_LOGIN: &str = "~login-button";
pub const ERROR_MESSAGE: &str = "~login-error-message";
pub const WELCOME_MESSAGE: &str = "~home-welcome-message";

/// Login screen of the credential-validation app, plus the welcome banner
/// it lands on after a successful login.
pub struct LoginPage<'a> {
    driver: &'a dyn Driver,
    timeouts: Timeouts,
}

impl<'a> LoginPage<'a> {
    pub fn new(driver: &'a dyn Driver, timeouts: Timeouts) -> Self {
        LoginPage { driver, timeouts }
    }

    pub fn input_email(&self) -> Element<'a> {
        Element::new(self.driver, INPUT_EMAIL)
    }

    pub fn input_password(&self) -> Element<'a> {
        Element::new(self.driver, INPUT_PASSWORD)
    }

    pub fn button_login(&self) -> Element<'a> {
        Element::new(self.driver, BUTTON_LOGIN)
    }

    pub fn error_text(&self) -> Element<'a> {
        Element::new(self.driver, ERROR_MESSAGE)
    }

    pub fn welcome_text(&self) -> Element<'a> {
        Element::new(self.driver, WELCOME_MESSAGE)
    }

    /// The app opens on the login screen, so launching it is enough.
    pub fn open(&self) -> DriverResult<()> {
        self.driver.launch_app()
    }

    pub fn enter_email(&self, email: &str) -> DriverResult<()> {
        let input = self.input_email();
        input.wait_for_displayed(self.timeouts.element, self.timeouts.poll_interval)?;
        input.set_value(email)
    }

    pub fn enter_password(&self, password: &str) -> DriverResult<()> {
        let input = self.input_password();
        input.wait_for_displayed(self.timeouts.element, self.timeouts.poll_interval)?;
        input.set_value(password)
    }

    pub fn tap_login(&self) -> DriverResult<()> {
        let button = self.button_login();
        button.wait_for_enabled(self.timeouts.element, self.timeouts.poll_interval)?;
        button.click()
    }

    pub fn is_login_button_enabled(&self) -> DriverResult<bool> {
        self.button_login().is_enabled()
    }

    pub fn error_message(&self) -> DriverResult<String> {
        let error = self.error_text();
        error.wait_for_displayed(self.timeouts.element, self.timeouts.poll_interval)?;
        error.text()
    }

    pub fn welcome_message(&self) -> DriverResult<String> {
        let welcome = self.welcome_text();
        welcome.wait_for_displayed(self.timeouts.element, self.timeouts.poll_interval)?;
        welcome.text()
    }

    pub fn is_welcome_message_displayed(&self) -> DriverResult<bool> {
        self.welcome_text().is_displayed()
    }

    pub fn is_on_login_screen(&self) -> DriverResult<bool> {
        self.input_email().is_displayed()
    }
}
