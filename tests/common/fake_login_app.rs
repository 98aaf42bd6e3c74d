use std::cell::{Cell, RefCell};
use std::time::Duration;

use mobile_e2e::driver::driver::{Driver, ElementId};
use mobile_e2e::driver::selector::Selector;
use mobile_e2e::error::{DriverError, DriverResult};
use mobile_e2e::pages::login;
use mobile_e2e::scenario::suites::{VALID_EMAIL, VALID_PASSWORD};

pub const ERROR_TEXT: &str = "Login error: invalid credentials";
pub const WELCOME_TEXT: &str = "Welcome back, validuser!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
}

#[derive(Debug)]
struct AppState {
    screen: Screen,
    email: String,
    password: String,
    error_shown: bool,
}

impl AppState {
    fn fresh() -> Self {
        AppState {
            screen: Screen::Login,
            email: String::new(),
            password: String::new(),
            error_shown: false,
        }
    }
}

/// In-process stand-in for the credential-validation app.
///
/// The login button is enabled only while both fields hold text; tapping
/// it with the valid pair moves to the home screen, anything else shows
/// the error label.
pub struct FakeLoginApp {
    state: RefCell<AppState>,
    lookups: Cell<usize>,
    launches: Cell<usize>,
    pauses: RefCell<Vec<Duration>>,
}

impl FakeLoginApp {
    pub fn new() -> Self {
        FakeLoginApp {
            state: RefCell::new(AppState::fresh()),
            lookups: Cell::new(0),
            launches: Cell::new(0),
            pauses: RefCell::new(Vec::new()),
        }
    }

    pub fn screen(&self) -> Screen {
        self.state.borrow().screen
    }

    pub fn email(&self) -> String {
        self.state.borrow().email.clone()
    }

    pub fn password(&self) -> String {
        self.state.borrow().password.clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    pub fn launches(&self) -> usize {
        self.launches.get()
    }

    fn is_present(&self, selector: &str) -> bool {
        let state = self.state.borrow();
        match state.screen {
            Screen::Login => match selector {
                login::INPUT_EMAIL | login::INPUT_PASSWORD | login::BUTTON_LOGIN => true,
                login::ERROR_MESSAGE => state.error_shown,
                _ => false,
            },
            Screen::Home => selector == login::WELCOME_MESSAGE,
        }
    }

    fn present(&self, element: &ElementId) -> DriverResult<()> {
        if self.is_present(&element.0) {
            Ok(())
        } else {
            Err(DriverError::Command {
                command: "element".into(),
                error: "stale element reference".into(),
                message: format!("{} is no longer attached", element.0),
            })
        }
    }
}

impl Driver for FakeLoginApp {
    fn find_element(&self, selector: &Selector) -> DriverResult<ElementId> {
        self.lookups.set(self.lookups.get() + 1);
        if self.is_present(selector.as_str()) {
            Ok(ElementId(selector.as_str().to_string()))
        } else {
            Err(DriverError::NoSuchElement(selector.to_string()))
        }
    }

    fn click(&self, element: &ElementId) -> DriverResult<()> {
        self.present(element)?;
        let mut state = self.state.borrow_mut();
        if element.0 == login::BUTTON_LOGIN {
            if state.email == VALID_EMAIL && state.password == VALID_PASSWORD {
                state.screen = Screen::Home;
                state.error_shown = false;
            } else {
                state.error_shown = true;
            }
        }
        Ok(())
    }

    fn clear(&self, element: &ElementId) -> DriverResult<()> {
        self.present(element)?;
        let mut state = self.state.borrow_mut();
        match element.0.as_str() {
            login::INPUT_EMAIL => state.email.clear(),
            login::INPUT_PASSWORD => state.password.clear(),
            _ => {}
        }
        Ok(())
    }

    fn send_keys(&self, element: &ElementId, text: &str) -> DriverResult<()> {
        self.present(element)?;
        let mut state = self.state.borrow_mut();
        match element.0.as_str() {
            login::INPUT_EMAIL => state.email.push_str(text),
            login::INPUT_PASSWORD => state.password.push_str(text),
            _ => {}
        }
        Ok(())
    }

    fn text(&self, element: &ElementId) -> DriverResult<String> {
        self.present(element)?;
        let state = self.state.borrow();
        Ok(match element.0.as_str() {
            login::INPUT_EMAIL => state.email.clone(),
            login::INPUT_PASSWORD => state.password.clone(),
            login::ERROR_MESSAGE => ERROR_TEXT.to_string(),
            login::WELCOME_MESSAGE => WELCOME_TEXT.to_string(),
            _ => String::new(),
        })
    }

    fn is_displayed(&self, element: &ElementId) -> DriverResult<bool> {
        self.present(element)?;
        Ok(true)
    }

    fn is_enabled(&self, element: &ElementId) -> DriverResult<bool> {
        self.present(element)?;
        let state = self.state.borrow();
        if element.0 == login::BUTTON_LOGIN {
            Ok(!state.email.is_empty() && !state.password.is_empty())
        } else {
            Ok(true)
        }
    }

    fn page_source(&self) -> DriverResult<String> {
        Ok(format!("<hierarchy screen=\"{:?}\"/>", self.screen()))
    }

    fn launch_app(&self) -> DriverResult<()> {
        self.launches.set(self.launches.get() + 1);
        *self.state.borrow_mut() = AppState::fresh();
        Ok(())
    }

    fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}
