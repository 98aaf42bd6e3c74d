use tracing::info;

use crate::driver::driver::Driver;
use crate::driver::element::Timeouts;
use crate::error::ScenarioError;
use crate::pages::demo_login::DemoLoginPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::scenario::expect::{expect_contains, expect_false, expect_true};
use crate::scenario::scenario_model::{Scenario, Suite};

pub const VALID_EMAIL: &str = "validuser@example.com";
pub const VALID_PASSWORD: &str = "validPassword123";
pub const INVALID_PASSWORD: &str = "invalidPassword";

/// Every registered suite, in run order.
pub fn all_suites() -> Vec<Suite> {
    vec![login_suite(), home_suite(), demo_login_suite()]
}

pub fn find_suite(name: &str) -> Option<Suite> {
    all_suites()
        .into_iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

// ============================================================================
// login: credential-validation app
// ============================================================================

pub fn login_suite() -> Suite {
    Suite {
        name: "login",
        description: "Login feature of the credential-validation app",
        setup: open_login,
        scenarios: vec![
            Scenario {
                name: "LOGIN_001 - User can log in with valid email and password and land on the home screen",
                body: login_with_valid_credentials,
            },
            Scenario {
                name: "LOGIN_002 - User sees an error when logging in with an invalid password",
                body: login_with_invalid_password,
            },
            Scenario {
                name: "LOGIN_003 - Login button is disabled until both fields are filled",
                body: login_button_requires_both_fields,
            },
            Scenario {
                name: "LOGIN_004 - Login button disables again when a filled field is cleared",
                body: login_button_disables_on_clear,
            },
        ],
    }
}

fn open_login(driver: &dyn Driver, timeouts: &Timeouts) -> Result<(), ScenarioError> {
    LoginPage::new(driver, *timeouts).open()?;
    Ok(())
}

fn login_with_valid_credentials(
    driver: &dyn Driver,
    timeouts: &Timeouts,
) -> Result<(), ScenarioError> {
    let page = LoginPage::new(driver, *timeouts);
    page.enter_email(VALID_EMAIL)?;
    page.enter_password(VALID_PASSWORD)?;
    page.tap_login()?;

    let welcome = page.welcome_message()?;
    expect_contains(&welcome, "Welcome", "welcome message")
}

fn login_with_invalid_password(
    driver: &dyn Driver,
    timeouts: &Timeouts,
) -> Result<(), ScenarioError> {
    let page = LoginPage::new(driver, *timeouts);
    page.enter_email(VALID_EMAIL)?;
    page.enter_password(INVALID_PASSWORD)?;
    page.tap_login()?;

    let error = page.error_message()?;
    expect_contains(&error, "error", "login error message")?;
    expect_true(page.is_on_login_screen()?, "login screen still shown")
}

fn login_button_requires_both_fields(
    driver: &dyn Driver,
    timeouts: &Timeouts,
) -> Result<(), ScenarioError> {
    let page = LoginPage::new(driver, *timeouts);
    expect_false(page.is_login_button_enabled()?, "login button with both fields blank")?;

    page.enter_email(VALID_EMAIL)?;
    expect_false(page.is_login_button_enabled()?, "login button with only email")?;

    page.enter_email("")?;
    page.enter_password("somePassword")?;
    expect_false(page.is_login_button_enabled()?, "login button with only password")?;

    page.enter_email(VALID_EMAIL)?;
    expect_true(page.is_login_button_enabled()?, "login button with both fields")
}

fn login_button_disables_on_clear(
    driver: &dyn Driver,
    timeouts: &Timeouts,
) -> Result<(), ScenarioError> {
    let page = LoginPage::new(driver, *timeouts);
    page.enter_password(VALID_PASSWORD)?;
    expect_false(page.is_login_button_enabled()?, "login button with only password")?;

    page.enter_email(VALID_EMAIL)?;
    expect_true(page.is_login_button_enabled()?, "login button with both fields")?;

    page.enter_password("")?;
    expect_false(page.is_login_button_enabled()?, "login button after clearing password")
}

// ============================================================================
// home: native demo app
// ============================================================================

pub fn home_suite() -> Suite {
    Suite {
        name: "home",
        description: "Home screen of the native demo app",
        setup: open_home,
        scenarios: vec![
            Scenario {
                name: "HOME_001 - user want to look home screen",
                body: look_at_home,
            },
            Scenario {
                name: "HOME_002 - user want to click test button",
                body: click_test_button,
            },
            Scenario {
                name: "HOME_003 - user want to type \"apple\" in textbar",
                body: type_apple,
            },
            Scenario {
                name: "HOME_004 - user want to fill the form and submit",
                body: fill_text_bar_form,
            },
        ],
    }
}

fn open_home(driver: &dyn Driver, timeouts: &Timeouts) -> Result<(), ScenarioError> {
    HomePage::new(driver, *timeouts).navigate_to_home();
    Ok(())
}

fn look_at_home(_driver: &dyn Driver, _timeouts: &Timeouts) -> Result<(), ScenarioError> {
    info!("home screen displayed");
    Ok(())
}

fn click_test_button(driver: &dyn Driver, timeouts: &Timeouts) -> Result<(), ScenarioError> {
    HomePage::new(driver, *timeouts).click_test_button()?;
    Ok(())
}

fn type_apple(driver: &dyn Driver, timeouts: &Timeouts) -> Result<(), ScenarioError> {
    HomePage::new(driver, *timeouts).type_in_text_bar("apple")?;
    Ok(())
}

fn fill_text_bar_form(driver: &dyn Driver, timeouts: &Timeouts) -> Result<(), ScenarioError> {
    // The demo home screen has a single text bar standing in for both fields
    let page = HomePage::new(driver, *timeouts);
    page.type_in_text_bar("test@example.com")?;
    page.type_in_text_bar("password123")?;
    Ok(())
}

// ============================================================================
// demo-login: native demo app
// ============================================================================

pub fn demo_login_suite() -> Suite {
    Suite {
        name: "demo-login",
        description: "Login form of the native demo app",
        setup: open_demo_login,
        scenarios: vec![Scenario {
            name: "User should be able to see the title on login screen",
            body: submit_demo_login,
        }],
    }
}

fn open_demo_login(driver: &dyn Driver, timeouts: &Timeouts) -> Result<(), ScenarioError> {
    DemoLoginPage::new(driver, *timeouts).navigate_to_login()?;
    Ok(())
}

fn submit_demo_login(driver: &dyn Driver, timeouts: &Timeouts) -> Result<(), ScenarioError> {
    let page = DemoLoginPage::new(driver, *timeouts);
    page.enter_email("test@example.com")?;
    page.enter_password("password123")?;
    page.click_login_button()?;
    Ok(())
}
