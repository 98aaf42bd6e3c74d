use std::fmt;
use std::time::Duration;

use crate::driver::element::Timeouts;
use crate::pages::demo_login;

/// Screens the crawl knows how to reach on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlTarget {
    Login,
    Forms,
    Signup,
    Swipe,
    TextInput,
    /// Whatever is on screen after a short pause
    Other,
}

impl CrawlTarget {
    /// Case-insensitive match on the requested page name.
    pub fn parse(page_name: &str) -> Self {
        match page_name.trim().to_lowercase().as_str() {
            "login" => CrawlTarget::Login,
            "forms" => CrawlTarget::Forms,
            "signup" => CrawlTarget::Signup,
            "swipe" => CrawlTarget::Swipe,
            "text" | "textinput" => CrawlTarget::TextInput,
            _ => CrawlTarget::Other,
        }
    }

    /// The hardcoded tap-and-wait sequence that leads to this screen.
    pub fn plan(self, timeouts: &Timeouts) -> Vec<CrawlStep> {
        use CrawlStep::{Pause, Tap, Verify};
        let secs = |s: u64| Pause(Duration::from_secs(s));
        let tap = |selector, timeout| Tap { selector, timeout };
        let verify = |selector, timeout| Verify { selector, timeout };
        match self {
            CrawlTarget::Login => vec![
                secs(3),
                tap(demo_login::NAV_LOGIN, timeouts.launch),
                secs(3),
                verify(demo_login::INPUT_EMAIL, timeouts.element),
            ],
            CrawlTarget::Forms => vec![secs(2), tap("~Forms", timeouts.navigation), secs(2)],
            CrawlTarget::Signup => vec![
                secs(3),
                tap(demo_login::NAV_LOGIN, timeouts.launch),
                secs(2),
                tap(demo_login::BUTTON_SIGN_UP, timeouts.navigation),
                secs(2),
            ],
            CrawlTarget::Swipe => vec![secs(2), tap("~Swipe", timeouts.navigation), secs(2)],
            CrawlTarget::TextInput => vec![
                secs(2),
                tap("~Text Button", timeouts.navigation),
                secs(2),
            ],
            CrawlTarget::Other => vec![secs(3)],
        }
    }
}

impl fmt::Display for CrawlTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CrawlTarget::Login => "login",
            CrawlTarget::Forms => "forms",
            CrawlTarget::Signup => "signup",
            CrawlTarget::Swipe => "swipe",
            CrawlTarget::TextInput => "text input",
            CrawlTarget::Other => "current screen",
        };
        f.write_str(name)
    }
}

/// One best-effort navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlStep {
    Pause(Duration),
    /// Wait for the control to show, then tap it
    Tap {
        selector: &'static str,
        timeout: Duration,
    },
    /// Wait for the control to show; confirms we reached the screen
    Verify {
        selector: &'static str,
        timeout: Duration,
    },
}
