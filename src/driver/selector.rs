use std::fmt;

use serde::{Deserialize, Serialize};

/// A WebdriverIO-style selector string, kept verbatim.
///
/// The string is only split into a W3C locator strategy and value when it
/// goes on the wire:
///
/// | prefix                  | strategy                 |
/// |-------------------------|--------------------------|
/// | `~name`                 | `accessibility id`       |
/// | `android=...`           | `-android uiautomator`   |
/// | `ios=...`               | `-ios predicate string`  |
/// | `-ios class chain:...`  | `-ios class chain`       |
/// | `id=...`                | `id`                     |
/// | `/...` or `(...`        | `xpath`                  |
/// | anything else           | `css selector`           |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

/// Strategy and value as sent in a `find element` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locator<'a> {
    pub using: &'static str,
    pub value: &'a str,
}

impl Selector {
    pub fn new(raw: impl Into<String>) -> Self {
        Selector(raw.into())
    }

    pub fn accessibility_id(name: &str) -> Self {
        Selector(format!("~{}", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn locator(&self) -> Locator<'_> {
        let raw = self.0.as_str();
        let (using, value) = if let Some(name) = raw.strip_prefix('~') {
            ("accessibility id", name)
        } else if let Some(query) = raw.strip_prefix("android=") {
            ("-android uiautomator", query)
        } else if let Some(predicate) = raw.strip_prefix("ios=") {
            ("-ios predicate string", predicate)
        } else if let Some(chain) = raw.strip_prefix("-ios class chain:") {
            ("-ios class chain", chain)
        } else if let Some(id) = raw.strip_prefix("id=") {
            ("id", id)
        } else if raw.starts_with('/') || raw.starts_with('(') {
            ("xpath", raw)
        } else {
            ("css selector", raw)
        };
        Locator { using, value }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Selector::new(raw)
    }
}
