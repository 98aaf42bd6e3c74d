use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::driver::capabilities::DriverConfig;
use crate::driver::driver::{Driver, ElementId};
use crate::driver::selector::Selector;
use crate::error::{DriverError, DriverResult};

/// W3C key under which element references are returned.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Legacy JSONWP key, still sent by some Appium drivers.
const LEGACY_ELEMENT_KEY: &str = "ELEMENT";

const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

/// A live Appium session spoken to over the W3C WebDriver HTTP protocol.
///
/// One blocking client, one session id. Commands are JSON over HTTP; every
/// response is unwrapped from its `{"value": ...}` envelope.
pub struct AppiumSession {
    client: Client,
    base_url: String,
    session_id: String,
    credentials: Option<(String, String)>,
    app_id: Option<String>,
    active: bool,
}

impl AppiumSession {
    /// Open a new session with the configured capabilities.
    pub fn start(config: &DriverConfig) -> DriverResult<Self> {
        let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        let base_url = config.base_url();
        let credentials = config
            .credentials()
            .map(|(user, key)| (user.to_string(), key.to_string()));

        info!(
            server = %base_url,
            platform = %config.capabilities.platform_name,
            device = %config.capabilities.device_name,
            "starting automation session"
        );

        let body = new_session_body(config);
        let value = send(
            &client,
            credentials.as_ref(),
            Method::POST,
            &format!("{}/session", base_url),
            Some(&body),
            "new session",
        )?;

        let session_id = value["sessionId"]
            .as_str()
            .ok_or_else(|| DriverError::Protocol {
                command: "new session".into(),
                detail: "response carries no sessionId".into(),
            })?
            .to_string();

        info!(session = %session_id, "session started");

        Ok(AppiumSession {
            client,
            base_url,
            session_id,
            credentials,
            app_id: config.capabilities.app_id().map(str::to_string),
            active: true,
        })
    }

    fn command(
        &self,
        method: Method,
        suffix: &str,
        body: Option<&Value>,
        name: &str,
    ) -> DriverResult<Value> {
        let url = format!("{}/session/{}{}", self.base_url, self.session_id, suffix);
        // POST always carries an object, even when the command takes no payload
        let empty = json!({});
        let body = match (method == Method::POST, body) {
            (_, Some(b)) => Some(b),
            (true, None) => Some(&empty),
            (false, None) => None,
        };
        send(&self.client, self.credentials.as_ref(), method, &url, body, name)
    }

    fn element_command(
        &self,
        method: Method,
        element: &ElementId,
        action: &str,
        body: Option<&Value>,
    ) -> DriverResult<Value> {
        let suffix = format!("/element/{}/{}", element.0, action);
        self.command(method, &suffix, body, action)
    }

    /// End the session. Safe to call more than once.
    pub fn quit(&mut self) -> DriverResult<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.command(Method::DELETE, "", None, "delete session")?;
        info!(session = %self.session_id, "session closed");
        Ok(())
    }
}

impl Drop for AppiumSession {
    fn drop(&mut self) {
        if let Err(e) = self.quit() {
            warn!("failed to close session {}: {}", self.session_id, e);
        }
    }
}

impl Driver for AppiumSession {
    fn find_element(&self, selector: &Selector) -> DriverResult<ElementId> {
        let locator = selector.locator();
        let body = json!({ "using": locator.using, "value": locator.value });
        let value = match self.command(Method::POST, "/element", Some(&body), "find element") {
            Ok(v) => v,
            Err(DriverError::Command { error, .. }) if error == "no such element" => {
                return Err(DriverError::NoSuchElement(selector.to_string()));
            }
            Err(e) => return Err(e),
        };
        parse_element_id(&value).ok_or_else(|| DriverError::Protocol {
            command: "find element".into(),
            detail: format!("no element reference for '{}'", selector),
        })
    }

    fn click(&self, element: &ElementId) -> DriverResult<()> {
        self.element_command(Method::POST, element, "click", None)?;
        Ok(())
    }

    fn clear(&self, element: &ElementId) -> DriverResult<()> {
        self.element_command(Method::POST, element, "clear", None)?;
        Ok(())
    }

    fn send_keys(&self, element: &ElementId, text: &str) -> DriverResult<()> {
        let body = json!({ "text": text });
        self.element_command(Method::POST, element, "value", Some(&body))?;
        Ok(())
    }

    fn text(&self, element: &ElementId) -> DriverResult<String> {
        let value = self.element_command(Method::GET, element, "text", None)?;
        expect_str(value, "text")
    }

    fn is_displayed(&self, element: &ElementId) -> DriverResult<bool> {
        let value = self.element_command(Method::GET, element, "displayed", None)?;
        expect_bool(value, "displayed")
    }

    fn is_enabled(&self, element: &ElementId) -> DriverResult<bool> {
        let value = self.element_command(Method::GET, element, "enabled", None)?;
        expect_bool(value, "enabled")
    }

    fn page_source(&self) -> DriverResult<String> {
        let value = self.command(Method::GET, "/source", None, "page source")?;
        expect_str(value, "page source")
    }

    fn launch_app(&self) -> DriverResult<()> {
        match &self.app_id {
            Some(app_id) => {
                let body = json!({ "appId": app_id });
                self.command(
                    Method::POST,
                    "/appium/device/activate_app",
                    Some(&body),
                    "activate app",
                )?;
            }
            None => {
                self.command(Method::POST, "/appium/app/launch", None, "launch app")?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// Wire helpers
// ============================================================================

/// Request body for `POST /session`.
pub fn new_session_body(config: &DriverConfig) -> Value {
    json!({
        "capabilities": {
            "alwaysMatch": config.capabilities.to_w3c(),
            "firstMatch": [{}],
        }
    })
}

fn send(
    client: &Client,
    credentials: Option<&(String, String)>,
    method: Method,
    url: &str,
    body: Option<&Value>,
    command: &str,
) -> DriverResult<Value> {
    debug!(%method, %url, command, "webdriver request");

    let mut request = client.request(method, url);
    if let Some((user, key)) = credentials {
        request = request.basic_auth(user, Some(key));
    }
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send()?;
    let status = response.status();
    let text = response.text()?;
    debug!(%status, command, bytes = text.len(), "webdriver response");

    let envelope: Value = serde_json::from_str(&text).map_err(|e| DriverError::Protocol {
        command: command.to_string(),
        detail: format!("HTTP {} with non-JSON body ({})", status, e),
    })?;
    unwrap_value(command, envelope)
}

/// Take `value` out of a response envelope, turning W3C error objects into
/// [`DriverError::Command`].
pub fn unwrap_value(command: &str, envelope: Value) -> DriverResult<Value> {
    let value = match envelope {
        Value::Object(mut map) => map.remove("value").unwrap_or(Value::Null),
        other => {
            return Err(DriverError::Protocol {
                command: command.to_string(),
                detail: format!("expected a JSON object, got {}", other),
            });
        }
    };

    if let Some(error) = value.get("error").and_then(Value::as_str) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        return Err(DriverError::Command {
            command: command.to_string(),
            error: error.to_string(),
            message,
        });
    }

    Ok(value)
}

/// Read an element reference from a `find element` value.
pub fn parse_element_id(value: &Value) -> Option<ElementId> {
    value
        .get(ELEMENT_KEY)
        .or_else(|| value.get(LEGACY_ELEMENT_KEY))
        .and_then(Value::as_str)
        .map(|id| ElementId(id.to_string()))
}

fn expect_str(value: Value, command: &str) -> DriverResult<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(DriverError::Protocol {
            command: command.to_string(),
            detail: format!("expected a string, got {}", other),
        }),
    }
}

fn expect_bool(value: Value, command: &str) -> DriverResult<bool> {
    value.as_bool().ok_or_else(|| DriverError::Protocol {
        command: command.to_string(),
        detail: format!("expected a boolean, got {}", value),
    })
}
