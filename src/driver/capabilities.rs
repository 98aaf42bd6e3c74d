use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

// ============================================================================
// Capability set sent with `new session`
// ============================================================================

/// Appium capabilities. Serialized to W3C form by [`Capabilities::to_w3c`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    pub platform_name: String,
    pub automation_name: String,
    pub device_name: String,
    pub platform_version: String,

    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub app_package: Option<String>,
    #[serde(default)]
    pub app_activity: Option<String>,
    #[serde(default)]
    pub bundle_id: Option<String>,
    #[serde(default)]
    pub browser_name: Option<String>,

    #[serde(default)]
    pub no_reset: bool,
    #[serde(default)]
    pub full_reset: bool,
    #[serde(default)]
    pub chromedriver_autodownload: bool,

    /// Vendor namespaces passed through untouched, e.g. `bstack:options`
    #[serde(default)]
    pub vendor_options: Map<String, Value>,
}

impl Capabilities {
    pub fn to_w3c(&self) -> Value {
        let mut caps = Map::new();
        caps.insert("platformName".into(), json!(self.platform_name));
        caps.insert("appium:automationName".into(), json!(self.automation_name));
        caps.insert("appium:deviceName".into(), json!(self.device_name));
        caps.insert("appium:platformVersion".into(), json!(self.platform_version));

        let optional = [
            ("appium:app", &self.app),
            ("appium:appPackage", &self.app_package),
            ("appium:appActivity", &self.app_activity),
            ("appium:bundleId", &self.bundle_id),
            ("browserName", &self.browser_name),
        ];
        for (key, value) in optional {
            if let Some(v) = value {
                caps.insert(key.into(), json!(v));
            }
        }

        // Reset flags only mean something when an app is installed
        if self.app.is_some() {
            caps.insert("appium:noReset".into(), json!(self.no_reset));
            caps.insert("appium:fullReset".into(), json!(self.full_reset));
        }
        if self.chromedriver_autodownload {
            caps.insert("appium:chromedriverAutodownload".into(), json!(true));
        }

        for (key, value) in &self.vendor_options {
            caps.insert(key.clone(), value.clone());
        }

        Value::Object(caps)
    }

    /// Package name (Android) or bundle id (iOS) used to activate the app.
    pub fn app_id(&self) -> Option<&str> {
        self.app_package.as_deref().or(self.bundle_id.as_deref())
    }
}

// ============================================================================
// Server connection
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    #[serde(default = "default_protocol")]
    pub protocol: String,
    pub hostname: String,
    pub port: u16,
    #[serde(default = "default_path")]
    pub path: String,

    /// Basic-auth user for cloud device grids
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub key: Option<String>,

    pub capabilities: Capabilities,

    /// Extra attempts the runner grants a failing scenario
    #[serde(default)]
    pub retries: u32,
}

fn default_protocol() -> String {
    "http".to_string()
}

fn default_path() -> String {
    "/".to_string()
}

impl DriverConfig {
    /// `protocol://host:port/path` without a trailing slash.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol,
            self.hostname,
            self.port,
            self.path.trim_end_matches('/')
        )
    }

    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.user, &self.key) {
            (Some(user), Some(key)) => Some((user.as_str(), key.as_str())),
            _ => None,
        }
    }
}

// ============================================================================
// Built-in profiles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    /// Local Appium server, Android emulator
    Android,
    /// Local Appium server, iOS simulator
    Ios,
    /// BrowserStack App Automate, iOS cloud device
    BrowserstackIos,
}

impl Profile {
    /// Profile defaults with overrides read from the process environment.
    pub fn config(self) -> DriverConfig {
        self.config_with(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
    }

    /// Profile defaults with overrides looked up through `env`.
    pub fn config_with(self, env: impl Fn(&str) -> Option<String>) -> DriverConfig {
        let var = |name: &str, fallback: &str| env(name).unwrap_or_else(|| fallback.to_string());
        match self {
            Profile::Android => {
                let mut caps = Capabilities {
                    platform_name: "Android".into(),
                    automation_name: "UiAutomator2".into(),
                    device_name: "sdk_gphone64_x86_64".into(),
                    platform_version: "13.0".into(),
                    app: None,
                    app_package: None,
                    app_activity: None,
                    bundle_id: None,
                    browser_name: None,
                    no_reset: false,
                    full_reset: false,
                    chromedriver_autodownload: false,
                    vendor_options: Map::new(),
                };
                match env("APP_PATH") {
                    Some(app_path) => {
                        caps.app = Some(app_path);
                        caps.app_package = Some(var("APP_PACKAGE", "com.wdiodemoapp"));
                        caps.app_activity = Some(var("APP_ACTIVITY", ".MainActivity"));
                    }
                    None => {
                        caps.browser_name = Some("Chrome".into());
                        caps.chromedriver_autodownload = true;
                    }
                }
                local_server(caps)
            }
            Profile::Ios => {
                let app = env("IOS_APP_PATH")
                    .or_else(|| env("APP_PATH"))
                    .unwrap_or_else(|| "/path/to/your/app.app".to_string());
                local_server(Capabilities {
                    platform_name: "iOS".into(),
                    automation_name: "XCUITest".into(),
                    device_name: var("IOS_DEVICE_NAME", "iPhone 14"),
                    platform_version: var("IOS_PLATFORM_VERSION", "17.0"),
                    app: Some(app),
                    app_package: None,
                    app_activity: None,
                    bundle_id: Some(var("IOS_BUNDLE_ID", "com.example.app")),
                    browser_name: None,
                    no_reset: false,
                    full_reset: false,
                    chromedriver_autodownload: false,
                    vendor_options: Map::new(),
                })
            }
            Profile::BrowserstackIos => {
                let build_date = chrono::Utc::now().format("%Y-%m-%d");
                let mut vendor_options = Map::new();
                vendor_options.insert(
                    "bstack:options".into(),
                    json!({
                        "projectName": "QA-AI-Agent iOS Tests",
                        "buildName": format!("iOS Build - {}", build_date),
                        "sessionName": "iOS App Test",
                        "debug": true,
                        "networkLogs": true,
                        "appiumLogs": true,
                        "video": true,
                        "deviceLogs": true,
                    }),
                );
                DriverConfig {
                    protocol: "https".into(),
                    hostname: "hub.browserstack.com".into(),
                    port: 443,
                    path: "/wd/hub".into(),
                    user: Some(var("BROWSERSTACK_USERNAME", "your_username")),
                    key: Some(var("BROWSERSTACK_ACCESS_KEY", "your_access_key")),
                    capabilities: Capabilities {
                        platform_name: "iOS".into(),
                        automation_name: "XCUITest".into(),
                        device_name: "iPhone 14 Pro".into(),
                        platform_version: "16".into(),
                        app: Some(var("BROWSERSTACK_APP_URL", "bs://your_app_id")),
                        app_package: None,
                        app_activity: None,
                        bundle_id: None,
                        browser_name: None,
                        no_reset: false,
                        full_reset: false,
                        chromedriver_autodownload: false,
                        vendor_options,
                    },
                    retries: 1,
                }
            }
        }
    }
}

fn local_server(capabilities: Capabilities) -> DriverConfig {
    DriverConfig {
        protocol: default_protocol(),
        hostname: "127.0.0.1".into(),
        port: 4723,
        path: default_path(),
        user: None,
        key: None,
        capabilities,
        retries: 0,
    }
}
