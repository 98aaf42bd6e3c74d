#![allow(dead_code)]

pub mod fake_login_app;
pub mod mock_appium;
pub mod scripted_driver;
