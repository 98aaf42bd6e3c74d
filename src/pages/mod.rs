pub mod alerts;
pub mod demo_login;
pub mod home;
pub mod login;
