pub mod capabilities;
pub mod driver;
pub mod element;
pub mod selector;
pub mod session;
