pub mod crawler;
pub mod target;
