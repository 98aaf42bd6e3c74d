pub mod cli;
pub mod crawl;
pub mod driver;
pub mod error;
pub mod pages;
pub mod report;
pub mod scenario;
