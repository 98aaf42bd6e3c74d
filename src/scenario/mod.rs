pub mod expect;
pub mod runner;
pub mod scenario_model;
pub mod suites;
