//! `shapeforge-cli` — demo driver.
//!
//! Wires generators, containers and reports together. Configuration comes from the
//! environment (see [`config::DemoConfig`]).

pub mod config;
pub mod demo;

pub use config::DemoConfig;
pub use demo::run;
