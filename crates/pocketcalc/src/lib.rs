pub mod calculators;
pub mod config;
pub mod error;
pub mod telemetry;
