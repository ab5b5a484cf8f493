//! Illustrative insurance premium estimators with an HTTP surface.

pub mod config;
pub mod error;
pub mod estimator;
pub mod telemetry;
