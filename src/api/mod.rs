//! HTTP route definitions
//!
//! `/` serves the dashboard page; `/healthz` is for liveness probes.

pub mod dashboard;
pub mod health;
