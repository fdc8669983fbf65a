//! Activity signup service for Mergington High School.
//!
//! Lists the school's extracurricular activities and lets students sign up for and
//! unregister from them. The roster lives in memory for the lifetime of the process.

pub mod app;
pub mod config;
mod error;
pub mod model;
mod telemetry;
pub mod web;

pub use app::{serve, App, AppState};
pub use error::{Error, Result};
pub use telemetry::{init_dbg_tracing, init_production_tracing};
