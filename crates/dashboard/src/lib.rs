//! # PMP Dashboard
//!
//! Presentation layer for the personalised medicine prototype.
//!
//! Handles:
//! - The vitals line chart, drawn to SVG with plotters
//! - Rendering the whole page as a pure function of dashboard content and view state
//! - HTTP routes with axum
//!
//! Uses `pmp-core` for the patient, vitals and recommendation data.

#![warn(rust_2018_idioms)]

pub mod chart;
pub mod error;
pub mod health;
pub mod routes;
pub mod view;

pub use error::RenderError;
pub use health::HealthService;
pub use routes::{router, AppState};
pub use view::{render, ViewState};
