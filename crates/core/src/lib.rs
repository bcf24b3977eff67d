//! # PMP Core
//!
//! Domain logic for the personalised medicine prototype dashboard.
//!
//! This crate holds the immutable data the dashboard shows and the rule matcher that derives
//! recommendations from it:
//! - Patient and genomic finding records
//! - The vitals (response score) series
//! - Built-in fixtures and optional YAML fixture files
//! - The recommendation matcher and its explainability features
//!
//! **No presentation concerns**: HTML, charts and HTTP belong in `pmp-dashboard`.

pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod patient;
pub mod recommendations;
pub mod vitals;

pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::{CoreError, CoreResult};
pub use fixtures::Fixtures;
pub use patient::{GenomicFinding, Patient, Sex};
pub use pmp_types::{Confidence, NonEmptyText};
pub use recommendations::{explainability_note, key_features, recommend, Recommendation};
pub use vitals::{VitalsPoint, VitalsSeries};
