//! Custom Axum extractors.

pub mod query;

pub use query::{NotificationQuery, ReportQuery};
