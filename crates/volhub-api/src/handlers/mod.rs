//! Route handlers organized by domain.

pub mod event;
pub mod health;
pub mod matching;
pub mod notification;
pub mod report;
pub mod volunteer;
