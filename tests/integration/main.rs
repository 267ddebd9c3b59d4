//! Integration test entry point.

mod helpers;

mod event_test;
mod matching_test;
mod notification_test;
