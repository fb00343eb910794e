//! Integration tests driving the stores through their public APIs.

mod helpers;
mod notification_test;
mod persistence_test;
mod report_history_test;
