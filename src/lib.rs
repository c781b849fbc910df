//! Keeps the status reactions on the `PR reviews` Zulip channel in sync with
//! pull request labels.

pub mod config;
pub mod logger;
pub mod status;
pub mod sync;
pub mod zulip;
