//! Polling-station lookup and multilingual voting-guide content.
//!
//! The [`data`] module owns the immutable application snapshot, [`search`] resolves
//! citizen addresses to polling stations, and [`content`] keeps displayed guide text
//! in step with the selected language.

pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod search;
pub mod telemetry;
