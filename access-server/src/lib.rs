//! Accessible transit stop finder.
//!
//! Answers "which wheelchair-accessible stops are near me?" over a read-only
//! stop dataset, and joins school locations against the stop feed to score
//! how accessible the transit around each school is.

pub mod config;
pub mod distance;
pub mod domain;
pub mod feed;
pub mod join;
pub mod logging;
pub mod proximity;
pub mod store;
pub mod web;
