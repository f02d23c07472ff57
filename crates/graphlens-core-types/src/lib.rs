//! Core types shared across graphlens facilities
//!
//! This crate provides the canonical vocabulary used by both the error and
//! logging facilities of `graphlens-core`:
//!
//! - **Schema constants**: field keys, operation names and event names

pub mod schema;
