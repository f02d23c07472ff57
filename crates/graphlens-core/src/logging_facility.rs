//! Structured logging facility for graphlens
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`,
//!   `log_op_detail!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use graphlens_core::logging_facility::{init, Profile};
//!
//! // Initialize once at test-suite or application startup
//! init(Profile::Development);
//! ```
//!
//! # Ownership
//!
//! The public entry points (`deep_equals`, `copy_properties`, `path_get`,
//! `path_set`) own lifecycle logging. Recursive helpers only emit
//! `log_op_detail!` debug events for individual mismatches and skipped members.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
