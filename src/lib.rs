#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal pet profile form.
//!
//! [`form::ProfileForm`] holds the form logic (validation, phone masking, the
//! description counter, photo preview, simulated submission and the success
//! dialog) with no dependency on a terminal. [`tui`] hosts it in ratatui.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod tui;
