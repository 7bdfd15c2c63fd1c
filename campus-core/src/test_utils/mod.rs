//! Test utilities and helpers for the campus registry
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! to improve test quality and reduce code duplication across the codebase.

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
