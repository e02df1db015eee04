//! Shared test utilities for apptrack integration tests.
//!
//! This module provides:
//! - `TestHarness` for trackers backed by a throwaway SQLite file
//! - `DraftBuilder` for building form input without boilerplate

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
