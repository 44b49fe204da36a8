//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Catalog contents and uniqueness invariants
//! - Menu layout and callback dispatch
//! - Header model and toggle hook
