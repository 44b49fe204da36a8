//! UI builder modules
//!
//! Contains modular builders for constructing the main application UI:
//! - Header bar creation
//! - Layout construction

pub mod header;
pub mod layout;

pub use header::build_header_bar;
pub use layout::build_main_layout;
