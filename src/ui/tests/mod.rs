//! UI module tests
//!
//! - Shell controller (display-free)
//! - Create menu and header widgets (skipped without a display)

#[cfg(test)]
mod controller_tests;
#[cfg(test)]
mod create_menu_tests;
