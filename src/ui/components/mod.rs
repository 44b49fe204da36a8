//! UI Components
//!
//! Reusable GTK4 widgets for the application shell.
//!
//! # Components
//!
//! - `create_menu.rs` - Modal "create new document" menu
//! - `search_bar.rs` - Header search entry (placeholder)

mod create_menu;
mod search_bar;

pub use create_menu::CreateMenu;
pub use search_bar::SearchBar;
