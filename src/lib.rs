// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ledgerline Shell
//!
//! The navigation shell of the Ledgerline accounting suite: a branded
//! header bar and a modal "create new document" menu, built with GTK4.
//!
//! # Features
//!
//! - **Create Menu:** Fixed catalog of document shortcuts (Sales, Purchases,
//!   Payments, Customers) shown in a modal overlay
//! - **Header Bar:** Branding, search entry, icon buttons and a mobile
//!   menu toggle
//! - **Owner-driven state:** Components report through callbacks and never
//!   change their own visibility
//!
//! # Architecture
//!
//! - **`core`:** Display-free logic (catalog, menu layout, callback dispatch,
//!   header model)
//! - **`config`:** Window and branding settings
//! - **`ui`:** GTK4 components and the application shell (MVC pattern)
//!
//! # Examples
//!
//! ## Walking the catalog
//!
//! ```
//! use ledgerline_shell::core::Catalog;
//!
//! for (section, item) in Catalog::standard().items() {
//!     println!("{} → {}", section.title, item.display_name);
//! }
//! ```
//!
//! ## Reacting to menu picks
//!
//! ```
//! use ledgerline_shell::core::{Catalog, MenuHandlers};
//!
//! let handlers = MenuHandlers::new(
//!     || println!("menu closed"),
//!     |name| println!("create a new {name}"),
//! );
//!
//! if let Some(invoice) = Catalog::standard().find_item("sales", "invoice") {
//!     handlers.select(invoice); // prints the pick, then "menu closed"
//! }
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use ledgerline_shell::{config::ShellConfig, ui::App};
//!
//! let app = App::new(ShellConfig::default())?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), ledgerline_shell::config::ConfigError>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{Catalog, MenuItem, MenuSection};
