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

//! GTK4 user interface with MVC architecture
//!
//! # Architecture
//!
//! - **Model**: Catalog, menu and header models (in `core`)
//! - **View**: GTK4 components (in `components/` and `builders/`)
//! - **Controller**: Owns shell state the views are driven by (in `controller.rs`)
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports and initialisation
//! ├── app.rs          // GTK4 Application setup
//! ├── controller.rs   // Shell state
//! ├── builders/       // Header bar and layout builders
//! └── components/     // Create menu, search entry
//! ```

pub mod app;
mod builders;
pub mod components;
pub mod controller;

pub use {
    app::App,
    controller::{Selection, ShellController},
};

#[cfg(test)]
mod tests;
