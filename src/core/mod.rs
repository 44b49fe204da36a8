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

//! src/core/mod.rs
//!
//! Display-free logic behind the shell components
//!
//! This module contains:
//! - Type definitions for menu sections and items
//! - The static document catalog and its invariants
//! - Menu layout and callback dispatch
//! - The header model (placeholder actions, compact breakpoint, toggle hook)
//!
//! Nothing here touches GTK, so all of it is unit tested without a
//! display server.

pub mod catalog;
pub mod header;
pub mod menu;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use header::HeaderHandlers;
pub use menu::{MenuHandlers, MenuLayout, SectionBlock};
pub use types::*;

#[cfg(test)]
mod tests;
