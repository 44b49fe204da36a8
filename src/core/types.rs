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

//! src/core/types.rs
//!
//! Core type definitions for the document-creation menu
//!
//! - `MenuIcon`: Symbolic icon shown next to a section title
//! - `MenuItem`: A single "create new ..." shortcut
//! - `MenuSection`: A titled group of items
//!
//! All fields are `&'static str` so the whole catalog can live in a
//! `static` table and be shared without cloning.

use std::fmt;

/// Symbolic icon attached to a menu section
///
/// Each variant maps to a GTK symbolic icon name so the view layer never
/// deals with raw icon strings.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MenuIcon {
    /// Sales documents
    Receipt,
    /// Purchase documents
    Cart,
    /// Money movement
    Wallet,
    /// Contacts
    People,
}

impl MenuIcon {
    /// Returns the GTK symbolic icon name for this icon
    pub fn icon_name(self) -> &'static str {
        match self {
            MenuIcon::Receipt => "x-office-document-symbolic",
            MenuIcon::Cart => "mail-send-receive-symbolic",
            MenuIcon::Wallet => "accessories-calculator-symbolic",
            MenuIcon::People => "system-users-symbolic",
        }
    }
}

impl fmt::Display for MenuIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuIcon::Receipt => write!(f, "receipt"),
            MenuIcon::Cart => write!(f, "cart"),
            MenuIcon::Wallet => write!(f, "wallet"),
            MenuIcon::People => write!(f, "people"),
        }
    }
}

/// A selectable shortcut inside a section
///
/// `id` is only unique within the owning section. `display_name` is what
/// the user sees and what selection callbacks receive; it is not unique
/// (sales and purchases both have a "Refunds" entry).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MenuItem {
    pub id: &'static str,
    pub display_name: &'static str,
}

impl MenuItem {
    pub const fn new(id: &'static str, display_name: &'static str) -> Self {
        Self { id, display_name }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// A titled group of menu items
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuSection {
    /// Unique across the catalog
    pub id: &'static str,
    pub title: &'static str,
    pub icon: MenuIcon,
    /// Rendered in this order
    pub items: &'static [MenuItem],
}

impl MenuSection {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        icon: MenuIcon,
        items: &'static [MenuItem],
    ) -> Self {
        Self {
            id,
            title,
            icon,
            items,
        }
    }

    /// Finds an item in this section by its id
    pub fn find_item(&self, item_id: &str) -> Option<&'static MenuItem> {
        self.items.iter().find(|item| item.id == item_id)
    }
}
