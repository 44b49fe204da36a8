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

//! src/core/header.rs
//!
//! Display-free model of the header bar
//!
//! The header is static apart from the mobile menu toggle. Its icon
//! buttons are placeholders and carry no handler at all.

use std::rc::Rc;

/// Placeholder text shown in the header search entry
pub const SEARCH_PLACEHOLDER: &str = "Search transactions, contacts, reports...";

/// A decorative icon button on the right side of the header
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeaderAction {
    pub id: &'static str,
    pub icon_name: &'static str,
    pub tooltip: &'static str,
}

/// Icon buttons, left to right
pub const HEADER_ACTIONS: &[HeaderAction] = &[
    HeaderAction {
        id: "notifications",
        icon_name: "preferences-system-notifications-symbolic",
        tooltip: "Notifications",
    },
    HeaderAction {
        id: "help",
        icon_name: "help-about-symbolic",
        tooltip: "Help",
    },
    HeaderAction {
        id: "settings",
        icon_name: "emblem-system-symbolic",
        tooltip: "Settings",
    },
    HeaderAction {
        id: "account",
        icon_name: "avatar-default-symbolic",
        tooltip: "Account",
    },
];

/// Whether the window is narrow enough for the mobile layout
///
/// The toggle is shown strictly below the breakpoint.
pub fn is_compact(width: i32, breakpoint: i32) -> bool {
    width < breakpoint
}

/// The header's single interactive hook
#[derive(Clone)]
pub struct HeaderHandlers {
    on_menu_toggle: Rc<dyn Fn()>,
}

impl HeaderHandlers {
    pub fn new<F>(on_menu_toggle: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self {
            on_menu_toggle: Rc::new(on_menu_toggle),
        }
    }

    /// Mobile toggle activated
    pub fn toggle(&self) {
        (self.on_menu_toggle)();
    }
}
