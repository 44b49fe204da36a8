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

//! Header search entry
//!
//! Accepts text but runs no search; executing searches belongs to whatever
//! embeds the shell.

use gtk4::{prelude::*, SearchEntry};

use crate::core::header::SEARCH_PLACEHOLDER;

/// Search entry shown in the middle of the header bar
pub struct SearchBar {
    /// Root widget (search entry)
    widget: SearchEntry,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    /// Creates an unwired search entry
    ///
    /// No signal handlers are connected, so typing has no effect beyond
    /// editing the text.
    pub fn new() -> Self {
        let widget = SearchEntry::builder()
            .placeholder_text(SEARCH_PLACEHOLDER)
            .build();
        widget.add_css_class("header-search");

        Self { widget }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &SearchEntry {
        &self.widget
    }
}
