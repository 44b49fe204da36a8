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

//! Header bar builder
//!
//! Creates the branded header bar with search and icon buttons

use gtk4::{prelude::*, Box as GtkBox, Button, HeaderBar, Image, Label, Orientation};

use crate::{
    config::ShellConfig,
    core::header::{HeaderHandlers, HEADER_ACTIONS},
    ui::components::SearchBar,
};

/// Builds the application header bar
///
/// Creates a HeaderBar containing:
/// - Mobile menu toggle (left, only shown in the compact layout)
/// - Brand icon and name (left)
/// - Search entry (centre, placeholder only)
/// - Notification/help/settings/account buttons (right, no handlers)
///
/// # Returns
///
/// Tuple of (header_bar, menu_toggle). The caller drives the toggle's
/// visibility as the window width changes.
pub fn build_header_bar(config: &ShellConfig, handlers: HeaderHandlers) -> (HeaderBar, Button) {
    let header_bar = HeaderBar::new();

    // Mobile toggle: the only wired control
    let menu_toggle = Button::builder()
        .icon_name("open-menu-symbolic")
        .tooltip_text("Toggle navigation")
        .visible(config.starts_compact())
        .build();
    menu_toggle.add_css_class("menu-toggle");

    menu_toggle.connect_clicked(move |_| handlers.toggle());

    // Branding
    let brand = GtkBox::new(Orientation::Horizontal, 6);
    brand.append(&Image::from_icon_name("accessories-calculator-symbolic"));
    let brand_label = Label::new(Some(config.brand.as_str()));
    brand_label.add_css_class("brand-title");
    brand.append(&brand_label);

    header_bar.pack_start(&menu_toggle);
    header_bar.pack_start(&brand);

    let search_bar = SearchBar::new();
    header_bar.set_title_widget(Some(search_bar.widget()));

    // pack_end stacks right-to-left, so add in reverse to keep list order
    for action in HEADER_ACTIONS.iter().rev() {
        let button = Button::builder()
            .name(action.id)
            .icon_name(action.icon_name)
            .tooltip_text(action.tooltip)
            .build();
        button.add_css_class("flat");
        header_bar.pack_end(&button);
    }

    (header_bar, menu_toggle)
}
