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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::ui::ShellController;
use gtk4::{
    prelude::*, Align, Box as GtkBox, Button, Label, Orientation, Overlay, Revealer,
    RevealerTransitionType,
};

/// Builds the main application layout
///
/// Creates an Overlay whose base child is a horizontal box containing:
/// - Left: Sidebar revealer listing the catalog's section titles
/// - Right: Main area with the "Create New" button and a status line
///
/// The create menu is later stacked on the same Overlay.
///
/// # Returns
///
/// Tuple of (overlay, sidebar, status_label, create_button)
pub fn build_main_layout(controller: &ShellController) -> (Overlay, Revealer, Label, Button) {
    let overlay = Overlay::new();

    let root = GtkBox::new(Orientation::Horizontal, 0);

    // LEFT SIDE: Sidebar
    let sidebar_box = GtkBox::new(Orientation::Vertical, 6);
    sidebar_box.set_width_request(200);
    sidebar_box.set_margin_start(10);
    sidebar_box.set_margin_end(10);
    sidebar_box.set_margin_top(10);
    sidebar_box.add_css_class("sidebar");

    for section in controller.catalog().sections() {
        let label = Label::builder().label(section.title).halign(Align::Start).build();
        sidebar_box.append(&label);
    }

    let sidebar = Revealer::builder()
        .transition_type(RevealerTransitionType::SlideRight)
        .reveal_child(controller.is_sidebar_open())
        .child(&sidebar_box)
        .build();
    root.append(&sidebar);

    // RIGHT SIDE: Main area
    let main_vbox = GtkBox::new(Orientation::Vertical, 10);
    main_vbox.set_hexpand(true);
    main_vbox.set_vexpand(true);
    main_vbox.set_halign(Align::Center);
    main_vbox.set_valign(Align::Center);

    let create_button = Button::builder().label("➕ Create New").build();
    create_button.add_css_class("suggested-action");
    main_vbox.append(&create_button);

    let status_label = Label::new(Some("Nothing created yet"));
    status_label.add_css_class("dim-label");
    main_vbox.append(&status_label);

    root.append(&main_vbox);
    overlay.set_child(Some(&root));

    (overlay, sidebar, status_label, create_button)
}
