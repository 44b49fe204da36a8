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

//! "Create new" menu component
//!
//! A modal panel of document shortcuts drawn over the window content. The
//! owner decides visibility: `render(false)` removes every widget the menu
//! created, `render(true)` rebuilds the backdrop and panel from the catalog.

use gtk4::{
    prelude::*, Align, Box as GtkBox, Button, FlowBox, GestureClick, Image, Label, Orientation,
    Overlay, PickFlags, SelectionMode, Separator, Widget,
};
use std::cell::RefCell;

use crate::core::{
    menu::{self, MenuHandlers, SectionBlock},
    Catalog,
};

/// Modal "create new document" menu
///
/// The menu never opens or closes itself. Every dismissal path goes through
/// the owner's `on_close` callback, and the owner answers with `render`.
pub struct CreateMenu {
    /// Window-level overlay the backdrop is stacked on
    host: Overlay,
    /// Sections to show
    catalog: &'static Catalog,
    /// Owner callbacks
    handlers: MenuHandlers,
    /// Backdrop currently in the overlay, if open
    backdrop: RefCell<Option<GtkBox>>,
}

impl CreateMenu {
    /// Creates a closed menu attached to `host`
    ///
    /// # Arguments
    ///
    /// * `host` - Overlay covering the window content
    /// * `catalog` - Sections and items to list
    /// * `handlers` - Owner's `on_close` / `on_menu_click` callbacks
    pub fn new(host: &Overlay, catalog: &'static Catalog, handlers: MenuHandlers) -> Self {
        Self {
            host: host.clone(),
            catalog,
            handlers,
            backdrop: RefCell::new(None),
        }
    }

    /// Renders the menu for the given visibility
    ///
    /// Any previous backdrop is removed first, so a closed menu leaves no
    /// widgets or event controllers behind.
    pub fn render(&self, is_open: bool) {
        // Release the borrow before touching the widget tree
        let previous = self.backdrop.borrow_mut().take();
        if let Some(previous) = previous {
            self.host.remove_overlay(&previous);
        }

        let Some(layout) = menu::layout(self.catalog, is_open) else {
            return;
        };

        let backdrop = GtkBox::new(Orientation::Vertical, 0);
        backdrop.set_hexpand(true);
        backdrop.set_vexpand(true);
        backdrop.add_css_class("create-menu-backdrop");

        let panel = self.build_panel(&layout.blocks);
        backdrop.append(&panel);

        self.connect_backdrop_click(&backdrop);

        self.host.add_overlay(&backdrop);
        *self.backdrop.borrow_mut() = Some(backdrop);
    }

    /// Whether the menu currently has widgets in the overlay
    pub fn is_rendered(&self) -> bool {
        self.backdrop.borrow().is_some()
    }

    /// Backdrop currently stacked on the host, if open
    #[cfg(test)]
    pub(crate) fn backdrop(&self) -> Option<GtkBox> {
        self.backdrop.borrow().clone()
    }

    /// Builds the centred panel: title row, then one block per section
    fn build_panel(&self, blocks: &[SectionBlock]) -> GtkBox {
        let panel = GtkBox::new(Orientation::Vertical, 8);
        panel.set_halign(Align::Center);
        panel.set_valign(Align::Center);
        panel.set_width_request(520);
        panel.add_css_class("create-menu-panel");

        // Title row with explicit close control
        let title_row = GtkBox::new(Orientation::Horizontal, 8);
        let title = Label::builder()
            .label("Create New")
            .halign(Align::Start)
            .hexpand(true)
            .build();
        title.add_css_class("create-menu-title");

        let close_button = Button::builder()
            .icon_name("window-close-symbolic")
            .tooltip_text("Close")
            .build();
        close_button.add_css_class("flat");

        let handlers = self.handlers.clone();
        close_button.connect_clicked(move |_| {
            eprintln!("✖️  Create menu closed");
            handlers.close();
        });

        title_row.append(&title);
        title_row.append(&close_button);
        panel.append(&title_row);

        for block in blocks {
            if block.divider_before {
                let separator = Separator::new(Orientation::Horizontal);
                separator.set_margin_top(4);
                separator.set_margin_bottom(4);
                panel.append(&separator);
            }
            panel.append(&self.build_section(block));
        }

        panel
    }

    /// Builds one section: icon + heading, then a grid of item buttons
    fn build_section(&self, block: &SectionBlock) -> GtkBox {
        let section = block.section;
        let section_box = GtkBox::new(Orientation::Vertical, 6);

        let heading = GtkBox::new(Orientation::Horizontal, 6);
        heading.append(&Image::from_icon_name(section.icon.icon_name()));
        let heading_label = Label::builder()
            .label(section.title)
            .halign(Align::Start)
            .build();
        heading_label.add_css_class("create-menu-section-title");
        heading.append(&heading_label);
        section_box.append(&heading);

        let items = FlowBox::builder()
            .selection_mode(SelectionMode::None)
            .max_children_per_line(3)
            .column_spacing(6)
            .row_spacing(6)
            .homogeneous(true)
            .build();

        for item in section.items {
            let button = Button::builder().label(item.display_name).build();
            button.add_css_class("create-menu-item");

            let handlers = self.handlers.clone();
            button.connect_clicked(move |_| {
                eprintln!("📄 Create: {item} ({})", item.id);
                handlers.select(item);
            });

            items.append(&button);
        }

        section_box.append(&items);
        section_box
    }

    /// Dismisses on clicks whose origin is the backdrop itself
    fn connect_backdrop_click(&self, backdrop: &GtkBox) {
        let gesture = GestureClick::new();
        let handlers = self.handlers.clone();
        let backdrop_ref = backdrop.downgrade();

        gesture.connect_released(move |_gesture, _n_press, x, y| {
            let Some(backdrop) = backdrop_ref.upgrade() else {
                return;
            };

            // Coordinates are relative to the backdrop
            let Some(origin) = backdrop.pick(x, y, PickFlags::DEFAULT) else {
                return;
            };

            if handlers.pointer_clicked(&origin, backdrop.upcast_ref::<Widget>()) {
                eprintln!("✖️  Create menu dismissed from backdrop");
            }
        });

        backdrop.add_controller(gesture);
    }
}
