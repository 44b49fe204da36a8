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

//! src/core/menu.rs
//!
//! Display-free model of the "create new" menu
//!
//! The GTK component in `ui::components::create_menu` is a thin shell
//! around this module:
//! - `layout()` decides what is rendered for a given `is_open`
//! - `MenuHandlers` dispatches selection and dismissal to the caller
//!
//! Keeping both here lets the interaction contract be tested without a
//! display server.

use std::rc::Rc;

use crate::core::{catalog::Catalog, types::MenuItem, types::MenuSection};

/// One section as it appears in the open menu
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SectionBlock {
    pub section: &'static MenuSection,
    /// A separator is drawn above every section except the first
    pub divider_before: bool,
}

/// Everything the open menu shows, in display order
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MenuLayout {
    pub blocks: Vec<SectionBlock>,
}

impl MenuLayout {
    /// Number of selectable items across all blocks
    pub fn item_count(&self) -> usize {
        self.blocks.iter().map(|block| block.section.items.len()).sum()
    }
}

/// Computes the menu layout for the current visibility
///
/// # Returns
///
/// * `None` - Menu is closed; nothing is rendered and nothing is interactive
/// * `Some(MenuLayout)` - One block per section in catalog order (empty for
///   an empty catalog)
pub fn layout(catalog: &Catalog, is_open: bool) -> Option<MenuLayout> {
    if !is_open {
        return None;
    }

    let blocks = catalog
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| SectionBlock {
            section,
            divider_before: index > 0,
        })
        .collect();

    Some(MenuLayout { blocks })
}

/// Caller-supplied callbacks for the menu
///
/// Cloning is cheap; every clone dispatches to the same closures.
#[derive(Clone)]
pub struct MenuHandlers {
    on_close: Rc<dyn Fn()>,
    on_menu_click: Rc<dyn Fn(&str)>,
}

impl MenuHandlers {
    /// Wraps the owner's dismiss and selection callbacks
    ///
    /// # Example
    ///
    /// ```
    /// use ledgerline_shell::core::MenuHandlers;
    ///
    /// let handlers = MenuHandlers::new(
    ///     || println!("closed"),
    ///     |name| println!("picked {name}"),
    /// );
    /// handlers.close();
    /// ```
    pub fn new<C, M>(on_close: C, on_menu_click: M) -> Self
    where
        C: Fn() + 'static,
        M: Fn(&str) + 'static,
    {
        Self {
            on_close: Rc::new(on_close),
            on_menu_click: Rc::new(on_menu_click),
        }
    }

    /// Item picked: reports its display name, then dismisses
    pub fn select(&self, item: &MenuItem) {
        (self.on_menu_click)(item.display_name);
        (self.on_close)();
    }

    /// Explicit close control activated
    pub fn close(&self) {
        (self.on_close)();
    }

    /// Pointer click (press and release) somewhere inside the overlay
    ///
    /// Dismisses only when the click originated on the overlay itself.
    /// Clicks that land on the panel or anything inside it reach the
    /// overlay too, but their origin differs, so they are ignored.
    ///
    /// # Returns
    ///
    /// `true` if the menu was dismissed
    pub fn pointer_clicked<W>(&self, origin: &W, overlay: &W) -> bool
    where
        W: PartialEq + ?Sized,
    {
        if origin != overlay {
            return false;
        }

        (self.on_close)();
        true
    }
}
