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

//! Controller tests
//!
//! Tests for the shell state behind the header and create menu

use std::rc::Rc;

use crate::core::{Catalog, MenuHandlers};
use crate::ui::ShellController;

#[test]
fn test_controller_starts_closed_with_sidebar() {
    let controller = ShellController::default();

    assert!(!controller.is_menu_open(), "Menu should start closed");
    assert!(controller.is_sidebar_open(), "Sidebar should start visible");
    assert!(controller.last_selection().is_none());
    assert_eq!(controller.catalog(), Catalog::standard());
}

#[test]
fn test_open_and_close_menu() {
    let controller = ShellController::default();

    controller.open_menu();
    assert!(controller.is_menu_open());

    controller.close_menu();
    assert!(!controller.is_menu_open());
}

#[test]
fn test_toggle_sidebar_flips() {
    let controller = ShellController::default();

    assert!(!controller.toggle_sidebar());
    assert!(!controller.is_sidebar_open());

    assert!(controller.toggle_sidebar());
    assert!(controller.is_sidebar_open());
}

#[test]
fn test_compact_layout_hides_sidebar() {
    let controller = ShellController::default();

    assert!(!controller.set_compact(true));
    assert!(!controller.is_sidebar_open());

    // Toggle still works in compact mode
    assert!(controller.toggle_sidebar());

    assert!(controller.set_compact(false));
    assert!(controller.is_sidebar_open());
}

#[test]
fn test_record_selection() {
    let controller = ShellController::default();

    let selection = controller.record_selection("Invoice");
    assert_eq!(selection.display_name, "Invoice");
    assert_eq!(controller.last_selection(), Some(selection.clone()));

    let summary = selection.summary();
    assert!(summary.starts_with("New Invoice ("));
    assert!(summary.ends_with(')'));
}

#[test]
fn test_later_selection_replaces_earlier() {
    let controller = ShellController::default();

    controller.record_selection("Invoice");
    controller.record_selection("Bill");

    assert_eq!(
        controller.last_selection().map(|s| s.display_name),
        Some("Bill".to_string())
    );
}

#[test]
fn test_menu_handlers_drive_controller() {
    // Wire handlers the way the App does, minus the widgets
    let controller = Rc::new(ShellController::default());

    let controller_for_close = controller.clone();
    let controller_for_click = controller.clone();
    let handlers = MenuHandlers::new(
        move || controller_for_close.close_menu(),
        move |name| {
            controller_for_click.record_selection(name);
        },
    );

    controller.open_menu();
    let item = Catalog::standard().find_item("payments", "transfer").unwrap();
    handlers.select(item);

    assert!(!controller.is_menu_open(), "Selecting should close the menu");
    assert_eq!(
        controller.last_selection().map(|s| s.display_name),
        Some("Transfer Funds".to_string())
    );
}
