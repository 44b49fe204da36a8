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

//! Widget tests for the create menu and header bar
//!
//! GTK may only be driven from the thread that initialised it, so every
//! check lives in one test. Without a display the test returns early.

use gtk4::{prelude::*, Box as GtkBox, Button, Label, Overlay, PickFlags, Widget, Window};
use std::{cell::Cell, cell::RefCell, rc::Rc};

use crate::{
    config::ShellConfig,
    core::{header::HEADER_ACTIONS, Catalog, HeaderHandlers, MenuHandlers},
    ui::{builders::build_header_bar, components::CreateMenu},
};

/// Helper: Counts the direct children of a widget
fn child_count(widget: &impl IsA<Widget>) -> usize {
    let mut count = 0;
    let mut child = widget.first_child();
    while let Some(current) = child {
        count += 1;
        child = current.next_sibling();
    }
    count
}

/// Helper: Runs pending main loop work
fn drain_main_loop() {
    let context = glib::MainContext::default();
    while context.iteration(false) {}
}

/// Helper: Menu on a fresh overlay with counting callbacks
fn counting_menu() -> (Overlay, CreateMenu, Rc<Cell<usize>>, Rc<RefCell<Vec<String>>>) {
    let overlay = Overlay::new();
    overlay.set_child(Some(&Label::new(Some("content"))));

    let closes = Rc::new(Cell::new(0));
    let clicks = Rc::new(RefCell::new(Vec::new()));

    let closes_for_menu = closes.clone();
    let clicks_for_menu = clicks.clone();
    let handlers = MenuHandlers::new(
        move || closes_for_menu.set(closes_for_menu.get() + 1),
        move |name| clicks_for_menu.borrow_mut().push(name.to_string()),
    );

    let menu = CreateMenu::new(&overlay, Catalog::standard(), handlers);
    (overlay, menu, closes, clicks)
}

#[test]
fn test_widgets_with_display() {
    if gtk4::init().is_err() {
        eprintln!("No display available, skipping widget tests");
        return;
    }

    check_closed_menu_has_no_widgets();
    check_render_adds_and_removes_backdrop();
    check_close_button_only_closes();
    check_backdrop_pick_identity();
    check_header_bar();
}

fn check_closed_menu_has_no_widgets() {
    let (overlay, menu, _closes, _clicks) = counting_menu();

    menu.render(false);

    assert!(!menu.is_rendered());
    assert!(menu.backdrop().is_none());
    assert_eq!(child_count(&overlay), 1, "Only the base content should exist");
}

fn check_render_adds_and_removes_backdrop() {
    let (overlay, menu, _closes, _clicks) = counting_menu();

    menu.render(true);
    assert!(menu.is_rendered());
    assert_eq!(child_count(&overlay), 2, "Open menu adds one overlay child");

    let backdrop = menu.backdrop().unwrap();
    assert_eq!(backdrop.parent(), Some(overlay.clone().upcast::<Widget>()));

    // Re-rendering open replaces rather than stacks
    menu.render(true);
    assert_eq!(child_count(&overlay), 2);

    menu.render(false);
    assert!(!menu.is_rendered());
    assert_eq!(child_count(&overlay), 1);
}

fn check_close_button_only_closes() {
    let (_overlay, menu, closes, clicks) = counting_menu();
    menu.render(true);

    let backdrop = menu.backdrop().unwrap();
    let panel = backdrop.first_child().unwrap();
    let title_row = panel.first_child().unwrap();
    let close_button = title_row.last_child().unwrap().downcast::<Button>().unwrap();

    close_button.emit_clicked();

    assert_eq!(closes.get(), 1);
    assert!(clicks.borrow().is_empty());
}

fn check_backdrop_pick_identity() {
    let (overlay, menu, closes, _clicks) = counting_menu();

    let window = Window::builder()
        .default_width(1000)
        .default_height(900)
        .child(&overlay)
        .build();
    window.present();
    menu.render(true);

    let backdrop: GtkBox = menu.backdrop().unwrap();
    for _ in 0..50 {
        drain_main_loop();
        if backdrop.width() > 0 {
            break;
        }
    }

    if backdrop.width() == 0 {
        eprintln!("Backdrop was never allocated, skipping pick checks");
        window.close();
        return;
    }

    let backdrop_widget = backdrop.upcast_ref::<Widget>();
    let handlers = MenuHandlers::new(
        {
            let closes = closes.clone();
            move || closes.set(closes.get() + 1)
        },
        |_| {},
    );

    // Corner of the backdrop is outside the centred panel
    let corner = backdrop.pick(2.0, 2.0, PickFlags::DEFAULT).unwrap();
    assert_eq!(&corner, backdrop_widget);
    assert!(handlers.pointer_clicked(&corner, backdrop_widget));

    // Centre of the panel resolves to the panel or one of its children
    let panel = backdrop.first_child().unwrap();
    let bounds = panel.compute_bounds(&backdrop).unwrap();
    let inner = backdrop
        .pick(
            f64::from(bounds.x() + bounds.width() / 2.0),
            f64::from(bounds.y() + bounds.height() / 2.0),
            PickFlags::DEFAULT,
        )
        .unwrap();
    assert_ne!(&inner, backdrop_widget);
    assert!(!handlers.pointer_clicked(&inner, backdrop_widget));

    assert_eq!(closes.get(), 1, "Only the corner click should close");
    window.close();
}

fn check_header_bar() {
    let toggles = Rc::new(Cell::new(0));
    let toggles_for_header = toggles.clone();
    let handlers = HeaderHandlers::new(move || toggles_for_header.set(toggles_for_header.get() + 1));

    let (header_bar, menu_toggle) = build_header_bar(&ShellConfig::default(), handlers);

    assert!(!menu_toggle.is_visible(), "Toggle is hidden in the wide layout");

    menu_toggle.emit_clicked();
    assert_eq!(toggles.get(), 1);

    // Placeholder buttons are named after their action ids
    let mut names = Vec::new();
    collect_button_names(header_bar.upcast_ref::<Widget>(), &mut names);
    for action in HEADER_ACTIONS {
        assert!(names.iter().any(|name| name == action.id), "Missing button '{}'", action.id);
    }
}

/// Helper: Collects widget names of every button under `widget`
fn collect_button_names(widget: &Widget, names: &mut Vec<String>) {
    if widget.is::<Button>() {
        names.push(widget.widget_name().to_string());
    }

    let mut child = widget.first_child();
    while let Some(current) = child {
        collect_button_names(&current, names);
        child = current.next_sibling();
    }
}
