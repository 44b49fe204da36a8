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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates the main
//! window. It owns the state the header and create menu are driven by, via
//! the ShellController.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates ShellController
//!   ├─ Builds header bar + main layout
//!   ├─ Attaches CreateMenu to the layout overlay
//!   └─ Routes component callbacks through the controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;

use crate::config::{ConfigError, ShellConfig};
use crate::core::{header::is_compact, HeaderHandlers, MenuHandlers};
use crate::ui::{
    builders::{build_header_bar, build_main_layout},
    components::CreateMenu,
    ShellController,
};

/// GTK4 Application hosting the header bar and create menu
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Shell state
    controller: Rc<ShellController>,
    /// Validated window settings
    config: Rc<ShellConfig>,
}

impl App {
    /// Creates a new App from a shell configuration
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Configuration is valid
    /// * `Err(ConfigError)` - A dimension or the brand is invalid
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ledgerline_shell::config::ShellConfig;
    /// use ledgerline_shell::ui::App;
    ///
    /// let app = App::new(ShellConfig::default())?;
    /// app.run();
    /// # Ok::<(), ledgerline_shell::config::ConfigError>(())
    /// ```
    pub fn new(config: ShellConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let app = Application::builder()
            .application_id("com.tidynest.ledgerline-shell")
            .build();

        let controller = Rc::new(ShellController::default());
        controller.set_compact(config.starts_compact());

        Ok(Self {
            app,
            controller,
            config: Rc::new(config),
        })
    }

    /// Runs the GTK4 application
    ///
    /// Starts the GTK4 main loop and blocks until the application exits.
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();
        let config = self.config.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone(), config.clone());
        });

        // Command-line flags were already consumed by clap
        self.app.run_with_args::<&str>(&[])
    }

    /// Loads the bundled stylesheet at APPLICATION priority
    fn load_css() {
        let Some(display) = gdk::Display::default() else {
            eprintln!("⚠️  No display available, skipping stylesheet");
            return;
        };

        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Builds the main window UI
    ///
    /// Called when the application activates.
    fn build_ui(app: &Application, controller: Rc<ShellController>, config: Rc<ShellConfig>) {
        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.brand.as_str())
            .default_width(config.default_width)
            .default_height(config.default_height)
            .build();

        let (overlay, sidebar, status_label, create_button) = build_main_layout(&controller);

        // ============================================================================
        // Header bar: mobile toggle flips the sidebar
        // ============================================================================
        let controller_for_toggle = controller.clone();
        let sidebar_for_toggle = sidebar.clone();
        let header_handlers = HeaderHandlers::new(move || {
            let open = controller_for_toggle.toggle_sidebar();
            eprintln!("☰ Sidebar {}", if open { "shown" } else { "hidden" });
            sidebar_for_toggle.set_reveal_child(open);
        });

        let (header_bar, menu_toggle) = build_header_bar(&config, header_handlers);
        window.set_titlebar(Some(&header_bar));

        // ============================================================================
        // Create menu: the controller owns is_open, the menu only reports
        // ============================================================================
        let create_menu = Rc::new_cyclic(|menu_ref: &std::rc::Weak<CreateMenu>| {
            let controller_for_close = controller.clone();
            let menu_for_close = menu_ref.clone();

            let controller_for_click = controller.clone();
            let status_for_click = status_label.clone();

            let handlers = MenuHandlers::new(
                move || {
                    controller_for_close.close_menu();
                    if let Some(menu) = menu_for_close.upgrade() {
                        menu.render(controller_for_close.is_menu_open());
                    }
                },
                move |display_name| {
                    let selection = controller_for_click.record_selection(display_name);
                    eprintln!("✅ Selected: {}", selection.display_name);
                    status_for_click.set_label(&selection.summary());
                },
            );

            CreateMenu::new(&overlay, controller.catalog(), handlers)
        });

        let controller_for_open = controller.clone();
        let menu_for_open = create_menu.clone();
        create_button.connect_clicked(move |_| {
            eprintln!("📂 Create menu opened");
            controller_for_open.open_menu();
            menu_for_open.render(controller_for_open.is_menu_open());
        });

        // ============================================================================
        // Compact layout tracking
        // ============================================================================
        let controller_for_resize = controller.clone();
        let breakpoint = config.compact_breakpoint;
        window.connect_default_width_notify(move |window| {
            let compact = is_compact(window.default_width(), breakpoint);
            if compact == menu_toggle.is_visible() {
                return;
            }

            menu_toggle.set_visible(compact);
            let open = controller_for_resize.set_compact(compact);
            sidebar.set_reveal_child(open);
        });

        window.set_child(Some(&overlay));
        window.present();
    }
}
