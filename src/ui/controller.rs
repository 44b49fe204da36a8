//! Shell Controller - owns the state the presentational components are driven by
//!
//! # Responsibilities
//!
//! - Own the create menu's `is_open` flag
//! - Track sidebar visibility across compact/wide layouts
//! - Remember the last document type the user picked
//!
//! # Architecture
//!
//! The Controller doesn't know about GTK4 widgets. The header and the
//! create menu report interactions through callbacks; the App forwards them
//! here and re-renders from the resulting state.

use chrono::{DateTime, Local};
use std::cell::{Cell, RefCell};

use crate::core::Catalog;

/// A document type picked from the create menu
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Display name reported by the menu (not unique across sections)
    pub display_name: String,
    /// When the pick happened
    pub created_at: DateTime<Local>,
}

impl Selection {
    /// One-line status text, e.g. "New Invoice (14:30:25)"
    pub fn summary(&self) -> String {
        format!(
            "New {} ({})",
            self.display_name,
            self.created_at.format("%H:%M:%S")
        )
    }
}

/// Controller coordinating shell state and the View
pub struct ShellController {
    /// Catalog rendered by the create menu
    catalog: &'static Catalog,
    /// Create menu visibility (the menu never changes this itself)
    menu_open: Cell<bool>,
    /// Sidebar visibility
    sidebar_open: Cell<bool>,
    /// Most recent pick from the create menu
    last_selection: RefCell<Option<Selection>>,
}

impl Default for ShellController {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl ShellController {
    /// Creates a controller with the menu closed and the sidebar shown
    ///
    /// # Example
    ///
    /// ```
    /// use ledgerline_shell::core::Catalog;
    /// use ledgerline_shell::ui::ShellController;
    ///
    /// let controller = ShellController::new(Catalog::standard());
    /// controller.open_menu();
    /// assert!(controller.is_menu_open());
    /// ```
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            menu_open: Cell::new(false),
            sidebar_open: Cell::new(true),
            last_selection: RefCell::new(None),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn open_menu(&self) {
        self.menu_open.set(true);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    /// Flips sidebar visibility
    ///
    /// # Returns
    ///
    /// The new visibility
    pub fn toggle_sidebar(&self) -> bool {
        let open = !self.sidebar_open.get();
        self.sidebar_open.set(open);
        open
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open.get()
    }

    /// Applies a layout change
    ///
    /// Entering the compact layout hides the sidebar (the header toggle
    /// brings it back); leaving it always shows the sidebar.
    ///
    /// # Returns
    ///
    /// The resulting sidebar visibility
    pub fn set_compact(&self, compact: bool) -> bool {
        self.sidebar_open.set(!compact);
        !compact
    }

    /// Stores a pick from the create menu, stamped with the local time
    pub fn record_selection(&self, display_name: &str) -> Selection {
        let selection = Selection {
            display_name: display_name.to_string(),
            created_at: Local::now(),
        };

        *self.last_selection.borrow_mut() = Some(selection.clone());
        selection
    }

    pub fn last_selection(&self) -> Option<Selection> {
        self.last_selection.borrow().clone()
    }
}
