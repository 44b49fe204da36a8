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

//! src/core/catalog.rs
//!
//! The fixed catalog of document-creation shortcuts
//!
//! The standard catalog is a compile-time `static` table. It is never
//! mutated, persisted or serialised; components borrow it for the lifetime
//! of the process.
//!
//! # Uniqueness
//!
//! Section ids are unique across the catalog. Item ids are only unique
//! inside their own section, which is why the purchases refund entry is
//! `refunds-purchases` rather than a second `refunds`.

use std::collections::HashSet;
use thiserror::Error;

use crate::core::types::{MenuIcon, MenuItem, MenuSection};

/// Errors raised when a catalog breaks its uniqueness invariants
#[derive(Debug, Error, Eq, PartialEq)]
pub enum CatalogError {
    /// Two sections share the same id
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),
    /// Two items in one section share the same id
    #[error("Duplicate item id '{item}' in section '{section}'")]
    DuplicateItem { section: String, item: String },
}

const SALES_ITEMS: &[MenuItem] = &[
    MenuItem::new("invoice", "Invoice"),
    MenuItem::new("estimate", "Estimate"),
    MenuItem::new("sales-receipt", "Sales Receipt"),
    MenuItem::new("credit-note", "Credit Note"),
    MenuItem::new("refunds", "Refunds"),
];

const PURCHASE_ITEMS: &[MenuItem] = &[
    MenuItem::new("bill", "Bill"),
    MenuItem::new("purchase-order", "Purchase Order"),
    MenuItem::new("expense", "Expense"),
    MenuItem::new("debit-note", "Debit Note"),
    MenuItem::new("refunds-purchases", "Refunds"),
];

const PAYMENT_ITEMS: &[MenuItem] = &[
    MenuItem::new("receive-payment", "Receive Payment"),
    MenuItem::new("make-payment", "Make Payment"),
    MenuItem::new("transfer", "Transfer Funds"),
    MenuItem::new("journal-entry", "Journal Entry"),
];

const CUSTOMER_ITEMS: &[MenuItem] = &[
    MenuItem::new("customer", "Customer"),
    MenuItem::new("vendor", "Vendor"),
    MenuItem::new("statement", "Customer Statement"),
];

const STANDARD_SECTIONS: &[MenuSection] = &[
    MenuSection::new("sales", "Sales", MenuIcon::Receipt, SALES_ITEMS),
    MenuSection::new("purchases", "Purchases", MenuIcon::Cart, PURCHASE_ITEMS),
    MenuSection::new("payments", "Payments", MenuIcon::Wallet, PAYMENT_ITEMS),
    MenuSection::new("customers", "Customers", MenuIcon::People, CUSTOMER_ITEMS),
];

static STANDARD_CATALOG: Catalog = Catalog {
    sections: STANDARD_SECTIONS,
};

/// Ordered, immutable collection of menu sections
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Catalog {
    sections: &'static [MenuSection],
}

impl Catalog {
    /// Builds a catalog after checking its uniqueness invariants
    ///
    /// # Returns
    ///
    /// * `Ok(Catalog)` - Section ids and per-section item ids are unique
    /// * `Err(CatalogError)` - The first duplicate found, in catalog order
    ///
    /// # Example
    ///
    /// ```
    /// use ledgerline_shell::core::{Catalog, MenuIcon, MenuItem, MenuSection};
    ///
    /// const ITEMS: &[MenuItem] = &[MenuItem::new("invoice", "Invoice")];
    /// const SECTIONS: &[MenuSection] =
    ///     &[MenuSection::new("sales", "Sales", MenuIcon::Receipt, ITEMS)];
    ///
    /// let catalog = Catalog::new(SECTIONS)?;
    /// assert_eq!(catalog.len(), 1);
    /// # Ok::<(), ledgerline_shell::core::CatalogError>(())
    /// ```
    pub fn new(sections: &'static [MenuSection]) -> Result<Self, CatalogError> {
        let catalog = Self { sections };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Returns the built-in catalog (Sales, Purchases, Payments, Customers)
    pub fn standard() -> &'static Catalog {
        &STANDARD_CATALOG
    }

    /// Checks section id and per-section item id uniqueness
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut section_ids = HashSet::new();

        for section in self.sections {
            if !section_ids.insert(section.id) {
                return Err(CatalogError::DuplicateSection(section.id.to_string()));
            }

            // Item ids are scoped to their section
            let mut item_ids = HashSet::new();
            for item in section.items {
                if !item_ids.insert(item.id) {
                    return Err(CatalogError::DuplicateItem {
                        section: section.id.to_string(),
                        item: item.id.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Sections in display order
    pub fn sections(&self) -> &'static [MenuSection] {
        self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn find_section(&self, section_id: &str) -> Option<&'static MenuSection> {
        self.sections.iter().find(|section| section.id == section_id)
    }

    /// Looks up an item by section id and item id
    ///
    /// Both ids are needed since item ids repeat across sections.
    pub fn find_item(&self, section_id: &str, item_id: &str) -> Option<&'static MenuItem> {
        self.find_section(section_id)
            .and_then(|section| section.find_item(item_id))
    }

    /// Every `(section, item)` pair in catalog order
    pub fn items(&self) -> impl Iterator<Item = (&'static MenuSection, &'static MenuItem)> {
        self.sections
            .iter()
            .flat_map(|section| section.items.iter().map(move |item| (section, item)))
    }
}
