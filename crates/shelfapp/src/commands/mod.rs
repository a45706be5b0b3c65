//! # Command Layer
//!
//! This module contains the business logic behind each catalog operation. Each
//! command lives in its own submodule and is a plain function over a [`DataStore`].
//!
//! Commands:
//! - operate on `Product` / `Catalog` values and return a structured [`CmdResult`]
//! - never print, never exit, never parse arguments
//! - receive fully validated input (validation happens in the API facade)
//!
//! Command tests use `InMemoryStore` so no filesystem is needed.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a product to a category
//! - [`delete`]: Remove a product by category and id
//! - [`list`]: Full catalog, one category, or the category keys
//! - [`doctor`]: Strict health check of the persisted document
//! - [`init`]: Create the data directory and an empty catalog
//!
//! [`DataStore`]: crate::store::DataStore

use crate::model::{Catalog, Product};
use crate::store::HealthReport;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod doctor;
pub mod init;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Products created or removed by the command.
    pub affected_products: Vec<Product>,
    /// Products to display, in rank order.
    pub listed_products: Vec<Product>,
    /// Full catalog, for commands that list everything.
    pub catalog: Option<Catalog>,
    pub categories: Vec<String>,
    pub health: Option<HealthReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// True if any message is an error.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
