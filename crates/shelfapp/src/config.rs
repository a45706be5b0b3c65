//! # Configuration
//!
//! Configuration is managed by [`confique`], which layers values from
//! environment variables over an optional TOML file over compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SHELF_DATA_DIR`, `SHELF_BIND`, `ADMIN_USERNAME`, ...
//! 2. **Config file**: `shelf.toml` (path chosen by the caller, missing file is fine).
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `log_level` | `SHELF_LOG_LEVEL` | `info` |
//! | `store.data_dir` | `SHELF_DATA_DIR` | `data` |
//! | `store.file_name` | `SHELF_FILE_NAME` | `products.json` |
//! | `store.placeholder_image` | `SHELF_PLACEHOLDER_IMAGE` | `/placeholder.svg?height=300&width=300` |
//! | `server.bind` | `SHELF_BIND` | `127.0.0.1:3000` |
//! | `server.admin_username` | `ADMIN_USERNAME` | unset |
//! | `server.admin_password` | `ADMIN_PASSWORD` | unset |
//! | `server.secure_cookies` | `SHELF_SECURE_COOKIES` | `false` |
//!
//! Admin login is refused until both credentials are set.

use crate::error::{Result, ShelfError};
use crate::model::PLACEHOLDER_IMAGE;
use crate::store::fs_backend::DEFAULT_FILE_NAME;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "shelf.toml";

/// Top-level configuration, stored in `shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Default log filter when RUST_LOG is not set (e.g. "info", "shelf=debug").
    #[config(default = "info", env = "SHELF_LOG_LEVEL")]
    pub log_level: String,

    #[config(nested)]
    pub store: StoreConfig,

    #[config(nested)]
    pub server: ServerConfig,
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the catalog document. Created on first use.
    #[config(default = "data", env = "SHELF_DATA_DIR")]
    pub data_dir: PathBuf,

    /// File name of the catalog document inside `data_dir`.
    #[config(default = "products.json", env = "SHELF_FILE_NAME")]
    pub file_name: String,

    /// Image used for products created without one.
    #[config(
        default = "/placeholder.svg?height=300&width=300",
        env = "SHELF_PLACEHOLDER_IMAGE"
    )]
    pub placeholder_image: String,
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    #[config(default = "127.0.0.1:3000", env = "SHELF_BIND")]
    pub bind: String,

    /// Admin login name. Login is disabled while unset.
    #[config(env = "ADMIN_USERNAME")]
    pub admin_username: Option<String>,

    /// Admin password. Login is disabled while unset.
    #[config(env = "ADMIN_PASSWORD")]
    pub admin_password: Option<String>,

    /// Mark the admin cookie `Secure` (enable behind HTTPS).
    #[config(default = false, env = "SHELF_SECURE_COOKIES")]
    pub secure_cookies: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            store: StoreConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            file_name: DEFAULT_FILE_NAME.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            admin_username: None,
            admin_password: None,
            secure_cookies: false,
        }
    }
}

impl ShelfConfig {
    /// Load from the environment, then `file` if given (a missing file is skipped).
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = ShelfConfig::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// A commented `shelf.toml` listing every setting with its default.
    pub fn template() -> String {
        confique::toml::template::<ShelfConfig>(confique::toml::FormatOptions::default())
    }
}

impl ServerConfig {
    /// Both credentials, when configured.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (self.admin_username.as_deref(), self.admin_password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Some((user, pass)),
            _ => None,
        }
    }
}
