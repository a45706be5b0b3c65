//! # CLI Layer
//!
//! This module is **one possible UI client** for the catalog: the admin console.
//!
//! The CLI layer is the place that:
//! - Parses arguments (clap, `setup.rs`)
//! - Loads configuration and installs logging
//! - Dispatches to the API facade (`handlers.rs`)
//! - Formats output for humans or as JSON (`render.rs`)
//! - Turns failures into `Error: ...` and a non-zero exit code (via `main.rs`)

mod handlers;
mod render;
mod setup;

use crate::logging;
use clap::Parser;
use setup::{Cli, Commands};
use shelfapp::api::ShelfApi;
use shelfapp::config::{ShelfConfig, CONFIG_FILE_NAME};
use shelfapp::store::fs::FileStore;
use std::path::PathBuf;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let mut config = ShelfConfig::load(Some(&config_path))?;
    if let Some(data) = &cli.data {
        config.store.data_dir = data.clone();
    }

    // One-shot admin commands stay quiet unless something goes wrong
    let command = cli.command.unwrap_or(Commands::List {
        category: None,
        json: false,
    });
    let level = match command {
        Commands::Serve { .. } => config.log_level.clone(),
        _ => "warn".to_string(),
    };
    logging::init(&level, cli.verbose)?;

    handlers::dispatch(command, config)
}

/// File-backed API configured from `config.store`.
pub fn build_api(config: &ShelfConfig) -> ShelfApi<FileStore> {
    let store = FileStore::with_file_name(config.store.data_dir.clone(), &config.store.file_name);
    ShelfApi::new(store).with_placeholder_image(config.store.placeholder_image.clone())
}
