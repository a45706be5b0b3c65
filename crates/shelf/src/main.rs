//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, the HTTP server
//! in `src/server/`, and this file only invokes `cli::run()` and handles process
//! termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  shelf binary                                               │
//! │  - cli/: clap parsing, dispatch, terminal rendering         │
//! │  - server/: axum routes, admin cookie gate, JSON errors     │
//! │  - logging.rs: tracing subscriber setup                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  shelfapp::api::ShelfApi                                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `ShelfApi` inward is UI agnostic. This crate owns every
//! user-facing concern: argument parsing, configuration loading, output, exit codes.

mod cli;
mod logging;
mod server;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
