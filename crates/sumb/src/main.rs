//! # Sumb CLI
//!
//! The binary is thin: the CLI lives in `src/cli/` and this file only invokes
//! `cli::run()` and turns an error into a message and exit status 1.
//!
//! ## Workspace Structure
//!
//! - `crates/sumbapp/`: UI-agnostic core (record store, search index, ids)
//! - `crates/sumb/`: this CLI, depends on `sumbapp`
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/sumb/src/cli/)                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Handlers, stdin and $EDITOR input (commands.rs)          │
//! │  - Tree / note rendering with a colour palette (render.rs)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/sumbapp/src/api.rs)                      │
//! │  - Opens store + index, dispatches, returns `CmdResult`     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns argument
//! parsing, logging setup, rendering and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
