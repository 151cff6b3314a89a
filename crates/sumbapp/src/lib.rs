//! # Sumb Architecture
//!
//! sumbapp is the **UI-agnostic core** of sumb, a terminal note keeper. The
//! `sumb` binary is one client of it; nothing in here knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Opens the record store + search index for one operation  │
//! │  - Dispatches to commands, returns `Result<CmdResult>`      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / update / delete / get / list / search           │
//! │  - reindex / doctor for store ↔ index reconciliation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────┬──────────────────────────────────┐
//! │  Record Store (store/)   │  Search Index (search/)          │
//! │  authoritative, redb     │  derived, tantivy                │
//! │  + id sequence counter   │  rebuildable from the store      │
//! └──────────────────────────┴──────────────────────────────────┘
//! ```
//!
//! ## Consistency
//!
//! Every mutation writes the record store first and the search index second.
//! The two writes are not one transaction. If the second fails the caller gets
//! the error and the record stays put; the index is then behind the store until
//! `reindex` (or `doctor --fix`) rebuilds it. A search that hits an id the store
//! no longer has fails with [`error::SumbError::IndexInconsistency`].
//!
//! ## Ids
//!
//! Ids are allocated by [`sequence`] from a counter kept inside the record
//! store, strictly increasing and never reused. Stored as 8-byte big-endian keys,
//! they sort numerically, so "latest notes" is a reverse key scan.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`store`]: Record store trait and implementations
//! - [`search`]: Search index trait and implementations
//! - [`sequence`]: Identifier allocation
//! - [`model`]: `Note` and its persisted form
//! - [`config`]: Settings in `config.json`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod search;
pub mod sequence;
pub mod store;
