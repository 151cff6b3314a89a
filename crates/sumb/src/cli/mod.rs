//! # CLI Behavior
//!
//! This is **one possible UI client** for sumb, not the application itself.
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Creating Notes
//!
//! The note body comes from the first source that is present:
//!
//! 1. `-m/--body "text"` or words after `create` (`sumb create buy milk`)
//! 2. `sumb create -`, or anything piped in (`echo "buy milk" | sumb create`)
//! 3. `$EDITOR`, opened on an empty buffer
//!
//! An empty body cancels the create. `edit` works the same way on the existing
//! body, and saving it unchanged leaves the note alone.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `editor`: `$EDITOR` integration
//! - `render`: Tree and note views, colours
//! - `setup`: Argument parsing via clap

mod commands;
mod editor;
mod render;
pub mod setup;

pub use commands::run;
