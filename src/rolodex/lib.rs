//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic address book library**. It keeps an ordered list
//! of contact records in memory, edits them through a stage-then-commit
//! protocol, and persists the whole list as an XML document. The `rolodex`
//! binary is one client of it; a desktop or web front end would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Commands (commands/*.rs)              │
//! │  - Display indexes → positions, sessions → commits          │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - RecordCollection + EditSession (in-memory state)         │
//! │  - Codec + PersistenceGateway + PreferenceStore (files)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - Collection mutators apply completely or not at all.
//! - A cancelled [`EditSession`](session::EditSession) leaves the collection untouched.
//! - A file that fails to load changes neither the collection nor the
//!   remembered path.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user-level operation
//! - [`collection`]: The ordered record list and its observers
//! - [`session`]: Create/edit sessions
//! - [`codec`]: XML encoding and decoding
//! - [`schema`]: Field table shared by codec and sessions
//! - [`gateway`]: File load/save and the remembered path
//! - [`atomic`]: Tmp-then-rename file writes
//! - [`prefs`]: Preference stores
//! - [`model`]: The `Record` type
//! - [`config`]: Startup configuration
//! - [`error`]: Error types

pub mod api;
pub mod atomic;
pub mod codec;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod prefs;
pub mod schema;
pub mod session;
