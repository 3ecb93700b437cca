//! # Todo Architecture
//!
//! A small task list kept in one flat binary file. The core is a library; the
//! `todo` binary is one thin client on top of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → validate → mutate → save, one operation each      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - DataStore trait, FileStore and InMemoryStore             │
//! │  - Fixed-width record blocks, no header                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Limits
//!
//! A list holds at most [`model::CAPACITY`] todos and a name is at most
//! [`model::MAX_NAME_LEN`] bytes. Both are enforced with errors, never by
//! truncating. Names need not be unique; lookups by name resolve to the first
//! match in insertion order.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: On-disk record layout
//! - [`model`]: `Todo`, `TodoName`, `TodoList`
//! - [`index`]: 1-based display positions
//! - [`config`]: `todo.json` configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
