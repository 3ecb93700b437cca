//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the command layer and persistence.
//! Every command works on a whole [`TodoList`]: it loads the list, changes it in
//! memory and saves all of it back. There is no partial update and no cached state
//! between operations.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single flat binary file
//!   - The file is a plain sequence of fixed-width blocks (see [`crate::codec`])
//!   - A missing file loads as an empty list; the first save creates it
//!   - Each save truncates and rewrites the file in full
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Holds the encoded byte image, so tests go through the same codec
//!   - Counts saves, which lets tests assert that failed operations wrote nothing
//!
//! ## Concurrency
//!
//! Stores assume a single process. There is no locking: two processes that
//! interleave a load and a save can lose an update.

use crate::error::Result;
use crate::model::TodoList;

pub mod fs;
pub mod memory;

/// Abstract interface for todo storage.
pub trait DataStore {
    /// Load the full list. A store with nothing persisted yet yields an empty list.
    fn load(&self) -> Result<TodoList>;

    /// Replace everything persisted with `todos`.
    fn save(&mut self, todos: &TodoList) -> Result<()>;
}
