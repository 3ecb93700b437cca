//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! todo operation, whatever UI sits on top.
//!
//! The facade dispatches and returns structured `Result<CmdResult>` values. It
//! holds no business logic and never touches stdout or stderr.
//!
//! `TodoApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DataStore;
use std::path::PathBuf;

pub struct TodoApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn add_todo(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name)
    }

    pub fn list_todos(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn delete_todo(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, name)
    }

    pub fn edit_todo(&mut self, old_name: &str, new_name: &str) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, old_name, new_name)
    }

    pub fn set_status(&mut self, name: &str, completed: bool) -> Result<commands::CmdResult> {
        commands::status::run(&mut self.store, name, completed)
    }

    pub fn complete_todo(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::status::complete(&mut self.store, name)
    }

    pub fn uncomplete_todo(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::status::uncomplete(&mut self.store, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
