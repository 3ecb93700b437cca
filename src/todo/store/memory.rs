use super::DataStore;
use crate::codec::{self, MAX_IMAGE_LEN};
use crate::error::Result;
use crate::model::TodoList;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Keeps the same byte image a [`super::fs::FileStore`] would write, so loads
/// and saves go through the codec exactly like the file-backed store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    bytes: Vec<u8>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an arbitrary byte image, e.g. a corrupt or oversized file.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes, saves: 0 }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of successful saves since creation.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<TodoList> {
        let end = self.bytes.len().min(MAX_IMAGE_LEN);
        Ok(codec::decode_all(&self.bytes[..end]))
    }

    fn save(&mut self, todos: &TodoList) -> Result<()> {
        self.bytes = codec::encode_all(todos);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Todo, TodoName};

    /// A store pre-populated with todos, in the given order.
    pub fn store_with(entries: &[(&str, bool)]) -> InMemoryStore {
        let mut list = TodoList::new();
        for (name, done) in entries {
            let mut todo = Todo::new(TodoName::new(name).unwrap());
            todo.is_completed = *done;
            list.push(todo).unwrap();
        }
        InMemoryStore::with_bytes(codec::encode_all(&list))
    }

    /// Names and completion flags currently stored, in order.
    pub fn snapshot(store: &InMemoryStore) -> Vec<(String, bool)> {
        store
            .load()
            .unwrap()
            .iter()
            .map(|t| (t.name.to_string(), t.is_completed))
            .collect()
    }
}
