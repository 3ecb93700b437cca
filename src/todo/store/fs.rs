use super::DataStore;
use crate::codec::{self, MAX_IMAGE_LEN};
use crate::error::{Result, TodoError};
use crate::model::TodoList;
use std::fs::{self, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// File name used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "todo.bin";

/// A store backed by one flat binary file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<TodoList> {
        load(&self.path)
    }

    fn save(&mut self, todos: &TodoList) -> Result<()> {
        save(&self.path, todos)
    }
}

/// Reads the list stored at `path`.
///
/// A missing file is an empty list. At most [`crate::model::CAPACITY`] records are
/// read; a trailing partial block and anything past the cap are dropped.
pub fn load(path: &Path) -> Result<TodoList> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no todo file yet, starting empty");
            return Ok(TodoList::new());
        }
        Err(e) => return Err(TodoError::Io(e)),
    };

    // One byte past a full image tells us whether the file was over capacity.
    let mut bytes = Vec::with_capacity(MAX_IMAGE_LEN);
    file.take(MAX_IMAGE_LEN as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(TodoError::Io)?;

    if bytes.len() > MAX_IMAGE_LEN {
        tracing::warn!(
            path = %path.display(),
            "todo file holds more than {} records, ignoring the rest",
            crate::model::CAPACITY
        );
        bytes.truncate(MAX_IMAGE_LEN);
    }

    let trailing = codec::trailing_len(&bytes);
    if trailing > 0 {
        tracing::warn!(
            path = %path.display(),
            trailing,
            "todo file ends with a partial record, ignoring it"
        );
    }

    let todos = codec::decode_all(&bytes);
    tracing::debug!(path = %path.display(), count = todos.len(), "loaded todos");
    Ok(todos)
}

/// Truncates `path` and writes every todo in `todos` to it, in order.
pub fn save(path: &Path, todos: &TodoList) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(TodoError::Io)?;
        }
    }

    let bytes = codec::encode_all(todos);
    let mut file = File::create(path).map_err(TodoError::Io)?;
    file.write_all(&bytes).map_err(TodoError::Io)?;
    file.flush().map_err(TodoError::Io)?;

    tracing::debug!(path = %path.display(), count = todos.len(), "saved todos");
    Ok(())
}
