use crate::error::{Result, TodoError};
use std::borrow::Cow;
use std::fmt;

/// Width of the on-disk name buffer, terminator included.
pub const NAME_LEN: usize = 32;

/// Longest name that still leaves room for the terminator.
pub const MAX_NAME_LEN: usize = NAME_LEN - 1;

/// Maximum number of todos a list may hold.
pub const CAPACITY: usize = 128;

/// A task name held in its fixed-width, zero-padded form.
///
/// Every byte after the logical end of the name is zero, so two names with equal
/// text are equal byte for byte no matter how they were produced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoName {
    buf: [u8; NAME_LEN],
}

impl TodoName {
    /// Validates `name` and packs it into a zero-padded buffer.
    ///
    /// Names longer than [`MAX_NAME_LEN`] bytes are rejected rather than truncated.
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(TodoError::InvalidName("name cannot be empty".into()));
        }
        if name.as_bytes().contains(&0) {
            return Err(TodoError::InvalidName(format!(
                "`{}` contains a NUL byte",
                name.escape_debug()
            )));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(TodoError::NameTooLong {
                name: name.to_string(),
                max: MAX_NAME_LEN,
            });
        }

        let mut buf = [0u8; NAME_LEN];
        buf[..name.len()].copy_from_slice(name.as_bytes());
        Ok(Self { buf })
    }

    /// Rebuilds a name from a raw buffer read off disk.
    ///
    /// Anything after the first terminator is cleared, and the last byte is always
    /// treated as the terminator.
    pub(crate) fn from_buffer(raw: [u8; NAME_LEN]) -> Self {
        let end = raw[..MAX_NAME_LEN]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_NAME_LEN);
        let mut buf = [0u8; NAME_LEN];
        buf[..end].copy_from_slice(&raw[..end]);
        Self { buf }
    }

    /// The full fixed-width buffer, padding included.
    pub fn buffer(&self) -> &[u8; NAME_LEN] {
        &self.buf
    }

    /// The meaningful bytes, up to the first terminator.
    pub fn as_bytes(&self) -> &[u8] {
        let end = self.buf.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        &self.buf[..end]
    }

    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    pub fn matches(&self, name: &str) -> bool {
        self.as_bytes() == name.as_bytes()
    }
}

impl fmt::Display for TodoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl fmt::Debug for TodoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TodoName({:?})", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Todo {
    pub name: TodoName,
    pub is_completed: bool,
}

impl Todo {
    pub fn new(name: TodoName) -> Self {
        Self {
            name,
            is_completed: false,
        }
    }
}

/// An ordered, bounded collection of todos.
///
/// Insertion order is both the display order and the on-disk order. The list
/// never holds more than [`CAPACITY`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            todos: Vec::with_capacity(CAPACITY),
        }
    }

    /// Builds a list from the first [`CAPACITY`] todos of `todos`; the rest are dropped.
    pub fn from_prefix(todos: impl IntoIterator<Item = Todo>) -> Self {
        let mut list = Self::new();
        list.todos.extend(todos.into_iter().take(CAPACITY));
        list
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.todos.len() >= CAPACITY
    }

    pub fn push(&mut self, todo: Todo) -> Result<()> {
        if self.is_full() {
            return Err(TodoError::CapacityExceeded(CAPACITY));
        }
        self.todos.push(todo);
        Ok(())
    }

    /// Removes the todo at `index`, shifting everything after it one slot earlier.
    pub fn remove(&mut self, index: usize) -> Option<Todo> {
        if index < self.todos.len() {
            Some(self.todos.remove(index))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Todo> {
        self.todos.get_mut(index)
    }

    /// Index of the first todo named `name`, scanning in insertion order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.todos.iter().position(|t| t.name.matches(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(name: &str) -> Todo {
        Todo::new(TodoName::new(name).unwrap())
    }

    #[test]
    fn name_is_zero_padded() {
        let name = TodoName::new("milk").unwrap();
        assert_eq!(&name.buffer()[..4], b"milk");
        assert!(name.buffer()[4..].iter().all(|&b| b == 0));
        assert_eq!(name.as_str(), "milk");
    }

    #[test]
    fn name_at_max_length_is_accepted() {
        let name = "a".repeat(MAX_NAME_LEN);
        let parsed = TodoName::new(&name).unwrap();
        assert_eq!(parsed.as_bytes().len(), MAX_NAME_LEN);
        assert_eq!(parsed.buffer()[MAX_NAME_LEN], 0);
    }

    #[test]
    fn name_filling_the_buffer_is_rejected() {
        let name = "a".repeat(NAME_LEN);
        assert!(matches!(
            TodoName::new(&name),
            Err(TodoError::NameTooLong { max: MAX_NAME_LEN, .. })
        ));
    }

    #[test]
    fn length_is_counted_in_bytes() {
        // 16 two-byte characters
        let name = "é".repeat(16);
        assert!(matches!(
            TodoName::new(&name),
            Err(TodoError::NameTooLong { .. })
        ));
    }

    #[test]
    fn empty_and_nul_names_are_rejected() {
        assert!(matches!(TodoName::new(""), Err(TodoError::InvalidName(_))));
        assert!(matches!(
            TodoName::new("a\0b"),
            Err(TodoError::InvalidName(_))
        ));
    }

    #[test]
    fn from_buffer_clears_bytes_after_terminator() {
        let mut raw = [0u8; NAME_LEN];
        raw[..3].copy_from_slice(b"abc");
        raw[10] = b'z';
        let name = TodoName::from_buffer(raw);
        assert_eq!(name, TodoName::new("abc").unwrap());
    }

    #[test]
    fn from_buffer_forces_terminator() {
        let raw = [b'q'; NAME_LEN];
        let name = TodoName::from_buffer(raw);
        assert_eq!(name.as_bytes().len(), MAX_NAME_LEN);
    }

    #[test]
    fn push_stops_at_capacity() {
        let mut list = TodoList::new();
        for i in 0..CAPACITY {
            list.push(todo(&format!("t{}", i))).unwrap();
        }
        assert!(list.is_full());
        assert!(matches!(
            list.push(todo("overflow")),
            Err(TodoError::CapacityExceeded(CAPACITY))
        ));
        assert_eq!(list.len(), CAPACITY);
    }

    #[test]
    fn from_prefix_keeps_first_capacity_entries() {
        let list = TodoList::from_prefix((0..CAPACITY + 5).map(|i| todo(&format!("t{}", i))));
        assert_eq!(list.len(), CAPACITY);
        assert_eq!(list.position("t0"), Some(0));
        assert_eq!(list.position(&format!("t{}", CAPACITY)), None);
    }

    #[test]
    fn remove_shifts_later_entries() {
        let mut list = TodoList::new();
        for name in ["a", "b", "c"] {
            list.push(todo(name)).unwrap();
        }
        let removed = list.remove(1).unwrap();
        assert!(removed.name.matches("b"));
        let names: Vec<_> = list.iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert!(list.remove(5).is_none());
    }

    #[test]
    fn position_returns_first_match() {
        let mut list = TodoList::new();
        list.push(todo("dup")).unwrap();
        let mut second = todo("dup");
        second.is_completed = true;
        list.push(second).unwrap();
        assert_eq!(list.position("dup"), Some(0));
        assert_eq!(list.position("missing"), None);
    }
}
