use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{duplicate_warning, find_by_name};

/// Sets the completion flag of the first todo named `name`.
///
/// Setting a flag to the value it already has still saves and succeeds.
pub fn run<S: DataStore>(store: &mut S, name: &str, completed: bool) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let index = find_by_name(&todos, name)?;
    let warning = duplicate_warning(&todos, index, name);

    if let Some(todo) = todos.get_mut(index) {
        todo.is_completed = completed;
    }
    store.save(&todos)?;

    tracing::debug!(name, completed, "set todo status");
    let verb = if completed { "completed" } else { "reopened" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Todo {} ({}): {}",
        verb,
        index + 1,
        name
    )));
    if let Some(warning) = warning {
        result.add_message(warning);
    }
    Ok(result)
}

pub fn complete<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    run(store, name, true)
}

pub fn uncomplete<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    run(store, name, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::store::memory::fixtures::{snapshot, store_with};

    #[test]
    fn complete_then_uncomplete() {
        let mut store = store_with(&[("a", false), ("b", false)]);

        complete(&mut store, "b").unwrap();
        assert_eq!(
            snapshot(&store),
            vec![("a".to_string(), false), ("b".to_string(), true)]
        );

        uncomplete(&mut store, "b").unwrap();
        assert_eq!(
            snapshot(&store),
            vec![("a".to_string(), false), ("b".to_string(), false)]
        );
    }

    #[test]
    fn completing_twice_is_idempotent() {
        let mut store = store_with(&[("a", false)]);
        complete(&mut store, "a").unwrap();
        let once = store.bytes().to_vec();

        complete(&mut store, "a").unwrap();
        assert_eq!(store.bytes(), &once[..]);
    }

    #[test]
    fn only_first_duplicate_changes() {
        let mut store = store_with(&[("dup", false), ("dup", false)]);
        complete(&mut store, "dup").unwrap();
        assert_eq!(
            snapshot(&store),
            vec![("dup".to_string(), true), ("dup".to_string(), false)]
        );
    }

    #[test]
    fn missing_name_writes_nothing() {
        let mut store = store_with(&[("a", false)]);
        let err = complete(&mut store, "b").unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
        assert_eq!(store.saves(), 0);
    }
}
