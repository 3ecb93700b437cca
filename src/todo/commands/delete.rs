use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::{duplicate_warning, find_by_name};

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let mut todos = store.load()?;
    let index = find_by_name(&todos, name)?;
    let warning = duplicate_warning(&todos, index, name);

    let mut result = CmdResult::default();
    if let Some(removed) = todos.remove(index) {
        store.save(&todos)?;
        tracing::debug!(name, position = index + 1, "deleted todo");
        result.add_message(CmdMessage::success(format!(
            "Todo deleted ({}): {}",
            index + 1,
            removed.name
        )));
    }
    if let Some(warning) = warning {
        result.add_message(warning);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::TodoError;
    use crate::store::memory::fixtures::{snapshot, store_with};

    #[test]
    fn survivors_keep_order_and_renumber() {
        let mut store = store_with(&[("A", false), ("B", false), ("C", true)]);
        run(&mut store, "B").unwrap();

        let listed: Vec<_> = list::run(&store)
            .unwrap()
            .listed_todos
            .into_iter()
            .map(|dt| (dt.position, dt.todo.name.to_string()))
            .collect();
        assert_eq!(listed, vec![(1, "A".to_string()), (2, "C".to_string())]);
    }

    #[test]
    fn removes_first_of_duplicates() {
        let mut store = store_with(&[("dup", false), ("dup", true)]);
        let result = run(&mut store, "dup").unwrap();

        assert_eq!(snapshot(&store), vec![("dup".to_string(), true)]);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn missing_name_writes_nothing() {
        let mut store = store_with(&[("a", false)]);
        let before = store.bytes().to_vec();

        let err = run(&mut store, "b").unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
        assert_eq!(store.bytes(), &before[..]);
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn deleting_last_todo_leaves_empty_list() {
        let mut store = store_with(&[("only", false)]);
        run(&mut store, "only").unwrap();
        assert!(store.bytes().is_empty());
    }
}
