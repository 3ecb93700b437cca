use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_todos;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let todos = store.load()?;
    Ok(CmdResult::default().with_listed_todos(index_todos(&todos)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::store_with;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_insertion_order() {
        let store = store_with(&[("a", false), ("b", true), ("c", false)]);
        let result = run(&store).unwrap();

        let listed: Vec<_> = result
            .listed_todos
            .iter()
            .map(|dt| (dt.position, dt.todo.name.to_string(), dt.completion_mark()))
            .collect();
        assert_eq!(
            listed,
            vec![
                (1, "a".to_string(), ' '),
                (2, "b".to_string(), 'x'),
                (3, "c".to_string(), ' '),
            ]
        );
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().listed_todos.is_empty());
    }

    #[test]
    fn listing_never_saves() {
        let store = store_with(&[("a", false)]);
        run(&store).unwrap();
        assert_eq!(store.saves(), 0);
    }
}
