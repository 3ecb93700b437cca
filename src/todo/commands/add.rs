use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Todo, TodoName};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = TodoName::new(name)?;

    let mut todos = store.load()?;
    let todo = Todo::new(name);
    todos.push(todo)?;
    store.save(&todos)?;

    tracing::debug!(name = %todo.name, count = todos.len(), "added todo");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Todo added ({}): {}",
        todos.len(),
        todo.name
    )));
    Ok(result)
}
