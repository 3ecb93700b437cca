use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoName;
use crate::store::DataStore;

use super::helpers::{duplicate_warning, find_by_name};

/// Renames the first todo called `old_name`. Its completion status is kept.
pub fn run<S: DataStore>(store: &mut S, old_name: &str, new_name: &str) -> Result<CmdResult> {
    let new_name = TodoName::new(new_name)?;

    let mut todos = store.load()?;
    let index = find_by_name(&todos, old_name)?;
    let warning = duplicate_warning(&todos, index, old_name);

    if let Some(todo) = todos.get_mut(index) {
        todo.name = new_name;
    }
    store.save(&todos)?;

    tracing::debug!(old = old_name, new = %new_name, "renamed todo");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Todo renamed ({}): {} -> {}",
        index + 1,
        old_name,
        new_name
    )));
    if let Some(warning) = warning {
        result.add_message(warning);
    }
    Ok(result)
}
