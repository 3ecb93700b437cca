use crate::commands::CmdMessage;
use crate::error::{Result, TodoError};
use crate::model::TodoList;

/// Position of the first todo named `name`.
///
/// Duplicates are allowed, so the earliest-inserted match always wins.
pub fn find_by_name(todos: &TodoList, name: &str) -> Result<usize> {
    todos
        .position(name)
        .ok_or_else(|| TodoError::NotFound(name.to_string()))
}

/// Warns when `name` still matches a todo after the one at `index`.
pub fn duplicate_warning(todos: &TodoList, index: usize, name: &str) -> Option<CmdMessage> {
    let others = todos.iter().skip(index + 1).filter(|t| t.name.matches(name)).count();
    (others > 0).then(|| {
        CmdMessage::warning(format!(
            "{} more todo(s) named `{}` left untouched",
            others, name
        ))
    })
}
