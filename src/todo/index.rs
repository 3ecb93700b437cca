//! Display positions for todos.
//!
//! Positions are 1-based and follow insertion order. They are not stable
//! identifiers: deleting a todo renumbers every todo after it.

use crate::model::{Todo, TodoList};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub position: usize,
    pub todo: Todo,
}

impl DisplayTodo {
    /// `'x'` for done, a space for pending.
    pub fn completion_mark(&self) -> char {
        if self.todo.is_completed {
            'x'
        } else {
            ' '
        }
    }
}

impl fmt::Display for DisplayTodo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}]",
            self.position,
            self.todo.name,
            self.completion_mark()
        )
    }
}

pub fn index_todos(todos: &TodoList) -> Vec<DisplayTodo> {
    todos
        .iter()
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            position: i + 1,
            todo: *todo,
        })
        .collect()
}
