use colored::Colorize;
use todo::api::{CmdMessage, MessageLevel};
use todo::config::TodoConfig;
use todo::index::DisplayTodo;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_todos(todos: &[DisplayTodo]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    for dt in todos {
        let position = dt.position.to_string();
        let name = dt.todo.name.to_string();
        let mark = dt.completion_mark().to_string();

        if dt.todo.is_completed {
            println!("{}: {} [{}]", position.yellow(), name.dimmed(), mark.green());
        } else {
            println!("{}: {} [{}]", position.yellow(), name, mark);
        }
    }
}

pub(crate) fn print_config(config: &TodoConfig) {
    for key in TodoConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
