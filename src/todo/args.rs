use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo", version, arg_required_else_help = true)]
#[command(about = "A tiny task list kept in a flat binary file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data file to operate on (default: todo.bin, or `data-file` from todo.json)
    #[arg(short, long, global = true, env = "TODO_FILE")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    #[command(alias = "a")]
    Add {
        /// Name of the todo (at most 31 bytes)
        name: String,
    },

    /// List todos
    #[command(alias = "ls")]
    List,

    /// Delete the first todo with this name
    #[command(alias = "rm")]
    Delete {
        /// Name of the todo
        name: String,
    },

    /// Rename the first todo with this name
    #[command(alias = "e")]
    Edit {
        /// Current name
        old_name: String,

        /// New name (at most 31 bytes)
        new_name: String,
    },

    /// Mark a todo as complete
    #[command(alias = "done")]
    Complete {
        /// Name of the todo
        name: String,
    },

    /// Mark a todo as not complete
    #[command(alias = "undo")]
    Uncomplete {
        /// Name of the todo
        name: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_edit_with_global_file() {
        let cli = Cli::try_parse_from(["todo", "edit", "old", "new", "-f", "x.bin"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("x.bin")));
        assert!(matches!(
            cli.command,
            Commands::Edit { ref old_name, ref new_name } if old_name == "old" && new_name == "new"
        ));
    }

    #[test]
    fn add_requires_a_name() {
        assert!(Cli::try_parse_from(["todo", "add"]).is_err());
    }

    #[test]
    fn aliases_resolve() {
        let cli = Cli::try_parse_from(["todo", "rm", "x"]).unwrap();
        assert!(matches!(cli.command, Commands::Delete { .. }));
        let cli = Cli::try_parse_from(["todo", "ls"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }
}
