use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use todo::api::{ConfigAction, TodoApi};
use todo::config::TodoConfig;
use todo::error::Result;
use todo::logging;
use todo::store::fs::FileStore;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_config, print_messages, print_todos};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TodoApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add { name } => handle_add(&mut ctx, &name),
        Commands::List => handle_list(&ctx),
        Commands::Delete { name } => handle_delete(&mut ctx, &name),
        Commands::Edit { old_name, new_name } => handle_edit(&mut ctx, &old_name, &new_name),
        Commands::Complete { name } => handle_status(&mut ctx, &name, true),
        Commands::Uncomplete { name } => handle_status(&mut ctx, &name, false),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = TodoConfig::load(&cwd)?;
    let store = FileStore::new(config.resolve_data_file(&cwd, cli.file.as_deref()));
    tracing::debug!(path = %store.path().display(), "using todo file");

    Ok(AppContext {
        api: TodoApi::new(store, cwd),
    })
}

fn handle_add(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.add_todo(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_todos()?;
    print_todos(&result.listed_todos);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.delete_todo(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, old_name: &str, new_name: &str) -> Result<()> {
    let result = ctx.api.edit_todo(old_name, new_name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut AppContext, name: &str, completed: bool) -> Result<()> {
    let result = ctx.api.set_status(name, completed)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
