use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todo_core::{Storage, TodoList};

mod table;

#[derive(Parser, Debug)]
#[command(name = "todo", about = "Manage a personal todo list from the terminal")]
struct Cli {
    /// File the todo list is persisted to
    #[arg(long, global = true, default_value = "todos.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Add a new todo
    Add { title: String },
    /// Replace the title of the todo at INDEX
    Edit { index: usize, title: String },
    /// Flip the completion state of the todo at INDEX
    Toggle { index: usize },
    /// Remove the todo at INDEX
    Delete { index: usize },
    /// Print the todo list
    List,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let storage: Storage<TodoList> = Storage::new(args.file.clone());
    let mut todos = storage.load()?;
    log::debug!("loaded {} todos from {}", todos.len(), args.file.display());

    let mutated = match args.command {
        Commands::Add { title } => {
            todos.add(title);
            true
        }
        Commands::Edit { index, title } => {
            todos.edit(index, title)?;
            true
        }
        Commands::Toggle { index } => {
            todos.toggle(index)?;
            true
        }
        Commands::Delete { index } => {
            todos.delete(index)?;
            true
        }
        Commands::List => false,
    };

    // The file is only rewritten after a mutation has fully succeeded, so
    // a failed operation leaves the stored list untouched.
    if mutated {
        storage.save(&todos)?;
        log::debug!("saved {} todos to {}", todos.len(), args.file.display());
    }

    table::print(&todos, &table::TableConfig::default());
    Ok(())
}
