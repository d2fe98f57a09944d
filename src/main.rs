use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::io::Write;
use std::path::PathBuf;
use todostore::{Config, Outcome, Task, TaskStore, TasksDataSource};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "TodoStore CLI - Local SQLite persistence for to-do tasks")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database file, overriding the config
    #[arg(short, long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task and print its id
    Add {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List all tasks
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show a single task
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Mark a task as completed
    Complete { id: String },

    /// Mark a task as active again
    Activate { id: String },

    /// Delete all completed tasks
    ClearCompleted,

    /// Delete a task
    Delete { id: String },

    /// Delete every task
    DeleteAll,

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    if let Commands::Config = cli.command {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Open store; --db only moves the file, connection options still come from the config
    let mut store = match &cli.db {
        Some(path) => TaskStore::open_path_with_config(path, &config)?,
        None => TaskStore::open_with_config(&config)?,
    };

    let stdout = std::io::stdout();
    run(cli.command, &mut store, &mut stdout.lock())
}

fn run<W: Write>(command: Commands, store: &mut TaskStore, out: &mut W) -> Result<()> {
    match command {
        Commands::Add { title, description } => {
            let task = Task::new(title, description);
            store.save_task(&task)?;
            writeln!(out, "{}", task.id)?;
        }
        Commands::List { json } => match store.tasks()? {
            Outcome::Loaded(tasks) if json => writeln!(out, "{}", serde_json::to_string_pretty(&tasks)?)?,
            Outcome::Loaded(tasks) => {
                for task in &tasks {
                    write_task(out, task)?;
                }
            }
            Outcome::NotAvailable if json => writeln!(out, "[]")?,
            Outcome::NotAvailable => writeln!(out, "No tasks")?,
        },
        Commands::Show { id, json } => match store.task(&id)? {
            Outcome::Loaded(task) if json => writeln!(out, "{}", serde_json::to_string_pretty(&task)?)?,
            Outcome::Loaded(task) => {
                write_task(out, &task)?;
                if !task.description.is_empty() && !task.title.is_empty() {
                    writeln!(out, "    {}", task.description)?;
                }
            }
            Outcome::NotAvailable if json => writeln!(out, "null")?,
            Outcome::NotAvailable => writeln!(out, "Task not found: {}", id)?,
        },
        Commands::Complete { id } => {
            if store.set_completed(&id, true)? == 0 {
                writeln!(out, "Task not found: {}", id)?;
            }
        }
        Commands::Activate { id } => {
            if store.set_completed(&id, false)? == 0 {
                writeln!(out, "Task not found: {}", id)?;
            }
        }
        Commands::ClearCompleted => {
            let removed = store.clear_completed()?;
            writeln!(out, "Removed {} completed task(s)", removed)?;
        }
        Commands::Delete { id } => {
            if store.delete(&id)? == 0 {
                writeln!(out, "Task not found: {}", id)?;
            }
        }
        Commands::DeleteAll => {
            let removed = store.delete_all()?;
            writeln!(out, "Removed {} task(s)", removed)?;
        }
        // printed before the store is opened
        Commands::Config => {}
    }

    Ok(())
}

fn write_task<W: Write>(out: &mut W, task: &Task) -> Result<()> {
    let mark = if task.completed {
        "[x]".green()
    } else {
        "[ ]".normal()
    };
    writeln!(out, "{} {} {}", mark, task.id.dimmed(), task.title_for_list())?;
    Ok(())
}
