//! Example 01: Basic CRUD Operations
//!
//! Saves, reads, completes and deletes a task with TodoStore.
//!
//! Run with: cargo run --example 01_basic_crud

use eyre::Result;
use todostore::{Outcome, Task, TaskStore, TasksDataSource};

fn main() -> Result<()> {
    // Create a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("tasks.db");

    println!("TodoStore Basic CRUD Example");
    println!("============================\n");
    println!("Database: {}\n", db_path.display());

    let mut store = TaskStore::open(&db_path)?;

    println!("1. SAVE - Adding a task...");
    let task = Task::with_id("1", "Buy milk", "2%", false);
    store.save_task(&task)?;
    println!("   Saved task {}\n", task.id);

    println!("2. GET - Reading it back...");
    match store.task("1")? {
        Outcome::Loaded(task) => println!("   {} ({}) completed={}\n", task.title, task.description, task.completed),
        Outcome::NotAvailable => println!("   Task not found!\n"),
    }

    println!("3. COMPLETE - Marking it done...");
    store.complete_task(&task)?;
    if let Outcome::Loaded(task) = store.task("1")? {
        println!("   completed={}\n", task.completed);
    }

    println!("4. LIST - All tasks...");
    if let Outcome::Loaded(tasks) = store.tasks()? {
        for task in &tasks {
            println!("   - {} : {}", task.id, task.title_for_list());
        }
    }
    println!();

    println!("5. DELETE - Removing it...");
    store.delete_task("1")?;
    println!("   Not available after delete = {}\n", store.task("1")?.is_not_available());

    println!("Example complete!");
    Ok(())
}
