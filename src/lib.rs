// TodoStore - Local SQLite persistence for to-do tasks

pub mod config;
pub mod outcome;
pub mod source;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::Config;
pub use outcome::Outcome;
pub use source::TasksDataSource;
pub use store::TaskStore;
pub use task::Task;

// Re-export rusqlite for CLI use
pub use rusqlite;
