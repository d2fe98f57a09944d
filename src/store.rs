// SQLite-backed local task store

use crate::config::Config;
use crate::outcome::Outcome;
use crate::source::TasksDataSource;
use crate::task::Task;
use eyre::{Context, Result, eyre};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const CURRENT_VERSION: u32 = 1;

const SELECT_TASKS: &str = "SELECT entryid, title, description, completed FROM task";

/// Local task store over a single SQLite connection
///
/// The connection is opened once and held until the store is dropped.
pub struct TaskStore {
    path: Option<PathBuf>,
    db: Connection,
}

impl TaskStore {
    /// Open or create a store at the given database file path with default settings
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_path_with_config(path, &Config::default())
    }

    /// Open or create the store described by a config
    pub fn open_with_config(config: &Config) -> Result<Self> {
        Self::open_path_with_config(config.db_path(), config)
    }

    /// Open or create a store at `path`, taking connection options from `config`
    ///
    /// The config's `store_dir` and `db_file` are ignored.
    pub fn open_path_with_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self> {
        Self::open_at(path.as_ref(), config.busy_timeout_ms, config.wal)
    }

    /// Open an isolated store that lives only as long as this value
    pub fn open_in_memory() -> Result<Self> {
        let db = Connection::open_in_memory().context("Failed to open in-memory SQLite database")?;
        let store = Self { path: None, db };
        store.init()?;
        Ok(store)
    }

    fn open_at(path: &Path, busy_timeout_ms: u64, wal: bool) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let db = Connection::open(path).context("Failed to open SQLite database")?;
        db.busy_timeout(Duration::from_millis(busy_timeout_ms))?;

        if wal {
            let mode: String =
                db.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
            debug!(journal_mode = %mode, "Set journal mode");
        }

        let store = Self {
            path: Some(path.to_path_buf()),
            db,
        };
        store.init()?;

        info!(path = ?path, "Opened task store");
        Ok(store)
    }

    /// Path of the database file, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a reference to the SQLite database connection
    pub fn db(&self) -> &Connection {
        &self.db
    }

    fn init(&self) -> Result<()> {
        let version: u32 = self
            .db
            .pragma_query_value(None, "user_version", |row| row.get(0))?;

        if version > CURRENT_VERSION {
            return Err(eyre!(
                "Database schema version {} is newer than supported version {}",
                version,
                CURRENT_VERSION
            ));
        }

        self.create_schema()?;

        if version < CURRENT_VERSION {
            self.db.pragma_update(None, "user_version", CURRENT_VERSION)?;
        }

        Ok(())
    }

    fn create_schema(&self) -> Result<()> {
        debug!("Creating database schema");

        self.db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS task (
                entryid TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL DEFAULT '',
                description TEXT NOT NULL DEFAULT '',
                completed INTEGER NOT NULL DEFAULT 0 CHECK (completed IN (0, 1))
            );
            "#,
        )?;

        Ok(())
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// All tasks in storage order
    pub fn list(&self) -> Result<Outcome<Vec<Task>>> {
        let mut stmt = self.db.prepare(&format!("{} ORDER BY rowid", SELECT_TASKS))?;
        let rows = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.context("Failed to read task row")?);
        }

        debug!(rows = tasks.len(), "list");
        Ok(Outcome::from_vec(tasks))
    }

    /// A task by exact id
    pub fn get(&self, id: &str) -> Result<Outcome<Task>> {
        let task = self
            .db
            .query_row(
                &format!("{} WHERE entryid = ?1 ORDER BY rowid LIMIT 1", SELECT_TASKS),
                [id],
                task_from_row,
            )
            .optional()?;

        debug!(id, found = task.is_some(), "get");
        Ok(task.into())
    }

    /// Number of stored tasks
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .db
            .query_row("SELECT COUNT(*) FROM task", [], |row| row.get(0))?;
        usize::try_from(count).context("Task count out of range")
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Insert a task, or overwrite the fields of the task that already has its id
    ///
    /// An overwritten task keeps its position in `list` order.
    pub fn save(&mut self, task: &Task) -> Result<()> {
        Self::validate_id(&task.id)?;

        self.db.execute(
            "INSERT INTO task (entryid, title, description, completed)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(entryid) DO UPDATE SET
                 title = excluded.title,
                 description = excluded.description,
                 completed = excluded.completed",
            params![task.id, task.title, task.description, task.completed],
        )?;

        debug!(id = %task.id, "save");
        Ok(())
    }

    /// Set the completion flag. Returns the number of rows changed (0 if the id is unknown).
    pub fn set_completed(&mut self, id: &str, completed: bool) -> Result<usize> {
        let rows = self.db.execute(
            "UPDATE task SET completed = ?1 WHERE entryid = ?2",
            params![completed, id],
        )?;

        debug!(id, completed, rows, "set_completed");
        Ok(rows)
    }

    /// Delete a task by id. Returns the number of rows removed.
    pub fn delete(&mut self, id: &str) -> Result<usize> {
        let rows = self.db.execute("DELETE FROM task WHERE entryid = ?1", [id])?;
        debug!(id, rows, "delete");
        Ok(rows)
    }

    /// Delete every task. Returns the number of rows removed.
    pub fn delete_all(&mut self) -> Result<usize> {
        let rows = self.db.execute("DELETE FROM task", [])?;
        debug!(rows, "delete_all");
        Ok(rows)
    }

    /// Delete every completed task. Returns the number of rows removed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let rows = self.db.execute("DELETE FROM task WHERE completed = 1", [])?;
        debug!(rows, "clear_completed");
        Ok(rows)
    }

    /// Validate task ID
    fn validate_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(eyre!("Task ID cannot be empty or whitespace-only"));
        }

        if id.len() > 256 {
            return Err(eyre!("Task ID too long: {} chars (max 256)", id.len()));
        }

        Ok(())
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
    })
}

impl TasksDataSource for TaskStore {
    fn tasks(&self) -> Result<Outcome<Vec<Task>>> {
        self.list()
    }

    fn task(&self, id: &str) -> Result<Outcome<Task>> {
        self.get(id)
    }

    fn save_task(&mut self, task: &Task) -> Result<()> {
        self.save(task)
    }

    fn complete_task_by_id(&mut self, id: &str) -> Result<()> {
        self.set_completed(id, true)?;
        Ok(())
    }

    fn activate_task_by_id(&mut self, id: &str) -> Result<()> {
        self.set_completed(id, false)?;
        Ok(())
    }

    fn clear_completed_tasks(&mut self) -> Result<()> {
        self.clear_completed()?;
        Ok(())
    }

    fn delete_all_tasks(&mut self) -> Result<()> {
        self.delete_all()?;
        Ok(())
    }

    fn delete_task(&mut self, id: &str) -> Result<()> {
        self.delete(id)?;
        Ok(())
    }
}
