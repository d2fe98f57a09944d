// Data source contract consumed by the task repository

use crate::outcome::Outcome;
use crate::task::Task;
use eyre::Result;

/// Operations a tasks data source offers to the repository layer
///
/// Reads report absence through `Outcome::NotAvailable`; everything else
/// that goes wrong is returned as an error.
pub trait TasksDataSource {
    /// All tasks, or `NotAvailable` when there are none
    fn tasks(&self) -> Result<Outcome<Vec<Task>>>;

    /// The task with this id, or `NotAvailable`
    fn task(&self, id: &str) -> Result<Outcome<Task>>;

    /// Store a task, replacing any existing task with the same id
    fn save_task(&mut self, task: &Task) -> Result<()>;

    fn complete_task(&mut self, task: &Task) -> Result<()> {
        self.complete_task_by_id(task.id())
    }

    fn complete_task_by_id(&mut self, id: &str) -> Result<()>;

    fn activate_task(&mut self, task: &Task) -> Result<()> {
        self.activate_task_by_id(task.id())
    }

    fn activate_task_by_id(&mut self, id: &str) -> Result<()>;

    /// Remove every completed task
    fn clear_completed_tasks(&mut self) -> Result<()>;

    /// Refreshing from other sources is the repository's job; nothing to do here
    fn refresh_tasks(&mut self) {}

    fn delete_all_tasks(&mut self) -> Result<()>;

    fn delete_task(&mut self, id: &str) -> Result<()>;
}
