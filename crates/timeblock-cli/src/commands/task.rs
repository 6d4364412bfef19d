//! Task management commands for CLI.

use clap::Subcommand;
use timeblock_core::task::restructure::{restructure, restructure_at, Approach};
use timeblock_core::Task;

use crate::store;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task name
        name: String,
        /// Project label
        #[arg(long)]
        project: Option<String>,
        /// Estimated duration in hours
        #[arg(long)]
        hours: Option<f64>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<chrono::NaiveDate>,
        /// Importance (higher = more urgent)
        #[arg(long, default_value = "0")]
        importance: i64,
        /// Complexity (higher = harder)
        #[arg(long, default_value = "0")]
        complexity: i64,
    },
    /// List tasks
    List,
    /// Remove a task
    Remove {
        /// Task index or id
        task: String,
    },
    /// Restructure a task into a managed form
    Restructure {
        /// Task index or id
        task: String,
        /// Approach: planning, breakdown, focus, iterative or fixed
        #[arg(long)]
        approach: String,
        /// Approach parameters as a JSON object
        #[arg(long)]
        params: Option<String>,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Add {
            name,
            project,
            hours,
            due,
            importance,
            complexity,
        } => {
            let mut tasks = store::load_tasks()?;
            let mut task = Task::new(name);
            task.project = project;
            task.estimated_hours = hours;
            task.due_date = due;
            task.importance = importance;
            task.complexity = complexity;
            tasks.push(task.clone());
            store::save_tasks(&tasks)?;
            println!("Task added: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List => {
            let tasks = store::load_tasks()?;
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Remove { task } => {
            let mut tasks = store::load_tasks()?;
            let index = resolve_index(&tasks, &task)?;
            let removed = tasks.remove(index);
            store::save_tasks(&tasks)?;
            println!("Task removed: {}", removed.id);
        }
        TaskAction::Restructure {
            task,
            approach,
            params,
        } => {
            let tasks = store::load_tasks()?;
            let params: serde_json::Value = match params {
                Some(raw) => serde_json::from_str(&raw)?,
                None => serde_json::Value::Null,
            };
            let approach = Approach::from_parts(&approach, params)?;

            // Positional index or stable id; persisted only on success.
            let updated = match task.parse::<usize>() {
                Ok(index) => restructure_at(&tasks, index, &approach)?,
                Err(_) => restructure(&tasks, &task, &approach)?,
            };
            store::save_tasks(&updated)?;
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
    }

    Ok(())
}

/// Resolve an index-or-id argument against the task list.
fn resolve_index(tasks: &[Task], key: &str) -> Result<usize, Box<dyn std::error::Error>> {
    if let Ok(index) = key.parse::<usize>() {
        if index < tasks.len() {
            return Ok(index);
        }
        return Err(format!("task index {index} out of range (length: {})", tasks.len()).into());
    }
    tasks
        .iter()
        .position(|t| t.id == key)
        .ok_or_else(|| format!("task not found: {key}").into())
}
