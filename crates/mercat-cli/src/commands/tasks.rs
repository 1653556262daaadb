//! Task subcommand implementations.
//!
//! The task board is a public view: the API exposes it without a session,
//! so no guard check runs here.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};

use mercat::api::TaskDraft;

use crate::output;

use super::AppContext;

#[derive(Args, Debug)]
pub struct TasksCommand {
    #[command(subcommand)]
    pub command: TasksSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TasksSubcommand {
    /// List all tasks
    List(ListArgs),

    /// Add a new task
    Add(AddArgs),

    /// Toggle a task's completion status
    Toggle(ToggleArgs),

    /// Delete a task
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output raw JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Task title
    #[arg(long)]
    pub title: String,

    /// Task description
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct ToggleArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Task id
    pub id: u64,
}

pub async fn run(ctx: &AppContext, cmd: TasksCommand) -> Result<()> {
    match cmd.command {
        TasksSubcommand::List(args) => list(ctx, args).await,
        TasksSubcommand::Add(args) => add(ctx, args).await,
        TasksSubcommand::Toggle(args) => toggle(ctx, args).await,
        TasksSubcommand::Remove(args) => remove(ctx, args).await,
    }
}

async fn list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let tasks = ctx
        .client
        .list_tasks()
        .await
        .context("Failed to fetch tasks")?;

    if args.json {
        return output::json_pretty(&tasks);
    }

    for task in &tasks {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        println!("{} #{} {}", mark, task.id, task.title);
    }
    Ok(())
}

async fn add(ctx: &AppContext, args: AddArgs) -> Result<()> {
    let draft = TaskDraft {
        title: args.title,
        description: args.description,
        completed: false,
    };

    let task = ctx
        .client
        .create_task(&draft)
        .await
        .context("Failed to create task")?;

    output::success(&format!("Created task #{}", task.id));
    Ok(())
}

async fn toggle(ctx: &AppContext, args: ToggleArgs) -> Result<()> {
    // The API has no single-task fetch; mirror the board and resolve the
    // task from the list before updating it.
    let tasks = ctx
        .client
        .list_tasks()
        .await
        .context("Failed to fetch tasks")?;

    let Some(task) = tasks.into_iter().find(|t| t.id == args.id) else {
        bail!("No task with id {}", args.id);
    };

    let draft = TaskDraft {
        title: task.title,
        description: task.description,
        completed: !task.completed,
    };

    let updated = ctx
        .client
        .update_task(args.id, &draft)
        .await
        .context("Failed to update task")?;

    let state = if updated.completed { "done" } else { "open" };
    output::success(&format!("Task #{} is now {}", updated.id, state));
    Ok(())
}

async fn remove(ctx: &AppContext, args: RemoveArgs) -> Result<()> {
    ctx.client
        .delete_task(args.id)
        .await
        .context("Failed to delete task")?;

    output::success(&format!("Deleted task #{}", args.id));
    Ok(())
}
