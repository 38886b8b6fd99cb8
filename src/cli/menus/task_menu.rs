use std::io::BufRead;

use crate::cli::{io::Console, output, table::Table};
use crate::domain::{Task, TaskPriority, TaskStatus};
use crate::errors::StoreError;
use crate::storage::{BinStorage, TASKS_FILE};
use crate::store::RecordStore;

use super::{report, save_on_exit};

/// Menu loop for the task manager.
pub fn run<R: BufRead>(
    store: &mut RecordStore<Task>,
    storage: &BinStorage,
    console: &mut Console<R>,
) -> Result<(), StoreError> {
    loop {
        output::section("TASK MANAGER");
        println!("1. Add New Task");
        println!("2. Update Task Status");
        println!("3. View Tasks");
        println!("4. Save and Exit");

        let Some(line) = console.read_line("Enter your choice: ")? else {
            break;
        };
        match line.trim().parse::<u32>() {
            Err(_) => output::error("Invalid input. Please enter a number."),
            Ok(1) => {
                if let Err(err) = add_task(store, console) {
                    report(err);
                }
            }
            Ok(2) => {
                if let Err(err) = update_task_status(store, console) {
                    report(err);
                }
            }
            Ok(3) => view_tasks(store),
            Ok(4) => break,
            Ok(_) => output::error("Invalid choice! Please select a valid option (1-4)."),
        }
    }

    save_on_exit(storage, store, TASKS_FILE);
    Ok(())
}

fn add_task<R: BufRead>(
    store: &mut RecordStore<Task>,
    console: &mut Console<R>,
) -> Result<(), StoreError> {
    output::section("Add New Task");
    let description = console.required_line("Enter task description: ")?;
    let priority_choice = console.prompt_menu_number("Enter priority (1-Low, 2-Medium, 3-High): ")?;
    let priority = TaskPriority::from_menu_choice(priority_choice)?;
    let date_input = console.required_line("Enter due date (YYYY-MM-DD): ")?;
    let due_date = Task::parse_due_date(&date_input)?;

    let id = store.add(Task::new(&description, priority, due_date))?;
    output::success(format!("Task #{id} added."));
    Ok(())
}

fn update_task_status<R: BufRead>(
    store: &mut RecordStore<Task>,
    console: &mut Console<R>,
) -> Result<(), StoreError> {
    if store.is_empty() {
        output::info("No tasks to update.");
        return Ok(());
    }

    output::section("Update Task Status");
    let mut table = Table::new(&["ID", "Status", "Description"]);
    for (id, task) in store.iter() {
        table.push_row(vec![
            id.to_string(),
            task.status.label().to_string(),
            task.description.clone(),
        ]);
    }
    table.print();

    let id = console.prompt_menu_number("Enter the ID of the task to update: ")? as usize;
    store.get(id)?;
    let status_choice =
        console.prompt_menu_number("Enter new status (1-Pending, 2-In Progress, 3-Completed): ")?;
    let status = TaskStatus::from_menu_choice(status_choice)?;

    store.update(id, |task| task.status = status)?;
    output::success("Task status updated.");
    Ok(())
}

fn view_tasks(store: &RecordStore<Task>) {
    if store.is_empty() {
        output::info("No tasks to display.");
        return;
    }

    let mut table = Table::new(&["ID", "Description", "Priority", "Status", "Due Date"]);
    for (id, task) in store.iter() {
        table.push_row(vec![
            id.to_string(),
            task.description.clone(),
            task.priority.label().to_string(),
            task.status.label().to_string(),
            task.due_date.format("%Y-%m-%d").to_string(),
        ]);
    }
    table.print();
}
