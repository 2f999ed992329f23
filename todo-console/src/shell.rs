//! Interactive menu shell.
//!
//! Thin presentation layer over [`TaskRepository`]: it prompts, parses, and
//! renders, but keeps no state of its own. The terminal sits behind the
//! [`Console`] trait so the whole menu flow can be exercised in tests with a
//! scripted console.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::repository::{Error, Saved, TaskRepository};
use crate::task::{Task, Warning};

/// Terminal seam for the shell.
///
/// `read_line` shows a prompt and returns one line of input without its
/// trailing newline; `write_line` emits one line of output.
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console backed by the process's stdin and stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{prompt}")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }
}

/// Drives the 6-item menu loop against a borrowed repository.
pub struct Shell<'a, C: Console> {
    repository: &'a mut TaskRepository,
    console: &'a mut C,
}

impl<'a, C: Console> Shell<'a, C> {
    pub fn new(repository: &'a mut TaskRepository, console: &'a mut C) -> Self {
        Self {
            repository,
            console,
        }
    }

    /// Runs the menu loop until the user picks Exit.
    ///
    /// Only console I/O errors escape; every domain failure is rendered as a
    /// message and the loop carries on.
    pub fn run(&mut self) -> io::Result<()> {
        self.console
            .write_line("\nWelcome to the In-Memory Todo Console Application!")?;
        self.console
            .write_line("All data is stored in memory and will be lost when you exit.")?;

        loop {
            self.show_menu()?;
            let choice = self.console.read_line("\nEnter your choice (1-6): ")?;
            debug!("menu choice: {choice:?}");

            match choice.trim() {
                "1" => self.add_task()?,
                "2" => self.view_tasks()?,
                "3" => self.update_task()?,
                "4" => self.delete_task()?,
                "5" => self.toggle_task_status()?,
                "6" => {
                    self.console
                        .write_line("\nThank you for using the Todo Console Application!")?;
                    self.console
                        .write_line("All tasks have been cleared from memory. Goodbye!")?;
                    return Ok(());
                }
                _ => {
                    self.console
                        .write_line("\nError: Invalid choice. Please try again.")?;
                    self.console
                        .write_line("Please enter a number between 1 and 6.")?;
                }
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let divider = "=".repeat(50);
        self.console.write_line(&format!("\n{divider}"))?;
        self.console
            .write_line("         TODO CONSOLE APPLICATION")?;
        self.console.write_line(&divider)?;
        self.console.write_line("1. Add Task")?;
        self.console.write_line("2. View Tasks")?;
        self.console.write_line("3. Update Task")?;
        self.console.write_line("4. Delete Task")?;
        self.console.write_line("5. Mark Complete/Incomplete")?;
        self.console.write_line("6. Exit")?;
        self.console.write_line(&divider)
    }

    fn add_task(&mut self) -> io::Result<()> {
        self.console.write_line("\n--- Add New Task ---")?;

        // The blocking retry loop lives here, not in the repository.
        let title = loop {
            let input = self.console.read_line("Enter task title: ")?;
            if input.trim().is_empty() {
                self.console
                    .write_line(&format!("Error: {}", Error::InvalidTitle))?;
                continue;
            }
            break input;
        };
        let description = self
            .console
            .read_line("Enter task description (optional, press Enter to skip): ")?;

        match self.repository.create(&title, &description) {
            Ok(Saved { task, warnings }) => {
                self.show_warnings(&warnings)?;
                self.console
                    .write_line(&format!("\nSuccess! Task created with ID {}", task.id))?;
                self.console.write_line(&format!("Title: {}", task.title))?;
                self.console
                    .write_line(&format!("Status: {}", task.status))?;
            }
            Err(error) => self.console.write_line(&format!("Error: {error}"))?,
        }
        Ok(())
    }

    fn view_tasks(&mut self) -> io::Result<()> {
        self.console.write_line("\n--- All Tasks ---")?;

        let tasks = self.repository.list();
        if tasks.is_empty() {
            self.console
                .write_line("\nNo tasks found. Add your first task to get started!")?;
            return Ok(());
        }

        let divider = "-".repeat(50);
        for task in &tasks {
            self.console.write_line(&format!("\n{divider}"))?;
            self.show_task(task)?;
        }
        self.console.write_line(&divider)?;
        self.console
            .write_line(&format!("\nTotal tasks: {}", tasks.len()))
    }

    fn update_task(&mut self) -> io::Result<()> {
        self.console.write_line("\n--- Update Task ---")?;
        let Some(id) = self.read_task_id("Enter task ID to update: ")? else {
            return Ok(());
        };

        let current = match self.repository.get(id) {
            Ok(task) => task.clone(),
            Err(error) => return self.console.write_line(&error.to_string()),
        };
        self.console
            .write_line(&format!("\nCurrent title: {}", current.title))?;
        self.console.write_line(&format!(
            "Current description: {}",
            display_description(&current.description)
        ))?;

        let new_title = self
            .console
            .read_line("\nEnter new title (or press Enter to keep current): ")?;
        let new_description = self
            .console
            .read_line("Enter new description (or press Enter to keep current): ")?;

        match self.repository.update(id, &new_title, &new_description) {
            Ok(Saved { task, warnings }) => {
                self.show_warnings(&warnings)?;
                self.console
                    .write_line(&format!("\nSuccess! Task ID {id} updated"))?;
                self.console
                    .write_line(&format!("New title: {}", task.title))?;
                self.console.write_line(&format!(
                    "New description: {}",
                    display_description(&task.description)
                ))?;
            }
            Err(error) => self.console.write_line(&format!("Error: {error}"))?,
        }
        Ok(())
    }

    fn delete_task(&mut self) -> io::Result<()> {
        self.console.write_line("\n--- Delete Task ---")?;
        let Some(id) = self.read_task_id("Enter task ID to delete: ")? else {
            return Ok(());
        };

        match self.repository.delete(id) {
            Ok(task) => {
                self.console.write_line("\nTask to delete:")?;
                self.console.write_line(&format!("ID: {}", task.id))?;
                self.console.write_line(&format!("Title: {}", task.title))?;
                self.console
                    .write_line(&format!("\nTask ID {id} deleted successfully"))
            }
            Err(error) => self.console.write_line(&error.to_string()),
        }
    }

    fn toggle_task_status(&mut self) -> io::Result<()> {
        self.console
            .write_line("\n--- Mark Complete/Incomplete ---")?;
        let Some(id) = self.read_task_id("Enter task ID: ")? else {
            return Ok(());
        };

        let current = match self.repository.get(id) {
            Ok(task) => task.status,
            Err(error) => return self.console.write_line(&error.to_string()),
        };
        self.console
            .write_line(&format!("\nCurrent status: {current}"))?;

        match self.repository.toggle_status(id) {
            Ok(task) => {
                let status = task.status;
                self.console
                    .write_line(&format!("\nTask ID {id} marked as {status}"))
            }
            Err(error) => self.console.write_line(&error.to_string()),
        }
    }

    /// Reads and parses a task id; renders an error and returns `None` when
    /// the input is not a number.
    fn read_task_id(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        let input = self.console.read_line(prompt)?;
        match input.trim().parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.console
                    .write_line("Error: Please enter a valid number")?;
                Ok(None)
            }
        }
    }

    fn show_warnings(&mut self, warnings: &[Warning]) -> io::Result<()> {
        for warning in warnings {
            self.console.write_line(&format!("Warning: {warning}"))?;
        }
        Ok(())
    }

    fn show_task(&mut self, task: &Task) -> io::Result<()> {
        self.console.write_line(&format!("ID: {}", task.id))?;
        self.console.write_line(&format!("Title: {}", task.title))?;
        self.console.write_line(&format!(
            "Description: {}",
            display_description(&task.description)
        ))?;
        self.console.write_line(&format!("Status: {}", task.status))
    }
}

fn display_description(description: &str) -> &str {
    if description.is_empty() {
        "[No description]"
    } else {
        description
    }
}
