use anyhow::Result;
use chrono::Local;
use tabled::{settings::Style, Table, Tabled};
use taskdesk_core::{coerce_integer, is_valid_date, FieldEdit, Task, TaskStore};

use crate::console;

/// Fixed catalog of banner messages. Every recoverable error maps to one of
/// these and returns the user to the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Banner {
    InvalidMenu,
    NoTasks,
    NoSuchTask,
    NoStatusMatch,
    NoTitleMatch,
    BadDate,
}

impl Banner {
    fn message(self) -> &'static str {
        match self {
            Banner::InvalidMenu => "ERROR: Please enter a valid number between 1 and 4.",
            Banner::NoTasks => "ERROR: There are no tasks to show.",
            Banner::NoSuchTask => "ERROR: The task you are trying to view does not exist.",
            Banner::NoStatusMatch => "ERROR: No task with that status exists.",
            Banner::NoTitleMatch => "ERROR: No task containing that title was found.",
            Banner::BadDate => "ERROR: Wrong date format, only DD/MM/YYYY is accepted.",
        }
    }
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

const STATUS_PROMPT: &str = "(P = Pending / E = In progress / T = Done / C = Cancelled)";

/// Menu-driven controller for the task manager. Owns the store and the
/// pending banner; every action returns to the main menu.
pub struct TasksApp {
    store: TaskStore,
    banner: Option<Banner>,
}

impl TasksApp {
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
            banner: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            console::clear_screen()?;
            if let Some(banner) = self.banner.take() {
                console::banner(banner.message());
            }

            println!("Hello!\n");
            println!("What would you like to do?\n");
            println!(" [1] View my tasks.");
            println!(" [2] Search for a task.");
            println!(" [3] Add a task.");
            println!(" [4] Exit.\n");

            let raw = console::prompt("> ")?;
            let Some(choice) = coerce_integer(&raw) else {
                self.banner = Some(Banner::InvalidMenu);
                continue;
            };

            match choice {
                1 => self.view_tasks()?,
                2 => self.search_task()?,
                3 => self.create_task()?,
                4 => {
                    println!("\nGoodbye!\n");
                    return Ok(());
                }
                _ => self.banner = Some(Banner::InvalidMenu),
            }
        }
    }

    fn view_tasks(&mut self) -> Result<()> {
        if self.store.is_empty() {
            self.banner = Some(Banner::NoTasks);
            return Ok(());
        }

        console::clear_screen()?;
        println!("Which tasks would you like to see?\n");
        println!(" [1] All");
        println!(" [2] Pending");
        println!(" [3] In progress");
        println!(" [4] Done");
        println!(" [5] Cancelled");
        println!(" [0] Back\n");

        let raw = console::prompt("> ")?;
        let Some(choice) = coerce_integer(&raw) else {
            self.banner = Some(Banner::InvalidMenu);
            return Ok(());
        };
        if choice == 0 {
            return Ok(());
        }

        let (code, heading) = match choice {
            1 => ("All", "Here are all your tasks:"),
            2 => ("P", "Here are your pending tasks:"),
            3 => ("E", "Here are your tasks in progress:"),
            4 => ("T", "Here are your finished tasks:"),
            5 => ("C", "Here are your cancelled tasks:"),
            _ => {
                self.banner = Some(Banner::NoStatusMatch);
                return Ok(());
            }
        };

        let positions = self.store.positions_by_status(code);
        if positions.is_empty() {
            self.banner = Some(Banner::NoStatusMatch);
            return Ok(());
        }

        console::clear_screen()?;
        println!("{heading}\n");
        self.print_list(&positions);
        self.select_detail(&positions)
    }

    fn search_task(&mut self) -> Result<()> {
        if self.store.is_empty() {
            self.banner = Some(Banner::NoTasks);
            return Ok(());
        }

        console::clear_screen()?;
        println!("Enter a task title to search for it:");
        let needle = console::prompt("> ")?;

        let positions = self.store.positions_by_title(&needle);
        if positions.is_empty() {
            self.banner = Some(Banner::NoTitleMatch);
            return Ok(());
        }

        println!("\nThese are the matching tasks:\n");
        self.print_list(&positions);
        self.select_detail(&positions)
    }

    fn create_task(&mut self) -> Result<()> {
        console::clear_screen()?;
        println!("You are creating a new task.\n");

        let title = console::prompt("1. Enter the title: ")?;
        let description = console::prompt("2. Enter the description: ")?;
        let status = console::prompt(&format!("3. Status {STATUS_PROMPT}: "))?;
        let difficulty = console::prompt("4. Difficulty ([1] / [2] / [3]): ")?;
        let expiration = console::prompt("5. Expiration: ")?;

        // Only the expiration is validated here; unrecognized status or
        // difficulty values surface later through the display mappers.
        if !is_valid_date(&expiration) {
            self.banner = Some(Banner::BadDate);
            return Ok(());
        }

        let today = Local::now().date_naive();
        self.store
            .add(Task::new(title, description, status, difficulty, expiration, today));

        println!("\nSaved!\n");
        console::pause()?;
        Ok(())
    }

    fn print_list(&self, positions: &[usize]) {
        let rows: Vec<TaskRow> = positions
            .iter()
            .enumerate()
            .filter_map(|(i, &pos)| {
                self.store.task(pos).map(|task| TaskRow {
                    index: i + 1,
                    title: task.title.clone(),
                    status: task.status_label(),
                })
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    /// Offers a 1-based pick from the sequence just listed; 0 goes back.
    fn select_detail(&mut self, positions: &[usize]) -> Result<()> {
        println!("\nWould you like to see the details of one of them?");
        println!("Enter its number to view it, or 0 (zero) to go back.");

        let raw = console::prompt("> ")?;
        let Some(choice) = coerce_integer(&raw) else {
            self.banner = Some(Banner::NoSuchTask);
            return Ok(());
        };
        if choice == 0 {
            return Ok(());
        }
        if choice < 1 || choice > positions.len() as i64 {
            self.banner = Some(Banner::NoSuchTask);
            return Ok(());
        }

        let position = positions[choice as usize - 1];
        console::clear_screen()?;
        self.show_detail(position)
    }

    fn show_detail(&mut self, position: usize) -> Result<()> {
        let Some(task) = self.store.task(position) else {
            self.banner = Some(Banner::NoSuchTask);
            return Ok(());
        };

        println!("This is the task you picked:\n");
        println!("  {}\n", task.title);
        println!("  {}\n", task.description);
        println!("  Status: {}", task.status_label());
        println!("  Difficulty: {}", task.difficulty_stars());
        println!("  Expiration: {}", task.expiration);
        println!("  Created: {}", task.creation().format("%d/%m/%Y"));
        println!("  Last edited: {}\n", task.last_edition().format("%d/%m/%Y"));

        println!("Press E to edit it, or 0 (zero) to go back.");
        let choice = console::prompt("> ")?;

        if choice.eq_ignore_ascii_case("e") {
            self.edit_task(position)
        } else if choice == "0" {
            Ok(())
        } else {
            self.banner = Some(Banner::InvalidMenu);
            Ok(())
        }
    }

    fn edit_task(&mut self, position: usize) -> Result<()> {
        let Some(title) = self.store.task(position).map(|t| t.title.clone()) else {
            self.banner = Some(Banner::NoSuchTask);
            return Ok(());
        };

        console::clear_screen()?;
        println!("You are editing the task {title}.\n");
        println!("- To keep a field as it is, leave it blank.");
        println!("- To blank out a field, type a space.\n\n");

        let description = console::prompt("1. Enter the description: ")?;
        let status = console::prompt(&format!("2. Status {STATUS_PROMPT}: "))?;
        let difficulty = console::prompt("3. Difficulty ([1] / [2] / [3]): ")?;
        let expiration = console::prompt("4. Expiration: ")?;

        // A supplied expiration must parse; keeping or blanking it skips the
        // check. A bad date rejects the whole edit.
        if !expiration.is_empty() && !expiration.trim().is_empty() && !is_valid_date(&expiration) {
            self.banner = Some(Banner::BadDate);
            return Ok(());
        }

        let today = Local::now().date_naive();
        if let Some(task) = self.store.task_mut(position) {
            task.edit(
                FieldEdit::from_raw(&description),
                FieldEdit::from_raw(&status),
                FieldEdit::from_raw(&difficulty),
                FieldEdit::from_raw(&expiration),
                today,
            );
        }

        println!("\nSaved!\n");
        console::pause()?;
        Ok(())
    }
}

impl Default for TasksApp {
    fn default() -> Self {
        Self::new()
    }
}
